use crate::DisplayResult;

/// Port for the display surface the clock writes to
///
/// A single text element identified by a stable id, overwritten on each
/// tick. Only the refresher writes to it.
pub trait Surface: Send + Sync {
    /// Stable identifier for this surface
    fn id(&self) -> &str;

    /// Replace the surface's text content
    fn set_text(&self, text: &str) -> DisplayResult<()>;
}
