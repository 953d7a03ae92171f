use thiserror::Error;

/// Errors for display surface operations
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("No display surface registered with id '{0}'")]
    SurfaceNotFound(String),

    #[error("Failed to write to display surface: {0}")]
    Io(#[from] std::io::Error),
}

pub type DisplayResult<T> = std::result::Result<T, DisplayError>;
