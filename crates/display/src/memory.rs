use horologe_ports::{DisplayResult, Surface};
use std::sync::RwLock;

/// In-memory display surface for tests and headless runs
///
/// Records every write so tests can assert on refresh behavior.
pub struct MemorySurface {
    id: String,
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    text: String,
    history: Vec<String>,
}

impl MemorySurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Current text content
    pub fn text(&self) -> String {
        self.state.read().expect("surface lock poisoned").text.clone()
    }

    /// Number of writes since creation
    pub fn write_count(&self) -> usize {
        self.state.read().expect("surface lock poisoned").history.len()
    }

    /// Every text ever written, in order
    pub fn history(&self) -> Vec<String> {
        self.state
            .read()
            .expect("surface lock poisoned")
            .history
            .clone()
    }
}

impl Surface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_text(&self, text: &str) -> DisplayResult<()> {
        let mut state = self.state.write().expect("surface lock poisoned");
        state.text = text.to_string();
        state.history.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes_in_order() {
        let surface = MemorySurface::new("timestamp");

        surface.set_text("first").unwrap();
        surface.set_text("second").unwrap();

        assert_eq!(surface.text(), "second");
        assert_eq!(surface.write_count(), 2);
        assert_eq!(surface.history(), vec!["first", "second"]);
    }

    #[test]
    fn test_starts_empty() {
        let surface = MemorySurface::new("timestamp");

        assert_eq!(surface.text(), "");
        assert_eq!(surface.write_count(), 0);
    }
}
