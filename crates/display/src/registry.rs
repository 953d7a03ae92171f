use horologe_ports::{DisplayError, DisplayResult, Surface};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of display surfaces keyed by stable id
///
/// Looking up an unregistered id is a hard error: a missing surface must
/// fail fast, never silently succeed.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Arc<dyn Surface>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under its own id, replacing any previous entry
    pub fn register(&mut self, surface: Arc<dyn Surface>) {
        self.surfaces.insert(surface.id().to_string(), surface);
    }

    /// Look up a surface by id
    pub fn get(&self, id: &str) -> DisplayResult<Arc<dyn Surface>> {
        self.surfaces
            .get(id)
            .cloned()
            .ok_or_else(|| DisplayError::SurfaceNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
