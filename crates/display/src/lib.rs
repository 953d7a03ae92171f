//! Horologe Display Adapters
//!
//! Concrete [`Surface`](horologe_ports::Surface) implementations plus the
//! registry that resolves a surface from its stable id:
//!
//! - [`TerminalSurface`] - rewrites a single terminal line in place
//! - [`MemorySurface`] - records writes, for tests and headless runs
//! - [`SurfaceRegistry`] - id lookup; a missing id is a hard error

mod memory;
mod registry;
mod terminal;

pub use memory::MemorySurface;
pub use registry::SurfaceRegistry;
pub use terminal::TerminalSurface;
