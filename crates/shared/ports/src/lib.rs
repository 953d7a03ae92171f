//! Horologe Ports
//!
//! Port definitions (traits) for the Horologe terminal clock.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod surface;

pub use clock::Clock;
pub use error::{DisplayError, DisplayResult};
pub use surface::Surface;
