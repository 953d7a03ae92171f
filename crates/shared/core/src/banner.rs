//! Startup banner lines
//!
//! Two static informational lines emitted to the developer console once at
//! startup. Nothing reads them at runtime.

/// First banner line
pub const READY_BANNER: &str = ">>> SYSTEM READY <<<";

/// Second banner line
pub const EXPANSION_NOTE: &str = "Built for expansion.";
