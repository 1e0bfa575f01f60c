//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod classify;
mod overlap;
mod roadmap;
mod score;
mod validate;

pub use classify::run_classify;
pub use overlap::run_overlap;
pub use roadmap::run_roadmap;
pub use score::run_score;
pub use validate::run_validate;
