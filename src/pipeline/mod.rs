//! Pipeline orchestration for CLI commands.
//!
//! This module provides shared load → compute → report logic, reducing
//! duplication across CLI command handlers.

mod load;
mod output;

pub use load::{load_content_with_context, load_session_with_context, LoadedAssessment};
pub use output::{output_report, should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The overall score is below the configured minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
