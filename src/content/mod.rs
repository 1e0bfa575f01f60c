//! Framework content loading and load-time validation.
//!
//! Content files are YAML or JSON documents matching [`Framework`]. Every
//! loaded framework is validated before it is returned, so the scoring,
//! cost and roadmap calculators can assume consistent identifiers.
//!
//! [`Framework`]: crate::model::Framework

mod loader;
mod validation;

pub use loader::{
    load_framework, load_overlap_table, load_session, load_session_for, parse_framework_str,
    DocumentFormat,
};
pub use validation::validate_framework;
