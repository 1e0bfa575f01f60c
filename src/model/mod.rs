//! Content model and session inputs.
//!
//! This module defines the data the engine computes over: the static
//! per-framework content ([`Framework`]), the user's [`Answer`]s, and the
//! organization data captured during onboarding. Frameworks share one closed
//! shape and are selected by an explicit [`FrameworkId`].

mod answer;
mod framework;
mod identifiers;
mod profile;
mod session;

pub use answer::*;
pub use framework::*;
pub use identifiers::*;
pub use profile::*;
pub use session::*;
