//! Caller-owned snapshot of an assessment in progress.

use serde::{Deserialize, Serialize};

use super::answer::Answer;
use super::identifiers::FrameworkId;
use super::profile::OrganizationProfile;

/// Answers-so-far plus onboarding data, handed to the engine on every call.
///
/// The engine never stores a session; callers persist it between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentSession {
    pub framework: FrameworkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationProfile>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AssessmentSession {
    /// Empty session for a framework
    #[must_use]
    pub const fn new(framework: FrameworkId) -> Self {
        Self {
            framework,
            organization: None,
            answers: Vec::new(),
        }
    }

    /// Number of answers that carry a level
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }
}
