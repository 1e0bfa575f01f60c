//! Answers recorded by the end user during an assessment.

use serde::{Deserialize, Serialize};

use super::identifiers::QuestionId;
use crate::error::{EngineError, Result};

/// Maturity rating of one question, 0 (absent) through 3 (fully implemented).
///
/// Values outside that range cannot be constructed; they are rejected with
/// a validation error rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MaturityLevel(u8);

impl MaturityLevel {
    /// Highest maturity level
    pub const MAX: u8 = 3;

    pub const NONE: Self = Self(0);
    pub const INITIAL: Self = Self(1);
    pub const DEFINED: Self = Self(2);
    pub const MANAGED: Self = Self(3);

    /// Validate a raw level
    pub fn new(level: i64) -> Result<Self> {
        match u8::try_from(level) {
            Ok(value) if value <= Self::MAX => Ok(Self(value)),
            _ => Err(EngineError::validation(format!(
                "maturity level {level} is outside 0..={}",
                Self::MAX
            ))),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Linear contribution of this level to a percentage score (level 3 = 100)
    #[must_use]
    pub fn contribution(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX) * 100.0
    }

    /// Next level up, if any
    #[must_use]
    pub const fn raised(self) -> Option<Self> {
        if self.0 < Self::MAX {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

impl TryFrom<i64> for MaturityLevel {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.0
    }
}

/// A user's answer to one question; `level` is `None` while unanswered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(default)]
    pub level: Option<MaturityLevel>,
}

impl Answer {
    /// An answered question
    pub fn new(question_id: impl Into<QuestionId>, level: MaturityLevel) -> Self {
        Self {
            question_id: question_id.into(),
            level: Some(level),
        }
    }

    /// A question the user has seen but not rated yet
    pub fn unanswered(question_id: impl Into<QuestionId>) -> Self {
        Self {
            question_id: question_id.into(),
            level: None,
        }
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.level.is_some()
    }
}
