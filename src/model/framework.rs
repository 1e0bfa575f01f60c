//! Static content model of one regulatory framework.
//!
//! Every framework shares the same closed shape: categories, questions with
//! a four-level maturity rubric, and recommendations carrying a baseline
//! cost estimate. Content is authored per framework and never mutated by
//! the engine.

use serde::{Deserialize, Serialize};

use super::identifiers::{CategoryId, FrameworkId, QuestionId, RecommendationId};

/// Whether a question belongs to the minimal or the extended assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionTier {
    #[default]
    Core,
    Advanced,
}

/// A named grouping of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Framework-specific legal reference (e.g. "Art. 21(2)(b)"), opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
}

/// One assessment question with its maturity rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub tier: QuestionTier,
    pub title: String,
    /// Descriptions of maturity levels 0 through 3
    pub rubric: [String; 4],
}

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Implementation-phase bucket a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffortLevel {
    Quick,
    Medium,
    Strategic,
}

impl EffortLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Medium => "medium",
            Self::Strategic => "strategic",
        }
    }

    /// All effort levels in roadmap order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Quick, Self::Medium, Self::Strategic]
    }
}

/// Inclusive `{min, max}` range of a baseline estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EstimateRange {
    pub min: f64,
    pub max: f64,
}

impl EstimateRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Baseline effort and cost of implementing one recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BaselineCost {
    pub internal_effort_days: EstimateRange,
    #[serde(default)]
    pub external_cost_eur: EstimateRange,
    #[serde(default)]
    pub tool_cost_eur_year: EstimateRange,
}

/// An improvement recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub category_id: CategoryId,
    pub title: String,
    pub priority: Priority,
    pub effort_level: EffortLevel,
    pub cost: BaselineCost,
    /// Optional implementation checklist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<String>>,
}

/// Per-category question count, the only content the scorer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    pub category_id: CategoryId,
    pub total_questions: usize,
}

/// Complete content model of one framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Framework {
    pub framework: FrameworkId,
    #[serde(default)]
    pub version: Option<String>,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Framework {
    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a question by id
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Look up a recommendation by id
    #[must_use]
    pub fn recommendation(&self, id: &RecommendationId) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| &r.id == id)
    }

    /// Question counts per category, in content order.
    ///
    /// Categories without questions are included with a count of zero.
    #[must_use]
    pub fn category_meta(&self) -> Vec<CategoryMeta> {
        self.categories
            .iter()
            .map(|c| CategoryMeta {
                category_id: c.id.clone(),
                total_questions: self
                    .questions
                    .iter()
                    .filter(|q| q.category_id == c.id)
                    .count(),
            })
            .collect()
    }

    /// Questions restricted to one tier
    pub fn questions_in_tier(&self, tier: QuestionTier) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.tier == tier)
    }
}
