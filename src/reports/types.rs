//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{ClassificationResult, PenaltyCeiling};
use crate::cost::{CostEstimate, CostTiers};
use crate::model::{EntityCategory, FrameworkId, RecommendationId};
use crate::overlap::{Asymmetry, OverlapResult};
use crate::roadmap::Roadmap;
use crate::scoring::{AggregationPolicy, OverallScore, SCORING_ENGINE_VERSION};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Provenance stamped on every report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub scoring_engine_version: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    /// Metadata for a report generated now
    #[must_use]
    pub fn now() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self::now()
    }
}

/// Scores of one assessment session
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub metadata: ReportMetadata,
    pub framework: FrameworkId,
    pub aggregation: AggregationPolicy,
    pub score: OverallScore,
}

/// Entity classification of the organization in a session
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub metadata: ReportMetadata,
    pub framework: FrameworkId,
    pub classification: ClassificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<PenaltyCeiling>,
}

/// Phased roadmap with scaled cost estimates
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapReport {
    pub metadata: ReportMetadata,
    pub framework: FrameworkId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
    pub roadmap: Roadmap,
    /// Per-recommendation estimates, in roadmap order
    pub estimates: IndexMap<RecommendationId, CostEstimate>,
    pub cost_tiers: CostTiers,
}

/// Cross-framework overlap
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    pub metadata: ReportMetadata,
    pub overlap: OverlapResult,
}

/// Outcome of validating a content file
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub metadata: ReportMetadata,
    pub framework: FrameworkId,
    pub categories: usize,
    pub questions: usize,
    pub recommendations: usize,
    /// Overlap mappings whose reverse direction is missing or disagrees
    pub overlap_asymmetries: Vec<Asymmetry>,
}
