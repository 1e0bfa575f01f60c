//! Configuration types for compliance-maturity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cost::ScalingConfig;
use crate::reports::ReportFormat;
use crate::scoring::AggregationPolicy;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration (aggregation policy, thresholds)
    pub scoring: ScoringConfig,
    /// Cost scaling factors (size bands, urgency)
    pub cost: ScalingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

/// Settings given explicitly on the command line.
///
/// `None` means the flag was absent, so the file or default value stays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub aggregation: Option<AggregationPolicy>,
    pub min_score: Option<f64>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    /// `--no-color` can only switch colours off
    pub no_color: bool,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the aggregation policy.
    pub const fn aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.config.scoring.aggregation = policy;
        self
    }

    /// Set the minimum overall score before a non-zero exit.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.scoring.min_score = min_score;
        self
    }

    /// Set the cost scaling configuration.
    pub fn scaling(mut self, scaling: ScalingConfig) -> Self {
        self.config.cost = scaling;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Scoring-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// How category percentages combine into the overall score
    pub aggregation: AggregationPolicy,
    /// Exit with code 1 when the overall score is below this percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .aggregation(AggregationPolicy::QuestionWeighted)
            .min_score(Some(60.0))
            .output_format(ReportFormat::Json)
            .no_color(true)
            .build();

        assert_eq!(config.scoring.aggregation, AggregationPolicy::QuestionWeighted);
        assert_eq!(config.scoring.min_score, Some(60.0));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert_eq!(config.cost, ScalingConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("scoring:\n  aggregation: question-weighted\n").expect("parse");
        assert_eq!(config.scoring.aggregation, AggregationPolicy::QuestionWeighted);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.cost.size_bands.len(), 5);
    }
}
