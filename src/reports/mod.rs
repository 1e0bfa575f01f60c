//! Report generation for engine results.
//!
//! Two output formats are provided:
//! - Summary: compact human-readable terminal output
//! - JSON: structured data for programmatic integration

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{
    ClassificationReport, OverlapReport, ReportFormat, ReportMetadata, RoadmapReport, ScoreReport,
    ValidationReport,
};

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError>;

    fn generate_classification_report(
        &self,
        report: &ClassificationReport,
    ) -> Result<String, ReportError>;

    fn generate_roadmap_report(&self, report: &RoadmapReport) -> Result<String, ReportError>;

    fn generate_overlap_report(&self, report: &OverlapReport) -> Result<String, ReportError>;

    fn generate_validation_report(&self, report: &ValidationReport)
        -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if colored {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [ReportFormat::Summary, ReportFormat::Json] {
            assert_eq!(create_reporter(format).format(), format);
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }
}
