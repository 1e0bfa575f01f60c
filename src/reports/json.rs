//! JSON report generator.

use serde::Serialize;

use super::{
    ClassificationReport, OverlapReport, ReportError, ReportFormat, ReportGenerator,
    RoadmapReport, ScoreReport, ValidationReport,
};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_classification_report(
        &self,
        report: &ClassificationReport,
    ) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_roadmap_report(&self, report: &RoadmapReport) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_overlap_report(&self, report: &OverlapReport) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_validation_report(
        &self,
        report: &ValidationReport,
    ) -> Result<String, ReportError> {
        self.render(report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
