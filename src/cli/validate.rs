//! Validate command handler.
//!
//! Implements the `validate` subcommand: load-time checks of a framework
//! content file plus a symmetry lint of the overlap table.

use super::overlap::overlap_table;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_content_with_context, output_report};
use crate::reports::{ReportMetadata, ValidationReport};
use anyhow::Result;
use std::path::Path;

/// Run the validate command, returning the desired exit code.
///
/// Content defects are returned as errors; overlap asymmetries are only
/// reported as warnings.
pub fn run_validate(
    content_path: &Path,
    table_path: Option<&Path>,
    config: &AppConfig,
    quiet: bool,
) -> Result<i32> {
    let framework = load_content_with_context(content_path, quiet)?;
    let table = overlap_table(table_path)?;

    let overlap_asymmetries = table.asymmetries();
    for asymmetry in &overlap_asymmetries {
        tracing::warn!("{asymmetry}");
    }

    let report = ValidationReport {
        metadata: ReportMetadata::now(),
        framework: framework.framework,
        categories: framework.categories.len(),
        questions: framework.questions.len(),
        recommendations: framework.recommendations.len(),
        overlap_asymmetries,
    };
    output_report(&config.output, quiet, |reporter| {
        reporter.generate_validation_report(&report)
    })?;

    Ok(exit_codes::SUCCESS)
}
