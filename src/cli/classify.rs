//! Classify command handler.
//!
//! Implements the `classify` subcommand: the entity category of the
//! organization in a session, plus the fine ceiling it implies.

use crate::classify::{classifier_for, max_administrative_fine};
use crate::config::AppConfig;
use crate::content::load_session;
use crate::pipeline::{exit_codes, output_report};
use crate::reports::{ClassificationReport, ReportMetadata};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Run the classify command, returning the desired exit code.
pub fn run_classify(session_path: &Path, config: &AppConfig, quiet: bool) -> Result<i32> {
    let session = load_session(session_path)
        .with_context(|| format!("Failed to load session: {}", session_path.display()))?;

    let Some(classifier) = classifier_for(session.framework) else {
        bail!(
            "{} does not define entity categories; it applies uniformly",
            session.framework.name()
        );
    };

    if session.organization.is_none() {
        tracing::warn!("Session has no organization profile; classifying as not applicable");
    }

    let classification = classifier
        .classify_profile(session.organization.as_ref())
        .context("Failed to classify organization")?;

    if !quiet {
        tracing::info!(
            "Rule '{}' matched: {}",
            classification.matched_rule,
            classification.category.name()
        );
    }

    let revenue = session
        .organization
        .as_ref()
        .map_or(0.0, |org| org.annual_revenue_eur);
    let report = ClassificationReport {
        metadata: ReportMetadata::now(),
        framework: session.framework,
        penalty: max_administrative_fine(classification.category, revenue),
        classification,
    };
    output_report(&config.output, quiet, |reporter| {
        reporter.generate_classification_report(&report)
    })?;

    Ok(exit_codes::SUCCESS)
}
