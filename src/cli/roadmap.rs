//! Roadmap command handler.
//!
//! Implements the `roadmap` subcommand: a three-phase roadmap with cost
//! estimates scaled to the organization in the session.

use crate::classify::classifier_for;
use crate::config::AppConfig;
use crate::cost::CostEstimator;
use crate::model::{AssessmentSession, CompanyProfile, EntityCategory};
use crate::pipeline::{exit_codes, load_session_with_context, output_report};
use crate::reports::{ReportMetadata, RoadmapReport};
use crate::roadmap::build_roadmap;
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Run the roadmap command, returning the desired exit code.
pub fn run_roadmap(
    content_path: &Path,
    session_path: &Path,
    config: &AppConfig,
    quiet: bool,
) -> Result<i32> {
    let loaded = load_session_with_context(content_path, session_path, quiet)?;
    let framework = &loaded.framework;

    let score = ScoringEngine::new(config.scoring.aggregation)
        .score_framework(framework, &loaded.session.answers)
        .context("Failed to score assessment")?;

    let (entity_category, profile) = company_profile(&loaded.session)?;
    if profile.is_none() {
        tracing::warn!("Session has no organization profile; costs use a neutral size factor");
    }

    let roadmap = build_roadmap(&score.category_scores, &framework.recommendations)
        .context("Failed to build roadmap")?;

    let estimator = CostEstimator::new(config.cost.clone());
    let mut estimates = IndexMap::with_capacity(roadmap.item_count());
    for item in roadmap.items() {
        let estimate = estimator
            .estimate_recommendation(framework, &item.recommendation_id, &score, profile.as_ref())
            .with_context(|| format!("Failed to estimate '{}'", item.recommendation_id))?;
        estimates.insert(item.recommendation_id.clone(), estimate);
    }
    let cost_tiers = estimator
        .cost_tiers(&framework.recommendations, &score, profile.as_ref())
        .context("Failed to aggregate costs")?;

    if !quiet {
        tracing::info!(
            "Roadmap has {} items, full programme {}-{} internal days",
            roadmap.item_count(),
            cost_tiers.all.internal_days.min,
            cost_tiers.all.internal_days.max
        );
    }

    let report = RoadmapReport {
        metadata: ReportMetadata::now(),
        framework: framework.framework,
        entity_category,
        roadmap,
        estimates,
        cost_tiers,
    };
    output_report(&config.output, quiet, |reporter| {
        reporter.generate_roadmap_report(&report)
    })?;

    Ok(exit_codes::SUCCESS)
}

/// Classify the session's organization, if any, into a cost profile.
///
/// Frameworks without entity categories still scale by headcount.
fn company_profile(
    session: &AssessmentSession,
) -> Result<(Option<EntityCategory>, Option<CompanyProfile>)> {
    let Some(organization) = session.organization.as_ref() else {
        return Ok((None, None));
    };

    let category = match classifier_for(session.framework) {
        Some(classifier) => Some(
            classifier
                .classify(&organization.into())
                .context("Failed to classify organization")?
                .category,
        ),
        None => None,
    };
    let profile =
        organization.company_profile(category.unwrap_or(EntityCategory::NotApplicable));
    Ok((category, Some(profile)))
}
