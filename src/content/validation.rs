//! Load-time consistency checks for framework content.
//!
//! Defects in static content are programmer errors; they are reported when
//! the content is loaded instead of surfacing later in a scoring call.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{ContentErrorKind, EngineError, Result};
use crate::model::{CategoryId, EstimateRange, Framework};

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]*$").expect("static regex"));

impl Framework {
    /// Check the content model; see [`validate_framework`].
    pub fn validate(&self) -> Result<()> {
        validate_framework(self)
    }
}

/// Check a framework's content model, failing on the first defect.
pub fn validate_framework(framework: &Framework) -> Result<()> {
    let context = format!("framework {}", framework.framework);
    let fail = |kind: ContentErrorKind| EngineError::content(context.clone(), kind);

    let mut categories: HashSet<&CategoryId> = HashSet::new();
    for category in &framework.categories {
        check_slug(category.id.as_str()).map_err(fail)?;
        if !categories.insert(&category.id) {
            return Err(fail(ContentErrorKind::DuplicateId {
                kind: "category",
                id: category.id.to_string(),
            }));
        }
    }

    let mut questions = HashSet::new();
    let mut populated: HashSet<&CategoryId> = HashSet::new();
    for question in &framework.questions {
        check_slug(question.id.as_str()).map_err(fail)?;
        if !questions.insert(&question.id) {
            return Err(fail(ContentErrorKind::DuplicateId {
                kind: "question",
                id: question.id.to_string(),
            }));
        }
        if !categories.contains(&question.category_id) {
            return Err(fail(ContentErrorKind::UnknownCategory {
                kind: "question",
                id: question.id.to_string(),
                category: question.category_id.to_string(),
            }));
        }
        populated.insert(&question.category_id);
    }

    if let Some(empty) = framework
        .categories
        .iter()
        .find(|c| !populated.contains(&c.id))
    {
        return Err(fail(ContentErrorKind::EmptyCategory(empty.id.to_string())));
    }

    let mut recommendations = HashSet::new();
    for recommendation in &framework.recommendations {
        let id = recommendation.id.as_str();
        check_slug(id).map_err(fail)?;
        if !recommendations.insert(&recommendation.id) {
            return Err(fail(ContentErrorKind::DuplicateId {
                kind: "recommendation",
                id: id.to_string(),
            }));
        }
        if !categories.contains(&recommendation.category_id) {
            return Err(fail(ContentErrorKind::UnknownCategory {
                kind: "recommendation",
                id: id.to_string(),
                category: recommendation.category_id.to_string(),
            }));
        }
        let cost = &recommendation.cost;
        check_range(id, "internal_effort_days", &cost.internal_effort_days).map_err(fail)?;
        check_range(id, "external_cost_eur", &cost.external_cost_eur).map_err(fail)?;
        check_range(id, "tool_cost_eur_year", &cost.tool_cost_eur_year).map_err(fail)?;
    }

    Ok(())
}

fn check_slug(id: &str) -> std::result::Result<(), ContentErrorKind> {
    if SLUG.is_match(id) {
        Ok(())
    } else {
        Err(ContentErrorKind::MalformedId(id.to_string()))
    }
}

fn check_range(
    id: &str,
    field: &'static str,
    range: &EstimateRange,
) -> std::result::Result<(), ContentErrorKind> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(range.min) || !valid(range.max) {
        return Err(ContentErrorKind::InvalidAmount {
            id: id.to_string(),
            field,
        });
    }
    if range.min > range.max {
        return Err(ContentErrorKind::InvertedRange {
            id: id.to_string(),
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
