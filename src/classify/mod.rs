//! Entity classification.
//!
//! Maps sector, size and criticality to the applicability tier a regulation
//! assigns to an organization. The tier gates downstream sections such as
//! the penalty ceiling; the classifier itself knows nothing about them.

pub mod nis2;
mod penalty;
mod rules;

pub use penalty::{PenaltyCeiling, max_administrative_fine};
pub use rules::{
    ClassificationInput, ClassificationResult, ClassificationRule, Classifier, RuleCondition,
    SectorAnnex, SectorEntry, SizeClass, SizeThresholds,
};

use crate::model::FrameworkId;

/// Classifier for a framework, if it defines entity categories.
///
/// GDPR and C5 apply uniformly and have no size-based tiering.
#[must_use]
pub fn classifier_for(framework: FrameworkId) -> Option<Classifier> {
    match framework {
        FrameworkId::Nis2 => Some(nis2::classifier()),
        FrameworkId::Gdpr | FrameworkId::BsiC5 => None,
    }
}
