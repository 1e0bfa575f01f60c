//! Administrative fine ceilings gated by entity classification.

use serde::Serialize;

use crate::model::EntityCategory;

/// Upper bound of an administrative fine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenaltyCeiling {
    /// Fixed minimum of the ceiling in EUR
    pub fixed_eur: f64,
    /// Share of worldwide annual revenue, in percent
    pub revenue_percent: f64,
    /// Effective ceiling: the higher of the two
    pub max_fine_eur: f64,
    pub legal_reference: &'static str,
}

/// NIS2 Art. 34(4)/(5) fine ceiling; `None` when the entity is out of scope.
#[must_use]
pub fn max_administrative_fine(
    category: EntityCategory,
    annual_revenue_eur: f64,
) -> Option<PenaltyCeiling> {
    let (fixed_eur, revenue_percent, legal_reference) = match category {
        EntityCategory::Essential => (10_000_000.0, 2.0, "NIS2 Art. 34(4)"),
        EntityCategory::Important => (7_000_000.0, 1.4, "NIS2 Art. 34(5)"),
        EntityCategory::NotApplicable => return None,
    };
    let revenue_based = annual_revenue_eur.max(0.0) * revenue_percent / 100.0;
    Some(PenaltyCeiling {
        fixed_eur,
        revenue_percent,
        max_fine_eur: fixed_eur.max(revenue_based),
        legal_reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_amount_dominates_small_revenue() {
        let ceiling = max_administrative_fine(EntityCategory::Essential, 1_000_000.0)
            .expect("in scope");
        assert_eq!(ceiling.max_fine_eur, 10_000_000.0);
    }

    #[test]
    fn test_revenue_share_dominates_large_revenue() {
        let ceiling = max_administrative_fine(EntityCategory::Important, 1_000_000_000.0)
            .expect("in scope");
        assert!((ceiling.max_fine_eur - 14_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_not_applicable_has_no_penalty() {
        assert!(max_administrative_fine(EntityCategory::NotApplicable, 1e9).is_none());
    }
}
