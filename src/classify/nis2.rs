//! NIS2 (Directive (EU) 2022/2555) entity classification table.

use super::rules::{
    ClassificationRule, Classifier, RuleCondition, SectorAnnex, SectorEntry, SizeClass,
    SizeThresholds,
};
use crate::model::EntityCategory;

/// Medium-sized enterprise thresholds (Recommendation 2003/361/EC)
pub const MEDIUM_ENTERPRISE: SizeThresholds = SizeThresholds {
    employees: 50,
    annual_revenue_eur: 10_000_000.0,
    balance_sheet_total_eur: 10_000_000.0,
};

/// Large enterprise thresholds
pub const LARGE_ENTERPRISE: SizeThresholds = SizeThresholds {
    employees: 250,
    annual_revenue_eur: 50_000_000.0,
    balance_sheet_total_eur: 43_000_000.0,
};

const DIGITAL_INFRASTRUCTURE_SIZE_INDEPENDENT: &[&str] = &[
    "dns-service-provider",
    "tld-name-registry",
    "qualified-trust-service-provider",
    "public-electronic-communications",
];

fn sectors() -> Vec<SectorEntry> {
    let annex_i = [
        "energy",
        "transport",
        "banking",
        "financial-market-infrastructure",
        "health",
        "drinking-water",
        "waste-water",
        "ict-service-management",
        "public-administration",
        "space",
    ];
    let annex_ii = [
        "postal-and-courier",
        "waste-management",
        "chemicals",
        "food",
        "manufacturing",
        "digital-providers",
        "research",
    ];

    let mut sectors: Vec<SectorEntry> = annex_i
        .into_iter()
        .map(|id| SectorEntry {
            id,
            annex: SectorAnnex::HighCriticality,
            size_independent_subsectors: &[],
        })
        .collect();
    sectors.push(SectorEntry {
        id: "digital-infrastructure",
        annex: SectorAnnex::HighCriticality,
        size_independent_subsectors: DIGITAL_INFRASTRUCTURE_SIZE_INDEPENDENT,
    });
    sectors.extend(annex_ii.into_iter().map(|id| SectorEntry {
        id,
        annex: SectorAnnex::OtherCritical,
        size_independent_subsectors: &[],
    }));
    sectors
}

/// Classifier implementing NIS2 Art. 2 and 3
#[must_use]
pub fn classifier() -> Classifier {
    let rules = vec![
        ClassificationRule {
            name: "critical-infrastructure",
            condition: RuleCondition::CriticalInfrastructure,
            category: EntityCategory::Essential,
            legal_reference: "NIS2 Art. 3(1)(f)",
        },
        ClassificationRule {
            name: "size-independent-subsector",
            condition: RuleCondition::SizeIndependentSubsector,
            category: EntityCategory::Essential,
            legal_reference: "NIS2 Art. 3(1)(b), (c)",
        },
        ClassificationRule {
            name: "annex-i-large",
            condition: RuleCondition::SectorAndSize {
                annex: SectorAnnex::HighCriticality,
                min_size: SizeClass::Large,
            },
            category: EntityCategory::Essential,
            legal_reference: "NIS2 Art. 3(1)(a)",
        },
        ClassificationRule {
            name: "annex-i-medium",
            condition: RuleCondition::SectorAndSize {
                annex: SectorAnnex::HighCriticality,
                min_size: SizeClass::Medium,
            },
            category: EntityCategory::Important,
            legal_reference: "NIS2 Art. 3(2)",
        },
        ClassificationRule {
            name: "annex-ii-medium",
            condition: RuleCondition::SectorAndSize {
                annex: SectorAnnex::OtherCritical,
                min_size: SizeClass::Medium,
            },
            category: EntityCategory::Important,
            legal_reference: "NIS2 Art. 3(2)",
        },
    ];

    Classifier::new(
        sectors(),
        MEDIUM_ENTERPRISE,
        LARGE_ENTERPRISE,
        rules,
        ClassificationRule {
            name: "not-applicable",
            condition: RuleCondition::Always,
            category: EntityCategory::NotApplicable,
            legal_reference: "NIS2 Art. 2(1)",
        },
    )
}
