//! Organization data supplied during onboarding.

use serde::{Deserialize, Serialize};

/// Applicability tier a regulation assigns to an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityCategory {
    /// Highest tier (NIS2 "essential entity")
    Essential,
    /// Standard tier (NIS2 "important entity")
    Important,
    /// Outside the regulation's scope
    NotApplicable,
}

impl EntityCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Essential => "Essential entity",
            Self::Important => "Important entity",
            Self::NotApplicable => "Not applicable",
        }
    }

    #[must_use]
    pub const fn is_highest_tier(&self) -> bool {
        matches!(self, Self::Essential)
    }

    /// Whether obligations (penalties, evidence) apply at all
    #[must_use]
    pub const fn is_in_scope(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

/// Profile consumed by cost estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub employees: u32,
    pub entity_category: EntityCategory,
    pub is_regulated_critical_infra: bool,
}

/// Onboarding record from which the classifier input and the company
/// profile are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrganizationProfile {
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsector: Option<String>,
    pub employees: u32,
    #[serde(default)]
    pub annual_revenue_eur: f64,
    #[serde(default)]
    pub balance_sheet_total_eur: f64,
    #[serde(default)]
    pub is_regulated_critical_infra: bool,
}

impl OrganizationProfile {
    /// Company profile for an organization already classified as `category`
    #[must_use]
    pub const fn company_profile(&self, category: EntityCategory) -> CompanyProfile {
        CompanyProfile {
            employees: self.employees,
            entity_category: category,
            is_regulated_critical_infra: self.is_regulated_critical_infra,
        }
    }
}
