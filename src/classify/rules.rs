//! Ordered rule-list entity classifier.
//!
//! Rules are evaluated top-down and the first match wins. Every classifier
//! ends with a catch-all rule, so classification is total over well-formed
//! input.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::{EntityCategory, OrganizationProfile};

/// Organizational attributes the classifier looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub sector_id: String,
    #[serde(default)]
    pub subsector_id: Option<String>,
    pub employees: u32,
    pub annual_revenue_eur: f64,
    pub balance_sheet_total_eur: f64,
    pub is_regulated_critical_infra: bool,
}

impl From<&OrganizationProfile> for ClassificationInput {
    fn from(profile: &OrganizationProfile) -> Self {
        Self {
            sector_id: profile.sector.clone(),
            subsector_id: profile.subsector.clone(),
            employees: profile.employees,
            annual_revenue_eur: profile.annual_revenue_eur,
            balance_sheet_total_eur: profile.balance_sheet_total_eur,
            is_regulated_critical_infra: profile.is_regulated_critical_infra,
        }
    }
}

/// Enterprise size class derived from headcount and financials
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Size thresholds; exceeding any one of them is sufficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeThresholds {
    pub employees: u32,
    pub annual_revenue_eur: f64,
    pub balance_sheet_total_eur: f64,
}

impl SizeThresholds {
    fn reached_by(&self, input: &ClassificationInput) -> bool {
        input.employees >= self.employees
            || input.annual_revenue_eur > self.annual_revenue_eur
            || input.balance_sheet_total_eur > self.balance_sheet_total_eur
    }
}

/// Which annex of the regulation lists a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectorAnnex {
    /// Sectors of high criticality
    HighCriticality,
    /// Other critical sectors
    OtherCritical,
}

/// Sector entry of a classifier table
#[derive(Debug, Clone, PartialEq)]
pub struct SectorEntry {
    pub id: &'static str,
    pub annex: SectorAnnex,
    /// Subsectors covered regardless of enterprise size
    pub size_independent_subsectors: &'static [&'static str],
}

/// Condition under which a rule matches
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCondition {
    /// Entity is designated critical infrastructure
    CriticalInfrastructure,
    /// Sector lists the entity's subsector as size-independent
    SizeIndependentSubsector,
    /// Sector is in `annex` and the entity is at least `min_size`
    SectorAndSize {
        annex: SectorAnnex,
        min_size: SizeClass,
    },
    /// Always matches
    Always,
}

/// One row of the decision table
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub condition: RuleCondition,
    pub category: EntityCategory,
    pub legal_reference: &'static str,
}

/// Classification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: EntityCategory,
    pub legal_reference: String,
    /// Name of the rule that matched
    pub matched_rule: String,
    pub size_class: SizeClass,
}

/// Decision-table classifier for one regulation
#[derive(Debug, Clone)]
pub struct Classifier {
    sectors: Vec<SectorEntry>,
    medium: SizeThresholds,
    large: SizeThresholds,
    rules: Vec<ClassificationRule>,
    fallback: ClassificationRule,
}

impl Classifier {
    /// Build a classifier; `fallback` is evaluated when no rule matches.
    #[must_use]
    pub fn new(
        sectors: Vec<SectorEntry>,
        medium: SizeThresholds,
        large: SizeThresholds,
        rules: Vec<ClassificationRule>,
        fallback: ClassificationRule,
    ) -> Self {
        Self {
            sectors,
            medium,
            large,
            rules,
            fallback,
        }
    }

    /// Rules in evaluation order, fallback last
    pub fn rules(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// Size class of an entity
    #[must_use]
    pub fn size_class(&self, input: &ClassificationInput) -> SizeClass {
        if self.large.reached_by(input) {
            SizeClass::Large
        } else if self.medium.reached_by(input) {
            SizeClass::Medium
        } else {
            SizeClass::Small
        }
    }

    /// Classify an entity.
    ///
    /// Fails only for negative or non-finite financial figures; an unknown
    /// sector is simply out of scope.
    pub fn classify(&self, input: &ClassificationInput) -> Result<ClassificationResult> {
        validate_amount("annual revenue", input.annual_revenue_eur)?;
        validate_amount("balance sheet total", input.balance_sheet_total_eur)?;

        let size_class = self.size_class(input);
        let sector = self.sectors.iter().find(|s| s.id == input.sector_id);

        let rule = self
            .rules
            .iter()
            .find(|rule| self.matches(&rule.condition, input, sector, size_class))
            .unwrap_or(&self.fallback);

        Ok(ClassificationResult {
            category: rule.category,
            legal_reference: rule.legal_reference.to_string(),
            matched_rule: rule.name.to_string(),
            size_class,
        })
    }

    /// Classify an optional profile; a missing profile is not applicable.
    pub fn classify_profile(&self, profile: Option<&OrganizationProfile>) -> Result<ClassificationResult> {
        match profile {
            Some(profile) => self.classify(&ClassificationInput::from(profile)),
            None => Ok(ClassificationResult {
                category: self.fallback.category,
                legal_reference: self.fallback.legal_reference.to_string(),
                matched_rule: self.fallback.name.to_string(),
                size_class: SizeClass::Small,
            }),
        }
    }

    fn matches(
        &self,
        condition: &RuleCondition,
        input: &ClassificationInput,
        sector: Option<&SectorEntry>,
        size_class: SizeClass,
    ) -> bool {
        match condition {
            RuleCondition::CriticalInfrastructure => input.is_regulated_critical_infra,
            RuleCondition::SizeIndependentSubsector => match (sector, &input.subsector_id) {
                (Some(sector), Some(subsector)) => sector
                    .size_independent_subsectors
                    .contains(&subsector.as_str()),
                _ => false,
            },
            RuleCondition::SectorAndSize { annex, min_size } => {
                sector.is_some_and(|s| s.annex == *annex) && size_class >= *min_size
            }
            RuleCondition::Always => true,
        }
    }
}

fn validate_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::validation(format!(
            "{field} must be a non-negative amount, got {value}"
        )))
    }
}
