//! Adjusted cost estimates and their aggregation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::scaling::{ScalingConfig, ScalingFactors};
use crate::error::{EngineError, Result};
use crate::model::{
    BaselineCost, CompanyProfile, EffortLevel, EstimateRange, Framework, Recommendation,
    RecommendationId,
};
use crate::scoring::{OverallScore, TrafficLight};

/// Smallest internal effort a scaled estimate may show, per bound
pub const MIN_INTERNAL_DAYS: f64 = 1.0;

/// Whole-day effort range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRange {
    pub min: u32,
    pub max: u32,
}

/// Whole-euro cost range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EuroRange {
    pub min: f64,
    pub max: f64,
}

/// Organization-adjusted estimate for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub internal_days: DayRange,
    pub external_cost_eur: EuroRange,
    pub tool_cost_eur_year: EuroRange,
    /// External plus first-year tooling cost
    pub total_cost_eur: EuroRange,
    pub factors: ScalingFactors,
}

/// Sum of adjusted estimates over a set of recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostSummary {
    pub item_count: usize,
    pub internal_days: DayRange,
    pub external_cost_eur: EuroRange,
    pub tool_cost_eur_year: EuroRange,
    pub total_cost_eur: EuroRange,
}

/// Cumulative spend by how far down the effort ladder an organization goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTiers {
    pub quick_only: CostSummary,
    pub quick_and_medium: CostSummary,
    pub all: CostSummary,
}

/// Unrounded scaled amounts; rounding happens once, on output.
#[derive(Debug, Clone, Copy, Default)]
struct RawCost {
    items: usize,
    days: (f64, f64),
    external: (f64, f64),
    tool: (f64, f64),
}

impl RawCost {
    fn scaled(baseline: &BaselineCost, factor: f64) -> Self {
        let scale = |range: &EstimateRange| (range.min * factor, range.max * factor);
        let (days_min, days_max) = scale(&baseline.internal_effort_days);
        Self {
            items: 1,
            days: (days_min.max(MIN_INTERNAL_DAYS), days_max.max(MIN_INTERNAL_DAYS)),
            external: scale(&baseline.external_cost_eur),
            tool: scale(&baseline.tool_cost_eur_year),
        }
    }

    fn add(&mut self, other: &Self) {
        self.items += other.items;
        self.days.0 += other.days.0;
        self.days.1 += other.days.1;
        self.external.0 += other.external.0;
        self.external.1 += other.external.1;
        self.tool.0 += other.tool.0;
        self.tool.1 += other.tool.1;
    }

    fn day_range(&self) -> DayRange {
        let round = |days: f64| days.round().max(0.0) as u32;
        let min = round(self.days.0);
        DayRange {
            min,
            max: round(self.days.1).max(min),
        }
    }

    fn euro(range: (f64, f64)) -> EuroRange {
        EuroRange {
            min: range.0.round(),
            max: range.1.round(),
        }
    }

    fn total(&self) -> EuroRange {
        Self::euro((self.external.0 + self.tool.0, self.external.1 + self.tool.1))
    }

    fn summary(&self) -> CostSummary {
        CostSummary {
            item_count: self.items,
            internal_days: self.day_range(),
            external_cost_eur: Self::euro(self.external),
            tool_cost_eur_year: Self::euro(self.tool),
            total_cost_eur: self.total(),
        }
    }
}

/// Scales baseline estimates to an organization
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    scaling: ScalingConfig,
}

impl CostEstimator {
    #[must_use]
    pub const fn new(scaling: ScalingConfig) -> Self {
        Self { scaling }
    }

    #[must_use]
    pub const fn scaling(&self) -> &ScalingConfig {
        &self.scaling
    }

    /// Adjust one baseline estimate.
    ///
    /// Internal effort never drops below one day per bound. A missing
    /// profile uses a neutral size factor.
    #[must_use]
    pub fn adjusted_estimate(
        &self,
        baseline: &BaselineCost,
        profile: Option<&CompanyProfile>,
        light: TrafficLight,
    ) -> CostEstimate {
        let factors = self.scaling.factors(profile, light);
        let raw = RawCost::scaled(baseline, factors.combined);
        CostEstimate {
            internal_days: raw.day_range(),
            external_cost_eur: RawCost::euro(raw.external),
            tool_cost_eur_year: RawCost::euro(raw.tool),
            total_cost_eur: raw.total(),
            factors,
        }
    }

    /// Adjusted estimate for a recommendation, using its category's status.
    pub fn estimate_recommendation(
        &self,
        framework: &Framework,
        id: &RecommendationId,
        scores: &OverallScore,
        profile: Option<&CompanyProfile>,
    ) -> Result<CostEstimate> {
        let recommendation = lookup(framework, id)?;
        let light = category_light(recommendation, scores)?;
        Ok(self.adjusted_estimate(&recommendation.cost, profile, light))
    }

    /// Sum adjusted estimates over the given recommendations.
    ///
    /// Each dimension is summed per bound before rounding.
    pub fn aggregate_costs(
        &self,
        framework: &Framework,
        ids: &[RecommendationId],
        scores: &OverallScore,
        profile: Option<&CompanyProfile>,
    ) -> Result<CostSummary> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut total = RawCost::default();
        for id in ids {
            if !seen.insert(id) {
                return Err(EngineError::validation(format!(
                    "recommendation '{id}' listed more than once"
                )));
            }
            let recommendation = lookup(framework, id)?;
            total.add(&self.raw_cost(recommendation, scores, profile)?);
        }
        Ok(total.summary())
    }

    /// Cumulative cost tiers over a recommendation set
    pub fn cost_tiers(
        &self,
        recommendations: &[Recommendation],
        scores: &OverallScore,
        profile: Option<&CompanyProfile>,
    ) -> Result<CostTiers> {
        let mut by_effort = [RawCost::default(); 3];
        for recommendation in recommendations {
            let slot = match recommendation.effort_level {
                EffortLevel::Quick => 0,
                EffortLevel::Medium => 1,
                EffortLevel::Strategic => 2,
            };
            by_effort[slot].add(&self.raw_cost(recommendation, scores, profile)?);
        }

        let mut cumulative = by_effort[0];
        let quick_only = cumulative.summary();
        cumulative.add(&by_effort[1]);
        let quick_and_medium = cumulative.summary();
        cumulative.add(&by_effort[2]);

        Ok(CostTiers {
            quick_only,
            quick_and_medium,
            all: cumulative.summary(),
        })
    }

    fn raw_cost(
        &self,
        recommendation: &Recommendation,
        scores: &OverallScore,
        profile: Option<&CompanyProfile>,
    ) -> Result<RawCost> {
        let light = category_light(recommendation, scores)?;
        let factors = self.scaling.factors(profile, light);
        Ok(RawCost::scaled(&recommendation.cost, factors.combined))
    }
}

fn lookup<'f>(framework: &'f Framework, id: &RecommendationId) -> Result<&'f Recommendation> {
    framework.recommendation(id).ok_or_else(|| {
        EngineError::validation(format!(
            "unknown recommendation '{id}' for framework {}",
            framework.framework
        ))
    })
}

fn category_light(recommendation: &Recommendation, scores: &OverallScore) -> Result<TrafficLight> {
    scores
        .traffic_light_of(&recommendation.category_id)
        .ok_or_else(|| {
            EngineError::validation(format!(
                "no score for category '{}' of recommendation '{}'",
                recommendation.category_id, recommendation.id
            ))
        })
}
