//! Implementation roadmap generation.
//!
//! Recommendations are bucketed into three fixed phases by effort level.
//! Each item carries an urgency derived from its category's traffic light;
//! urgency orders items inside a phase but never moves them between phases.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, Result};
use crate::model::{CategoryId, EffortLevel, Priority, Recommendation, RecommendationId};
use crate::scoring::{CategoryScore, TrafficLight};

/// Roadmap phase, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseKind {
    /// Phase 1: quick wins
    Immediate,
    /// Phase 2: core measures
    Core,
    /// Phase 3: strategic programmes
    Strategic,
}

impl PhaseKind {
    /// All phases in order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Immediate, Self::Core, Self::Strategic]
    }

    /// 1-based phase number
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Immediate => 1,
            Self::Core => 2,
            Self::Strategic => 3,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Core => "Core",
            Self::Strategic => "Strategic",
        }
    }

    /// The effort level this phase collects
    #[must_use]
    pub const fn effort_level(&self) -> EffortLevel {
        match self {
            Self::Immediate => EffortLevel::Quick,
            Self::Core => EffortLevel::Medium,
            Self::Strategic => EffortLevel::Strategic,
        }
    }

    #[must_use]
    pub const fn for_effort(effort: EffortLevel) -> Self {
        match effort {
            EffortLevel::Quick => Self::Immediate,
            EffortLevel::Medium => Self::Core,
            EffortLevel::Strategic => Self::Strategic,
        }
    }

    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

/// Informational urgency of a roadmap item, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Urgency of a recommendation given its category status
    #[must_use]
    pub const fn for_item(light: TrafficLight, priority: Priority) -> Self {
        match (light, priority) {
            (TrafficLight::Red, _) => Self::Critical,
            (TrafficLight::Yellow, Priority::High) => Self::High,
            (TrafficLight::Yellow, Priority::Medium | Priority::Low) => Self::Medium,
            (TrafficLight::Green, _) => Self::Low,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One recommendation placed on the roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub recommendation_id: RecommendationId,
    pub category_id: CategoryId,
    pub title: String,
    pub priority: Priority,
    pub effort_level: EffortLevel,
    pub category_status: TrafficLight,
    pub urgency: Urgency,
}

/// A phase and its items; may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub kind: PhaseKind,
    pub items: Vec<RoadmapItem>,
}

impl Phase {
    const fn empty(kind: PhaseKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }
}

/// Three-phase implementation roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Roadmap {
    /// Always exactly the three phases, in order
    pub phases: [Phase; 3],
}

impl Roadmap {
    #[must_use]
    pub fn phase(&self, kind: PhaseKind) -> &Phase {
        &self.phases[kind.index()]
    }

    /// All items across phases, in roadmap order
    pub fn items(&self) -> impl Iterator<Item = &RoadmapItem> {
        self.phases.iter().flat_map(|p| p.items.iter())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|p| p.items.len()).sum()
    }
}

/// Build the roadmap for a set of recommendations.
///
/// Pure: the result depends only on the arguments. Every recommendation's
/// category must have a score.
pub fn build_roadmap(
    category_scores: &[CategoryScore],
    recommendations: &[Recommendation],
) -> Result<Roadmap> {
    let lights: HashMap<&CategoryId, TrafficLight> = category_scores
        .iter()
        .map(|s| (&s.category_id, s.traffic_light))
        .collect();

    let mut phases = PhaseKind::all().map(Phase::empty);
    let mut seen: HashSet<&RecommendationId> = HashSet::with_capacity(recommendations.len());

    for recommendation in recommendations {
        if !seen.insert(&recommendation.id) {
            return Err(EngineError::validation(format!(
                "recommendation '{}' listed more than once",
                recommendation.id
            )));
        }
        let light = *lights.get(&recommendation.category_id).ok_or_else(|| {
            EngineError::validation(format!(
                "no score for category '{}' of recommendation '{}'",
                recommendation.category_id, recommendation.id
            ))
        })?;

        let kind = PhaseKind::for_effort(recommendation.effort_level);
        phases[kind.index()].items.push(RoadmapItem {
            recommendation_id: recommendation.id.clone(),
            category_id: recommendation.category_id.clone(),
            title: recommendation.title.clone(),
            priority: recommendation.priority,
            effort_level: recommendation.effort_level,
            category_status: light,
            urgency: Urgency::for_item(light, recommendation.priority),
        });
    }

    for phase in &mut phases {
        phase.items.sort_by(|a, b| {
            a.urgency
                .cmp(&b.urgency)
                .then(a.priority.cmp(&b.priority))
                .then_with(|| a.recommendation_id.cmp(&b.recommendation_id))
        });
    }

    Ok(Roadmap { phases })
}
