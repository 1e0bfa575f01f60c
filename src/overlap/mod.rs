//! Cross-framework overlap.
//!
//! Overlap comes from a curated table of topic pairs, each annotated with the
//! share of the target topic's requirements already covered by the source
//! topic. Nothing here depends on assessment answers.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::FrameworkId;
use crate::scoring::round1;

/// One curated topic pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicMapping {
    pub from: FrameworkId,
    pub from_topic: String,
    pub to: FrameworkId,
    pub to_topic: String,
    /// Overlap in percent (0-100)
    pub percent: f64,
}

/// Per-topic line of an overlap result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicOverlap {
    pub from_topic: String,
    pub to_topic: String,
    pub percent: f64,
}

/// Overlap between two frameworks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapResult {
    pub from: FrameworkId,
    pub to: FrameworkId,
    /// Mean of the per-topic percentages, one decimal
    pub overall_percent: f64,
    pub topics: Vec<TopicOverlap>,
}

/// A mapping whose reverse direction is missing or disagrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asymmetry {
    pub mapping: TopicMapping,
    /// Percentage of the reverse mapping, if one exists
    pub reverse_percent: Option<f64>,
}

impl std::fmt::Display for Asymmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.mapping;
        write!(
            f,
            "Overlap {}:{} -> {}:{} ",
            m.from, m.from_topic, m.to, m.to_topic
        )?;
        match self.reverse_percent {
            Some(reverse) => write!(
                f,
                "is {}% but the reverse mapping gives {reverse}%",
                m.percent
            ),
            None => f.write_str("has no reverse mapping"),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlapDocument {
    mappings: Vec<TopicMapping>,
}

/// Curated overlap mappings
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OverlapTable {
    mappings: Vec<TopicMapping>,
}

impl OverlapTable {
    /// Build a table, rejecting out-of-range percentages
    pub fn new(mappings: Vec<TopicMapping>) -> Result<Self> {
        for mapping in &mappings {
            if !(0.0..=100.0).contains(&mapping.percent) {
                return Err(EngineError::validation(format!(
                    "overlap {}:{} -> {}:{} has percentage {} outside 0..=100",
                    mapping.from, mapping.from_topic, mapping.to, mapping.to_topic, mapping.percent
                )));
            }
        }
        Ok(Self { mappings })
    }

    /// Parse a table from YAML (`mappings: [...]`)
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: OverlapDocument = serde_yaml::from_str(yaml)?;
        Self::new(document.mappings)
    }

    /// The table shipped with the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            mappings: builtin::mappings(),
        }
    }

    #[must_use]
    pub fn mappings(&self) -> &[TopicMapping] {
        &self.mappings
    }

    /// Mappings whose reverse is missing or carries a different percentage.
    ///
    /// The calculator does not enforce symmetry; this is a content lint.
    #[must_use]
    pub fn asymmetries(&self) -> Vec<Asymmetry> {
        self.mappings
            .iter()
            .filter_map(|mapping| {
                let reverse_percent = self
                    .mappings
                    .iter()
                    .find(|r| {
                        r.from == mapping.to
                            && r.to == mapping.from
                            && r.from_topic == mapping.to_topic
                            && r.to_topic == mapping.from_topic
                    })
                    .map(|r| r.percent);
                let consistent = reverse_percent
                    .is_some_and(|p| (p - mapping.percent).abs() < f64::EPSILON);
                (!consistent).then(|| Asymmetry {
                    mapping: mapping.clone(),
                    reverse_percent,
                })
            })
            .collect()
    }
}

/// Overlap of framework `from` with framework `to`.
///
/// With no curated mappings for the pair the overlap is 0 with no topics.
pub fn overlap(table: &OverlapTable, from: FrameworkId, to: FrameworkId) -> Result<OverlapResult> {
    if from == to {
        return Err(EngineError::validation(format!(
            "cannot compute overlap of {from} with itself"
        )));
    }

    let topics: Vec<TopicOverlap> = table
        .mappings
        .iter()
        .filter(|m| m.from == from && m.to == to)
        .map(|m| TopicOverlap {
            from_topic: m.from_topic.clone(),
            to_topic: m.to_topic.clone(),
            percent: m.percent,
        })
        .collect();

    let overall_percent = if topics.is_empty() {
        0.0
    } else {
        round1(topics.iter().map(|t| t.percent).sum::<f64>() / topics.len() as f64)
    };

    Ok(OverlapResult {
        from,
        to,
        overall_percent,
        topics,
    })
}
