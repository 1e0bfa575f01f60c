//! Maturity scoring engine.
//!
//! Aggregates per-question maturity levels into per-category and overall
//! percentages. A category's denominator is always its full question
//! count, so unanswered questions pull the score down instead of being
//! extrapolated.

use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::round1;
use super::traffic_light::TrafficLight;
use crate::error::{EngineError, Result};
use crate::model::{Answer, CategoryId, CategoryMeta, Framework, MaturityLevel, QuestionId};

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// How category percentages combine into the overall percentage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationPolicy {
    /// Arithmetic mean of category percentages; every category counts equally
    #[default]
    CategoryMean,
    /// Mean weighted by each category's question count
    QuestionWeighted,
}

/// An answer already resolved to its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAnswer {
    pub question_id: QuestionId,
    pub category_id: CategoryId,
    pub level: Option<MaturityLevel>,
}

/// Score of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_id: CategoryId,
    /// Percentage (0-100), rounded to one decimal
    pub percentage: f64,
    pub traffic_light: TrafficLight,
    pub answered_questions: usize,
    pub total_questions: usize,
}

/// Overall assessment score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct OverallScore {
    /// Percentage (0-100), rounded to one decimal
    pub percentage: f64,
    pub traffic_light: TrafficLight,
    /// One entry per category, in content order
    pub category_scores: Vec<CategoryScore>,
    pub answered_questions: usize,
    pub total_questions: usize,
    /// Share of answered questions (0-100), independent of the score
    pub completion_rate: f64,
}

impl OverallScore {
    /// Look up a category's score
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|s| &s.category_id == id)
    }

    /// Traffic light of a category, if scored
    #[must_use]
    pub fn traffic_light_of(&self, id: &CategoryId) -> Option<TrafficLight> {
        self.category(id).map(|s| s.traffic_light)
    }
}

#[derive(Default)]
struct CategoryTally {
    total: usize,
    answered: usize,
    contribution_sum: f64,
}

/// Stateless scorer; every call recomputes from the given snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    policy: AggregationPolicy,
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Score answers against a framework's content.
    ///
    /// Answers to questions the framework does not define are rejected.
    pub fn score_framework(&self, framework: &Framework, answers: &[Answer]) -> Result<OverallScore> {
        let resolved = answers
            .iter()
            .map(|answer| {
                let question = framework.question(&answer.question_id).ok_or_else(|| {
                    EngineError::validation(format!(
                        "unknown question '{}' for framework {}",
                        answer.question_id, framework.framework
                    ))
                })?;
                Ok(CategoryAnswer {
                    question_id: answer.question_id.clone(),
                    category_id: question.category_id.clone(),
                    level: answer.level,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.score(&resolved, &framework.category_meta())
    }

    /// Score categorized answers against per-category question counts.
    pub fn score(&self, answers: &[CategoryAnswer], categories: &[CategoryMeta]) -> Result<OverallScore> {
        let mut tallies: IndexMap<&CategoryId, CategoryTally> = IndexMap::with_capacity(categories.len());
        for meta in categories {
            if tallies.contains_key(&meta.category_id) {
                return Err(EngineError::validation(format!(
                    "category '{}' listed more than once",
                    meta.category_id
                )));
            }
            tallies.insert(
                &meta.category_id,
                CategoryTally {
                    total: meta.total_questions,
                    ..CategoryTally::default()
                },
            );
        }

        let mut seen: HashSet<&QuestionId> = HashSet::with_capacity(answers.len());
        for answer in answers {
            if !seen.insert(&answer.question_id) {
                return Err(EngineError::validation(format!(
                    "question '{}' answered more than once",
                    answer.question_id
                )));
            }
            let tally = tallies.get_mut(&answer.category_id).ok_or_else(|| {
                EngineError::validation(format!(
                    "answer to '{}' references unknown category '{}'",
                    answer.question_id, answer.category_id
                ))
            })?;
            if let Some(level) = answer.level {
                tally.answered += 1;
                tally.contribution_sum += level.contribution();
            }
        }

        let mut category_scores = Vec::with_capacity(tallies.len());
        let mut contribution_total = 0.0;
        for (category_id, tally) in tallies {
            if tally.answered > tally.total {
                return Err(EngineError::validation(format!(
                    "category '{category_id}' has {} answers but only {} questions",
                    tally.answered, tally.total
                )));
            }
            contribution_total += tally.contribution_sum;
            let percentage = if tally.total == 0 {
                0.0
            } else {
                round1(tally.contribution_sum / tally.total as f64)
            };
            category_scores.push(CategoryScore {
                category_id: category_id.clone(),
                percentage,
                traffic_light: TrafficLight::from_percentage(percentage),
                answered_questions: tally.answered,
                total_questions: tally.total,
            });
        }

        let answered_questions: usize = category_scores.iter().map(|s| s.answered_questions).sum();
        let total_questions: usize = category_scores.iter().map(|s| s.total_questions).sum();
        let percentage = self.aggregate(&category_scores, total_questions, contribution_total);
        let completion_rate = if total_questions == 0 {
            0.0
        } else {
            round1(answered_questions as f64 / total_questions as f64 * 100.0)
        };

        Ok(OverallScore {
            percentage,
            traffic_light: TrafficLight::from_percentage(percentage),
            category_scores,
            answered_questions,
            total_questions,
            completion_rate,
        })
    }

    /// Overall percentage. Question weighting divides the unrounded
    /// contribution total so category rounding does not compound.
    fn aggregate(
        &self,
        scores: &[CategoryScore],
        total_questions: usize,
        contribution_total: f64,
    ) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        match self.policy {
            AggregationPolicy::CategoryMean => {
                let sum: f64 = scores.iter().map(|s| s.percentage).sum();
                round1(sum / scores.len() as f64)
            }
            AggregationPolicy::QuestionWeighted => {
                if total_questions == 0 {
                    return 0.0;
                }
                round1(contribution_total / total_questions as f64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &str, total: usize) -> CategoryMeta {
        CategoryMeta {
            category_id: CategoryId::new(id),
            total_questions: total,
        }
    }

    fn answer(question: &str, category: &str, level: Option<u8>) -> CategoryAnswer {
        CategoryAnswer {
            question_id: QuestionId::new(question),
            category_id: CategoryId::new(category),
            level: level.map(|l| MaturityLevel::new(i64::from(l)).expect("valid level")),
        }
    }

    #[test]
    fn test_partial_category_is_penalized() {
        let answers = vec![
            answer("q1", "gov", Some(3)),
            answer("q2", "gov", Some(3)),
            answer("q3", "gov", Some(3)),
            answer("q4", "gov", None),
        ];
        let score = ScoringEngine::default()
            .score(&answers, &[meta("gov", 6)])
            .expect("score");

        let gov = &score.category_scores[0];
        assert_eq!(gov.percentage, 50.0);
        assert_eq!(gov.traffic_light, TrafficLight::Yellow);
        assert_eq!(gov.answered_questions, 3);
        assert_eq!(gov.total_questions, 6);
        assert_eq!(score.completion_rate, 50.0);
    }

    #[test]
    fn test_unanswered_category_is_kept_and_red() {
        let answers = vec![answer("q1", "gov", Some(3))];
        let score = ScoringEngine::default()
            .score(&answers, &[meta("gov", 1), meta("ir", 4)])
            .expect("score");

        assert_eq!(score.category_scores.len(), 2);
        let ir = score.category(&CategoryId::new("ir")).expect("ir present");
        assert_eq!(ir.percentage, 0.0);
        assert_eq!(ir.traffic_light, TrafficLight::Red);
        // Mean of 100 and 0, not weighted by question count
        assert_eq!(score.percentage, 50.0);
    }

    #[test]
    fn test_question_weighted_policy() {
        let answers = vec![answer("q1", "gov", Some(3))];
        let score = ScoringEngine::new(AggregationPolicy::QuestionWeighted)
            .score(&answers, &[meta("gov", 1), meta("ir", 4)])
            .expect("score");
        assert_eq!(score.percentage, 20.0);
    }

    #[test]
    fn test_question_weighted_uses_unrounded_contributions() {
        // Categories round to 0.0 and 66.7; weighting those would give 33.4
        let answers = vec![answer("q1", "a", Some(0)), answer("q2", "b", Some(2))];
        let score = ScoringEngine::new(AggregationPolicy::QuestionWeighted)
            .score(&answers, &[meta("a", 1), meta("b", 1)])
            .expect("score");
        assert_eq!(score.category_scores[1].percentage, 66.7);
        assert_eq!(score.percentage, 33.3);
    }

    #[test]
    fn test_zero_categories() {
        let score = ScoringEngine::default().score(&[], &[]).expect("score");
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.traffic_light, TrafficLight::Red);
        assert_eq!(score.completion_rate, 0.0);
    }

    #[test]
    fn test_one_decimal_rounding() {
        let answers = vec![answer("q1", "gov", Some(1))];
        let score = ScoringEngine::default()
            .score(&answers, &[meta("gov", 3)])
            .expect("score");
        // 33.333 / 3 = 11.111
        assert_eq!(score.category_scores[0].percentage, 11.1);
    }

    #[test]
    fn test_validation_errors() {
        let engine = ScoringEngine::default();

        let unknown = engine.score(&[answer("q1", "nope", Some(1))], &[meta("gov", 1)]);
        assert!(unknown.expect_err("unknown category").is_validation());

        let duplicate = engine.score(
            &[answer("q1", "gov", Some(1)), answer("q1", "gov", Some(2))],
            &[meta("gov", 2)],
        );
        assert!(duplicate.expect_err("duplicate").is_validation());

        let overfull = engine.score(
            &[answer("q1", "gov", Some(1)), answer("q2", "gov", Some(2))],
            &[meta("gov", 1)],
        );
        assert!(overfull.expect_err("too many answers").is_validation());

        let repeated_meta = engine.score(&[], &[meta("gov", 1), meta("gov", 2)]);
        assert!(repeated_meta.expect_err("repeated category").is_validation());
    }
}
