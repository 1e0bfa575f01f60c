//! Benchmarks for scoring, cost aggregation and roadmap building.
//!
//! Run with: cargo bench --bench scoring_benchmark

use compliance_maturity::cost::CostEstimator;
use compliance_maturity::model::{
    Answer, BaselineCost, Category, CategoryId, CompanyProfile, EffortLevel, EntityCategory,
    EstimateRange, Framework, FrameworkId, MaturityLevel, Priority, Question, QuestionId,
    QuestionTier, Recommendation, RecommendationId,
};
use compliance_maturity::roadmap::build_roadmap;
use compliance_maturity::scoring::{AggregationPolicy, ScoringEngine};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a framework with `categories` categories of `per_category` questions
/// and two recommendations per category.
fn generate_framework(categories: usize, per_category: usize) -> Framework {
    let mut framework = Framework {
        framework: FrameworkId::BsiC5,
        version: None,
        categories: Vec::with_capacity(categories),
        questions: Vec::with_capacity(categories * per_category),
        recommendations: Vec::with_capacity(categories * 2),
    };

    let efforts = EffortLevel::all();
    for c in 0..categories {
        let category_id = CategoryId::new(format!("cat-{c}"));
        framework.categories.push(Category {
            id: category_id.clone(),
            name: format!("Category {c}"),
            legal_reference: None,
        });
        for q in 0..per_category {
            framework.questions.push(Question {
                id: QuestionId::new(format!("q-{c}-{q}")),
                category_id: category_id.clone(),
                tier: QuestionTier::Core,
                title: format!("Question {q}"),
                rubric: ["none".into(), "initial".into(), "defined".into(), "managed".into()],
            });
        }
        for r in 0..2 {
            framework.recommendations.push(Recommendation {
                id: RecommendationId::new(format!("rec-{c}-{r}")),
                category_id: category_id.clone(),
                title: format!("Recommendation {r}"),
                priority: Priority::Medium,
                effort_level: efforts[(c + r) % efforts.len()],
                cost: BaselineCost {
                    internal_effort_days: EstimateRange::new(2.0, 8.0),
                    external_cost_eur: EstimateRange::new(1000.0, 5000.0),
                    tool_cost_eur_year: EstimateRange::new(0.0, 1200.0),
                },
                checklist: None,
            });
        }
    }
    framework
}

fn generate_answers(framework: &Framework) -> Vec<Answer> {
    framework
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let level = MaturityLevel::new((i % 4) as i64).unwrap_or(MaturityLevel::NONE);
            Answer::new(q.id.clone(), level)
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_framework");
    for size in [10, 50, 200] {
        let framework = generate_framework(size, 10);
        let answers = generate_answers(&framework);
        for policy in [AggregationPolicy::CategoryMean, AggregationPolicy::QuestionWeighted] {
            let engine = ScoringEngine::new(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), size * 10),
                &(&framework, &answers),
                |b, (framework, answers)| {
                    b.iter(|| engine.score_framework(black_box(framework), black_box(answers)));
                },
            );
        }
    }
    group.finish();
}

fn bench_roadmap_and_costs(c: &mut Criterion) {
    let framework = generate_framework(200, 10);
    let answers = generate_answers(&framework);
    let score = ScoringEngine::default()
        .score_framework(&framework, &answers)
        .expect("benchmark content scores");
    let profile = CompanyProfile {
        employees: 400,
        entity_category: EntityCategory::Important,
        is_regulated_critical_infra: false,
    };
    let estimator = CostEstimator::default();

    c.bench_function("build_roadmap_400_items", |b| {
        b.iter(|| build_roadmap(black_box(&score.category_scores), black_box(&framework.recommendations)));
    });

    c.bench_function("cost_tiers_400_items", |b| {
        b.iter(|| {
            estimator.cost_tiers(
                black_box(&framework.recommendations),
                black_box(&score),
                Some(&profile),
            )
        });
    });
}

criterion_group!(benches, bench_scoring, bench_roadmap_and_costs);
criterion_main!(benches);
