//! End-to-end scenarios over the fixture content and sessions.
//!
//! These tests load real files, run the engine and the command handlers and
//! check the numbers a user would see.

use compliance_maturity::classify::{classifier_for, nis2, ClassificationInput};
use compliance_maturity::config::AppConfig;
use compliance_maturity::content::{load_framework, load_session, load_session_for};
use compliance_maturity::cost::CostEstimator;
use compliance_maturity::model::{
    BaselineCost, CategoryId, EntityCategory, EstimateRange, FrameworkId, RecommendationId,
};
use compliance_maturity::pipeline::exit_codes;
use compliance_maturity::reports::ReportFormat;
use compliance_maturity::roadmap::{build_roadmap, PhaseKind, Urgency};
use compliance_maturity::scoring::{AggregationPolicy, ScoringEngine, TrafficLight};
use compliance_maturity::{cli, EngineError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn category(id: &str) -> CategoryId {
    CategoryId::new(id)
}

mod scoring {
    use super::*;

    #[test]
    fn test_half_answered_category_is_yellow() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let session = load_session_for(&fixture_path("session.yaml"), &framework).expect("session");

        let score = ScoringEngine::default()
            .score_framework(&framework, &session.answers)
            .expect("score");

        let governance = score.category(&category("governance")).expect("governance");
        assert_eq!(governance.percentage, 50.0);
        assert_eq!(governance.traffic_light, TrafficLight::Yellow);
        assert_eq!(governance.answered_questions, 3);
        assert_eq!(governance.total_questions, 6);

        let incidents = score.category(&category("incident-handling")).expect("incidents");
        assert_eq!(incidents.percentage, 0.0);
        assert_eq!(incidents.traffic_light, TrafficLight::Red);
    }

    #[test]
    fn test_overall_under_both_policies() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let session = load_session(&fixture_path("session.yaml")).expect("session");

        let mean = ScoringEngine::new(AggregationPolicy::CategoryMean)
            .score_framework(&framework, &session.answers)
            .expect("score");
        assert_eq!(mean.percentage, 33.3);
        assert_eq!(mean.traffic_light, TrafficLight::Red);

        let weighted = ScoringEngine::new(AggregationPolicy::QuestionWeighted)
            .score_framework(&framework, &session.answers)
            .expect("score");
        assert_eq!(weighted.percentage, 40.0);
        assert_eq!(weighted.traffic_light, TrafficLight::Yellow);

        assert_eq!(mean.answered_questions, 6);
        assert_eq!(mean.total_questions, 10);
        assert_eq!(mean.completion_rate, 60.0);
    }

    #[test]
    fn test_empty_session_scores_zero() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let score = ScoringEngine::default()
            .score_framework(&framework, &[])
            .expect("score");
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.completion_rate, 0.0);
        assert!(score
            .category_scores
            .iter()
            .all(|s| s.traffic_light == TrafficLight::Red));
    }
}

mod classification {
    use super::*;

    fn input(sector: &str, employees: u32, critical: bool) -> ClassificationInput {
        ClassificationInput {
            sector_id: sector.to_string(),
            subsector_id: None,
            employees,
            annual_revenue_eur: 0.0,
            balance_sheet_total_eur: 0.0,
            is_regulated_critical_infra: critical,
        }
    }

    #[test]
    fn test_micro_entity_is_not_applicable() {
        let result = nis2::classifier()
            .classify(&input("energy", 0, false))
            .expect("classify");
        assert_eq!(result.category, EntityCategory::NotApplicable);
    }

    #[test]
    fn test_critical_infrastructure_overrides_size() {
        let result = nis2::classifier()
            .classify(&input("energy", 0, true))
            .expect("classify");
        assert_eq!(result.category, EntityCategory::Essential);
        assert_eq!(result.matched_rule, "critical-infrastructure");
    }

    #[test]
    fn test_fixture_organization_is_important() {
        let session = load_session(&fixture_path("session.yaml")).expect("session");
        let classifier = classifier_for(session.framework).expect("nis2 classifier");
        let result = classifier
            .classify_profile(session.organization.as_ref())
            .expect("classify");
        assert_eq!(result.category, EntityCategory::Important);
    }

    #[test]
    fn test_only_nis2_has_a_classifier() {
        assert!(classifier_for(FrameworkId::Nis2).is_some());
        assert!(classifier_for(FrameworkId::Gdpr).is_none());
        assert!(classifier_for(FrameworkId::BsiC5).is_none());
    }
}

mod costs {
    use super::*;

    #[test]
    fn test_small_company_days_are_floored() {
        let baseline = BaselineCost {
            internal_effort_days: EstimateRange::new(2.0, 4.0),
            ..BaselineCost::default()
        };
        let profile = compliance_maturity::model::CompanyProfile {
            employees: 5,
            entity_category: EntityCategory::NotApplicable,
            is_regulated_critical_infra: false,
        };
        // 0.5 size factor times 0.8 for a green category
        let estimate = CostEstimator::default().adjusted_estimate(
            &baseline,
            Some(&profile),
            TrafficLight::Green,
        );
        assert_eq!(estimate.internal_days.min, 1);
        assert_eq!(estimate.internal_days.max, 2);
        assert!((estimate.factors.combined - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_cost_tiers_are_cumulative() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let session = load_session(&fixture_path("session.yaml")).expect("session");
        let score = ScoringEngine::default()
            .score_framework(&framework, &session.answers)
            .expect("score");
        let profile = session
            .organization
            .as_ref()
            .map(|org| org.company_profile(EntityCategory::Important));

        let tiers = CostEstimator::default()
            .cost_tiers(&framework.recommendations, &score, profile.as_ref())
            .expect("tiers");

        assert_eq!(tiers.quick_only.item_count, 2);
        assert_eq!((tiers.quick_only.internal_days.min, tiers.quick_only.internal_days.max), (6, 10));
        assert_eq!(tiers.quick_and_medium.item_count, 3);
        assert_eq!(tiers.quick_and_medium.total_cost_eur.min, 2500.0);
        assert_eq!(tiers.quick_and_medium.total_cost_eur.max, 6500.0);
        assert_eq!(tiers.all.item_count, 5);
        assert_eq!((tiers.all.internal_days.min, tiers.all.internal_days.max), (65, 128));
        assert_eq!(tiers.all.external_cost_eur.min, 41_000.0);
        assert_eq!(tiers.all.external_cost_eur.max, 117_000.0);
        assert_eq!(tiers.all.total_cost_eur.min, 53_500.0);
        assert_eq!(tiers.all.total_cost_eur.max, 154_500.0);
    }

    #[test]
    fn test_aggregate_rounds_once_after_summing() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let session = load_session(&fixture_path("session.yaml")).expect("session");
        let score = ScoringEngine::default()
            .score_framework(&framework, &session.answers)
            .expect("score");
        let profile = session
            .organization
            .as_ref()
            .map(|org| org.company_profile(EntityCategory::Important));
        let ids = [
            RecommendationId::new("gov-training"),
            RecommendationId::new("ir-playbook"),
        ];

        let summary = CostEstimator::default()
            .aggregate_costs(&framework, &ids, &score, profile.as_ref())
            .expect("aggregate");
        assert_eq!(summary.item_count, 2);
        assert_eq!((summary.internal_days.min, summary.internal_days.max), (6, 10));

        let duplicated = [ids[0].clone(), ids[0].clone()];
        let err = CostEstimator::default()
            .aggregate_costs(&framework, &duplicated, &score, profile.as_ref())
            .expect_err("duplicate id");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_recommendation_is_rejected() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let score = ScoringEngine::default()
            .score_framework(&framework, &[])
            .expect("score");
        let err = CostEstimator::default()
            .estimate_recommendation(&framework, &RecommendationId::new("nope"), &score, None)
            .expect_err("unknown id");
        assert!(err.is_validation());
    }
}

mod roadmap {
    use super::*;

    #[test]
    fn test_every_recommendation_is_placed_once() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let session = load_session(&fixture_path("session.yaml")).expect("session");
        let score = ScoringEngine::default()
            .score_framework(&framework, &session.answers)
            .expect("score");

        let roadmap =
            build_roadmap(&score.category_scores, &framework.recommendations).expect("roadmap");

        assert_eq!(roadmap.item_count(), framework.recommendations.len());
        let quick: Vec<&str> = roadmap
            .phase(PhaseKind::Immediate)
            .items
            .iter()
            .map(|i| i.recommendation_id.as_str())
            .collect();
        assert_eq!(quick, ["ir-playbook", "gov-training"]);

        let strategic = &roadmap.phase(PhaseKind::Strategic).items;
        assert_eq!(strategic[0].recommendation_id.as_str(), "ir-soc");
        assert_eq!(strategic[0].urgency, Urgency::Critical);
        assert_eq!(strategic[1].urgency, Urgency::Medium);
    }
}

mod loading {
    use super::*;

    #[test]
    fn test_unknown_category_reference_is_a_content_error() {
        let err = load_framework(&fixture_path("invalid_content.yaml")).expect_err("invalid");
        assert!(matches!(err, EngineError::Content { .. }), "got {err}");
        assert!(err.to_string().contains("invalid_content.yaml"));
    }

    #[test]
    fn test_session_for_other_framework_is_rejected() {
        let framework = load_framework(&fixture_path("nis2.yaml")).expect("content");
        let err = load_session_for(&fixture_path("gdpr_session.json"), &framework)
            .expect_err("mismatch");
        assert!(err.is_validation());
    }

    #[test]
    fn test_json_session_is_loaded_by_extension() {
        let session = load_session(&fixture_path("gdpr_session.json")).expect("session");
        assert_eq!(session.framework, FrameworkId::Gdpr);
        assert_eq!(session.answered_count(), 1);
        assert!(session.organization.is_none());
    }
}

mod commands {
    use super::*;

    fn json_config(dir: &TempDir, name: &str) -> (AppConfig, PathBuf) {
        let path = dir.path().join(name);
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(path.clone()))
            .build();
        (config, path)
    }

    fn read_json(path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).expect("report written");
        serde_json::from_str(&content).expect("valid json")
    }

    #[test]
    fn test_score_command_writes_json() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, path) = json_config(&tmp, "score.json");

        let code = cli::run_score(
            &fixture_path("nis2.yaml"),
            &fixture_path("session.yaml"),
            &config,
            true,
        )
        .expect("score");

        assert_eq!(code, exit_codes::SUCCESS);
        let report = read_json(&path);
        assert_eq!(report["framework"], "nis2");
        assert_eq!(report["score"]["percentage"], 33.3);
        assert_eq!(report["score"]["traffic_light"], "red");
        assert!(report["metadata"]["scoring_engine_version"].is_string());
    }

    #[test]
    fn test_score_below_threshold_sets_exit_code() {
        let tmp = TempDir::new().expect("tempdir");
        let (mut config, _) = json_config(&tmp, "score.json");
        config.scoring.min_score = Some(50.0);

        let code = cli::run_score(
            &fixture_path("nis2.yaml"),
            &fixture_path("session.yaml"),
            &config,
            true,
        )
        .expect("score");
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn test_classify_command_includes_penalty() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, path) = json_config(&tmp, "classify.json");

        let code = cli::run_classify(&fixture_path("session.yaml"), &config, true).expect("classify");

        assert_eq!(code, exit_codes::SUCCESS);
        let report = read_json(&path);
        assert_eq!(report["classification"]["category"], "important");
        assert_eq!(report["penalty"]["max_fine_eur"], 7_000_000.0);
    }

    #[test]
    fn test_classify_command_rejects_gdpr() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, _) = json_config(&tmp, "classify.json");
        assert!(cli::run_classify(&fixture_path("gdpr_session.json"), &config, true).is_err());
    }

    #[test]
    fn test_roadmap_command_writes_phases_in_order_and_all_estimates() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, path) = json_config(&tmp, "roadmap.json");

        let code = cli::run_roadmap(
            &fixture_path("nis2.yaml"),
            &fixture_path("session.yaml"),
            &config,
            true,
        )
        .expect("roadmap");

        assert_eq!(code, exit_codes::SUCCESS);
        let report = read_json(&path);
        assert_eq!(report["entity_category"], "important");
        let phases = report["roadmap"]["phases"].as_array().expect("phases");
        let ordered: Vec<&str> = phases
            .iter()
            .flat_map(|phase| phase["items"].as_array().expect("items"))
            .map(|item| item["recommendation_id"].as_str().expect("id"))
            .collect();
        assert_eq!(
            ordered,
            ["ir-playbook", "gov-training", "risk-register", "ir-soc", "gov-isms"]
        );

        // Estimates are keyed by id; object key order is not part of the document
        let estimates = report["estimates"].as_object().expect("estimates map");
        let mut estimated: Vec<&str> = estimates.keys().map(String::as_str).collect();
        estimated.sort_unstable();
        let mut expected = ordered.clone();
        expected.sort_unstable();
        assert_eq!(estimated, expected);
        assert_eq!(report["cost_tiers"]["all"]["item_count"], 5);
    }

    #[test]
    fn test_overlap_command_with_custom_table() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, path) = json_config(&tmp, "overlap.json");

        let code = cli::run_overlap(
            FrameworkId::Nis2,
            FrameworkId::Gdpr,
            Some(&fixture_path("overlap_table.yaml")),
            &config,
            true,
        )
        .expect("overlap");

        assert_eq!(code, exit_codes::SUCCESS);
        let report = read_json(&path);
        assert_eq!(report["overlap"]["overall_percent"], 55.0);
        assert_eq!(report["overlap"]["topics"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_validate_command_reports_asymmetries() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, path) = json_config(&tmp, "validate.json");

        let code = cli::run_validate(
            &fixture_path("nis2.yaml"),
            Some(&fixture_path("overlap_table.yaml")),
            &config,
            true,
        )
        .expect("validate");

        assert_eq!(code, exit_codes::SUCCESS);
        let report = read_json(&path);
        assert_eq!(report["questions"], 10);
        // 60 vs 40 disagree in both directions; governance has no reverse
        assert_eq!(report["overlap_asymmetries"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_validate_command_fails_on_invalid_content() {
        let tmp = TempDir::new().expect("tempdir");
        let (config, _) = json_config(&tmp, "validate.json");
        assert!(cli::run_validate(&fixture_path("invalid_content.yaml"), None, &config, true).is_err());
    }
}
