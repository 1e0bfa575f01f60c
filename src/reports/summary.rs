//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{
    ClassificationReport, OverlapReport, ReportError, ReportFormat, ReportGenerator,
    RoadmapReport, ScoreReport, ValidationReport,
};
use crate::cost::{CostSummary, EuroRange};
use crate::scoring::TrafficLight;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn light_color(light: TrafficLight) -> &'static str {
    match light {
        TrafficLight::Red => "red",
        TrafficLight::Yellow => "yellow",
        TrafficLight::Green => "green",
    }
}

fn euros(range: &EuroRange) -> String {
    format!("{:.0}-{:.0} EUR", range.min, range.max)
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn light(&self, light: TrafficLight) -> String {
        self.color(light.name(), light_color(light))
    }

    fn cost_line(&self, label: &str, summary: &CostSummary) -> String {
        format!(
            "  {:<20} {:>3} items  {:>4}-{:<4} days  {}",
            self.color(label, "cyan"),
            summary.item_count,
            summary.internal_days.min,
            summary.internal_days.max,
            euros(&summary.total_cost_eur)
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError> {
        let score = &report.score;
        let mut lines = Vec::new();

        lines.push(self.color(
            &format!("{} Maturity Assessment", report.framework.name()),
            "bold",
        ));
        lines.push(format!(
            "{}  {:.1}% ({})",
            self.color("Overall:", "cyan"),
            score.percentage,
            self.light(score.traffic_light)
        ));
        lines.push(format!(
            "{}  {}/{} questions ({:.1}%)",
            self.color("Answered:", "cyan"),
            score.answered_questions,
            score.total_questions,
            score.completion_rate
        ));
        lines.push(String::new());
        lines.push(self.color("Categories:", "bold"));
        for category in &score.category_scores {
            lines.push(format!(
                "  {:<36} {:>5.1}%  {:<6}  {}/{}",
                category.category_id.as_str(),
                category.percentage,
                self.light(category.traffic_light),
                category.answered_questions,
                category.total_questions
            ));
        }

        Ok(lines.join("\n"))
    }

    fn generate_classification_report(
        &self,
        report: &ClassificationReport,
    ) -> Result<String, ReportError> {
        let result = &report.classification;
        let mut lines = Vec::new();

        let category = if result.category.is_in_scope() {
            self.color(result.category.name(), "yellow")
        } else {
            self.color(result.category.name(), "dim")
        };
        lines.push(format!(
            "{}  {}",
            self.color("Entity category:", "cyan"),
            category
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Legal basis:", "cyan"),
            result.legal_reference
        ));
        lines.push(format!(
            "{}  {} ({:?} enterprise)",
            self.color("Matched rule:", "cyan"),
            result.matched_rule,
            result.size_class
        ));

        if let Some(penalty) = &report.penalty {
            lines.push(format!(
                "{}  up to {:.0} EUR (max of {:.0} EUR and {}% of revenue, {})",
                self.color("Fine ceiling:", "cyan"),
                penalty.max_fine_eur,
                penalty.fixed_eur,
                penalty.revenue_percent,
                penalty.legal_reference
            ));
        }

        Ok(lines.join("\n"))
    }

    fn generate_roadmap_report(&self, report: &RoadmapReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(
            &format!("{} Implementation Roadmap", report.framework.name()),
            "bold",
        ));
        if let Some(category) = report.entity_category {
            lines.push(format!(
                "{}  {}",
                self.color("Entity category:", "cyan"),
                category.name()
            ));
        }

        for phase in &report.roadmap.phases {
            lines.push(String::new());
            lines.push(self.color(
                &format!(
                    "Phase {}: {} ({} items)",
                    phase.kind.number(),
                    phase.kind.name(),
                    phase.items.len()
                ),
                "bold",
            ));
            if phase.items.is_empty() {
                lines.push(format!("  {}", self.color("(none)", "dim")));
            }
            for item in &phase.items {
                let mut line = format!(
                    "  [{:<8}] {:<28} {}",
                    item.urgency.name(),
                    item.recommendation_id.as_str(),
                    item.title
                );
                if let Some(estimate) = report.estimates.get(&item.recommendation_id) {
                    line.push_str(&format!(
                        "  {}",
                        self.color(
                            &format!(
                                "{}-{} days, {}",
                                estimate.internal_days.min,
                                estimate.internal_days.max,
                                euros(&estimate.total_cost_eur)
                            ),
                            "dim"
                        )
                    ));
                }
                lines.push(line);
            }
        }

        lines.push(String::new());
        lines.push(self.color("Cost tiers:", "bold"));
        lines.push(self.cost_line("Quick wins", &report.cost_tiers.quick_only));
        lines.push(self.cost_line("+ Core measures", &report.cost_tiers.quick_and_medium));
        lines.push(self.cost_line("Full programme", &report.cost_tiers.all));

        Ok(lines.join("\n"))
    }

    fn generate_overlap_report(&self, report: &OverlapReport) -> Result<String, ReportError> {
        let overlap = &report.overlap;
        let mut lines = Vec::new();
        lines.push(format!(
            "{}  {} -> {}: {:.1}%",
            self.color("Overlap:", "cyan"),
            overlap.from.name(),
            overlap.to.name(),
            overlap.overall_percent
        ));
        if overlap.topics.is_empty() {
            lines.push(format!("  {}", self.color("no curated mappings", "dim")));
        }
        for topic in &overlap.topics {
            lines.push(format!(
                "  {:<32} -> {:<36} {:>5.1}%",
                topic.from_topic, topic.to_topic, topic.percent
            ));
        }
        Ok(lines.join("\n"))
    }

    fn generate_validation_report(
        &self,
        report: &ValidationReport,
    ) -> Result<String, ReportError> {
        let mut lines = vec![format!(
            "{}  {} content is valid: {} categories, {} questions, {} recommendations",
            self.color("OK:", "green"),
            report.framework.name(),
            report.categories,
            report.questions,
            report.recommendations
        )];
        for asymmetry in &report.overlap_asymmetries {
            let mapping = &asymmetry.mapping;
            let reverse = asymmetry
                .reverse_percent
                .map_or_else(|| "missing".to_string(), |p| format!("{p:.1}%"));
            lines.push(format!(
                "{}  {}:{} -> {}:{} is {:.1}%, reverse {}",
                self.color("Warning:", "yellow"),
                mapping.from,
                mapping.from_topic,
                mapping.to,
                mapping.to_topic,
                mapping.percent,
                reverse
            ));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{nis2, max_administrative_fine};
    use crate::model::{EntityCategory, FrameworkId, OrganizationProfile};
    use crate::reports::ReportMetadata;

    #[test]
    fn test_ansi_color_disabled() {
        assert_eq!(ansi_color("x", "red", false), "x");
        assert_eq!(ansi_color("x", "red", true), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_classification_summary_mentions_ceiling() {
        let profile = OrganizationProfile {
            sector: "energy".to_string(),
            subsector: None,
            employees: 300,
            annual_revenue_eur: 1_000_000_000.0,
            balance_sheet_total_eur: 0.0,
            is_regulated_critical_infra: false,
        };
        let classification = nis2::classifier()
            .classify_profile(Some(&profile))
            .expect("classify");
        assert_eq!(classification.category, EntityCategory::Essential);

        let report = ClassificationReport {
            metadata: ReportMetadata::now(),
            framework: FrameworkId::Nis2,
            penalty: max_administrative_fine(classification.category, profile.annual_revenue_eur),
            classification,
        };
        let text = SummaryReporter::new()
            .no_color()
            .generate_classification_report(&report)
            .expect("render");

        assert!(text.contains("Entity category:  Essential entity"));
        assert!(text.contains("up to 20000000 EUR"));
    }
}
