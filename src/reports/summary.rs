//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator, ScoreReport};
use crate::analysis::{CartAnalysisReport, SwapOutcome};
use crate::model::ScoredProduct;
use crate::scoring::EcoRating;

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

const fn rating_color(rating: EcoRating) -> &'static str {
    match rating {
        EcoRating::Excellent | EcoRating::Good => "green",
        EcoRating::Fair => "yellow",
        EcoRating::Poor => "red",
    }
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

    fn header(&self, title: &str) -> Vec<String> {
        vec![
            self.color(title, "bold"),
            self.color("─".repeat(40).as_str(), "dim"),
        ]
    }

    fn score(&self, product: &ScoredProduct) -> String {
        self.color(
            &format!("{:>3}", product.eco_score.value()),
            rating_color(product.rating),
        )
    }

    fn product_line(&self, product: &ScoredProduct) -> String {
        let flag = if product.product.is_sustainable {
            self.color(" (sustainable)", "green")
        } else {
            String::new()
        };
        format!(
            "  {}  {} {}{}",
            self.score(product),
            product.product.product_name,
            self.color(&format!("[{}]", product.product.category), "dim"),
            flag
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_cart_report(&self, report: &CartAnalysisReport) -> Result<String, ReportError> {
        let mut lines = self.header("EcoTrack Cart Analysis");

        lines.push(format!(
            "{}  {}",
            self.color("Green score:", "cyan"),
            self.color(
                &format!("{}/100 ({})", report.cart_green_score, report.rating.label()),
                rating_color(report.rating)
            )
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Items:", "cyan"),
            report.total_items
        ));
        lines.push(format!(
            "{}  {:.1} kg CO2e",
            self.color("Carbon:", "cyan"),
            report.total_carbon_footprint
        ));
        lines.push(format!(
            "{}  {:.0} g",
            self.color("Packaging:", "cyan"),
            report.total_packaging_waste
        ));

        if !report.products.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Products:", "bold"));
            for product in &report.products {
                lines.push(self.product_line(product));
            }
        }

        if !report.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Greener alternatives:", "bold"));
            for suggestion in &report.suggestions {
                let original = &suggestion.original_product;
                if let Some(best) = suggestion.best_alternative() {
                    lines.push(format!(
                        "  {} ({}) → {} ({})  {}",
                        original.product.product_name,
                        original.eco_score,
                        best.product.product_name,
                        self.color(&best.eco_score.to_string(), "green"),
                        self.color(
                            &format!("+{} EcoPoints", suggestion.potential_eco_points),
                            "green"
                        )
                    ));
                }
                for other in suggestion.alternatives.iter().skip(1) {
                    lines.push(format!(
                        "      {}",
                        self.color(
                            &format!("or {} ({})", other.product.product_name, other.eco_score),
                            "dim"
                        )
                    ));
                }
            }
            lines.push(format!(
                "{}  {}",
                self.color("Potential EcoPoints:", "cyan"),
                report.total_potential_eco_points()
            ));
        }

        if report.is_partial() {
            lines.push(String::new());
            lines.push(self.color("Incomplete:", "bold"));
            for id in &report.unresolved_ids {
                lines.push(format!("  {} {id} not found", self.color("?", "yellow")));
            }
            for skipped in &report.skipped {
                lines.push(format!(
                    "  {} {} skipped: {}",
                    self.color("!", "red"),
                    skipped.product_id,
                    skipped.reason
                ));
            }
            for degraded in &report.degraded_lookups {
                lines.push(format!(
                    "  {} no alternatives for {}: {}",
                    self.color("~", "yellow"),
                    degraded.product_id,
                    degraded.reason
                ));
            }
        }

        if report.total_items > 0 {
            lines.push(String::new());
            lines.push(self.color(report.rating.cart_tip(), "dim"));
        }

        Ok(lines.join("\n"))
    }

    fn generate_swap_report(&self, outcome: &SwapOutcome) -> Result<String, ReportError> {
        let mut lines = self.header("EcoTrack Swap");

        lines.push(format!(
            "{}  {} ({})",
            self.color("From:", "cyan"),
            outcome.original_product.product.product_name,
            outcome.original_product.eco_score
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("To:", "cyan"),
            outcome.new_product.product.product_name,
            outcome.new_product.eco_score
        ));

        let improvement = outcome.eco_score_improvement;
        let improvement_color = if improvement > 0 {
            "green"
        } else if improvement == 0 {
            "yellow"
        } else {
            "red"
        };
        lines.push(format!(
            "{}  {}",
            self.color("EcoScore:", "cyan"),
            self.color(&format!("{improvement:+}"), improvement_color)
        ));
        lines.push(format!(
            "{}  {}",
            self.color("EcoPoints:", "cyan"),
            self.color(&format!("+{}", outcome.eco_points_earned), "green")
        ));

        Ok(lines.join("\n"))
    }

    fn generate_product_list(&self, products: &[ScoredProduct]) -> Result<String, ReportError> {
        let mut lines = self.header("EcoTrack Products");

        if products.is_empty() {
            lines.push(format!("  {}", self.color("No products", "dim")));
        }
        for product in products {
            lines.push(self.product_line(product));
        }

        Ok(lines.join("\n"))
    }

    fn generate_score_report(&self, score: &ScoreReport) -> Result<String, ReportError> {
        let mut lines = self.header("EcoScore");

        lines.push(format!(
            "{}  {:.1} kg CO2e, {:.0} g packaging",
            self.color("Input:", "cyan"),
            score.carbon_footprint,
            score.packaging_waste
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Score:", "cyan"),
            self.color(
                &format!("{}/100 ({})", score.eco_score, score.rating.label()),
                rating_color(score.rating)
            )
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
