//! Statistics collected while analyzing a cart.

use serde::{Deserialize, Serialize};

/// Counters describing the catalog work done for one analysis.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupStats {
    /// Products returned by the catalog for the request
    pub products_resolved: usize,
    /// Requested ids the catalog did not return
    pub products_unresolved: usize,
    /// Products excluded because they could not be scored
    pub products_skipped: usize,
    /// Alternative lookups issued (one per non-sustainable product)
    pub lookups_performed: usize,
    /// Lookups that failed soft
    pub lookups_degraded: usize,
    /// Strictly-better alternatives found across all lookups
    pub alternatives_found: usize,
    /// Suggestions produced
    pub suggestions: usize,
}

impl LookupStats {
    /// Create new empty stats
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a summary of the analysis
    pub fn log_summary(&self) {
        tracing::info!(
            "Cart analysis complete: {} products resolved, {} unresolved, {} skipped, \
             {} lookups ({} degraded), {} alternatives, {} suggestions",
            self.products_resolved,
            self.products_unresolved,
            self.products_skipped,
            self.lookups_performed,
            self.lookups_degraded,
            self.alternatives_found,
            self.suggestions
        );
    }

    /// Check if any lookup failed soft
    #[must_use]
    pub const fn has_degraded(&self) -> bool {
        self.lookups_degraded > 0
    }

    /// Merge stats from another analysis
    pub fn merge(&mut self, other: &Self) {
        self.products_resolved += other.products_resolved;
        self.products_unresolved += other.products_unresolved;
        self.products_skipped += other.products_skipped;
        self.lookups_performed += other.lookups_performed;
        self.lookups_degraded += other.lookups_degraded;
        self.alternatives_found += other.alternatives_found;
        self.suggestions += other.suggestions;
    }
}
