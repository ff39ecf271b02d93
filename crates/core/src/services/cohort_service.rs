use crate::errors::CoreError;
use crate::models::cohort::{Cohort, CohortTables, HeatCell};

/// Maximum background opacity of a 100% retention cell.
const MAX_CELL_ALPHA: f64 = 0.5;

/// Retention above this percentage gets white text.
const LIGHT_TEXT_THRESHOLD: f64 = 50.0;

/// Builds the retention heat map shown on the detailed financials page.
pub struct CohortService;

impl CohortService {
    pub fn new() -> Self {
        Self
    }

    /// Look up the cohorts of one product line ("Credit Rail", "Wallet Share").
    pub fn table<'a>(&self, tables: &'a CohortTables, product: &str) -> Result<&'a [Cohort], CoreError> {
        tables
            .get(product)
            .map(Vec::as_slice)
            .ok_or_else(|| CoreError::CohortNotFound(product.to_string()))
    }

    /// Shading for a single retention value.
    #[must_use]
    pub fn heat_cell(&self, value: f64) -> HeatCell {
        HeatCell {
            value,
            alpha: value / 100.0 * MAX_CELL_ALPHA,
            light_text: value > LIGHT_TEXT_THRESHOLD,
            label: format!("{value}%"),
        }
    }

    /// One row of heat cells per cohort, in table order.
    #[must_use]
    pub fn heat_map(&self, cohorts: &[Cohort]) -> Vec<Vec<HeatCell>> {
        cohorts
            .iter()
            .map(|c| c.retention.iter().map(|v| self.heat_cell(*v)).collect())
            .collect()
    }

    /// Column headers `M0` … `M{months-1}`.
    #[must_use]
    pub fn month_headers(&self, months: usize) -> Vec<String> {
        (0..months).map(|i| format!("M{i}")).collect()
    }

    /// Mean retention at `month` over the cohorts old enough to have it.
    #[must_use]
    pub fn average_retention(&self, cohorts: &[Cohort], month: usize) -> Option<f64> {
        let values: Vec<f64> = cohorts
            .iter()
            .filter_map(|c| c.retention.get(month).copied())
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Total customers across the table.
    #[must_use]
    pub fn total_customers(&self, cohorts: &[Cohort]) -> u64 {
        cohorts.iter().map(|c| u64::from(c.size)).sum()
    }
}

impl Default for CohortService {
    fn default() -> Self {
        Self::new()
    }
}
