use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A monthly signup cohort with its retention curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    /// Cohort label (e.g., "Jan '24")
    pub month: String,

    /// Number of customers in the cohort
    pub size: u32,

    /// Retention percentage per month since signup, starting at M0
    pub retention: Vec<f64>,
}

/// Contents of `cohort_data.json`: product line → cohorts.
///
/// Keyed by display name ("Credit Rail", "Wallet Share").
pub type CohortTables = BTreeMap<String, Vec<Cohort>>;

/// A rendered retention cell of the heat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCell {
    pub value: f64,

    /// Background opacity of the brand-blue fill
    pub alpha: f64,

    /// Whether the cell text should be white
    pub light_text: bool,

    /// Cell text, e.g. "64%"
    pub label: String,
}
