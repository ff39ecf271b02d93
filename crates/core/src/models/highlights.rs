use serde::{Deserialize, Serialize};

/// Headline KPIs from `highlights.json`, all in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlights {
    /// Revenue growth over the trailing six months
    pub six_month_growth: f64,

    /// Net revenue retention of the credit rail product
    pub credit_rail_nrr: f64,

    /// Net revenue retention of embedded payments
    pub embedded_nrr: f64,

    /// Net revenue retention of the wallet product
    pub wallet_nrr: f64,
}
