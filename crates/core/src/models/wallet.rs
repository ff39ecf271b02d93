use serde::{Deserialize, Serialize};

/// Current values of the wallet revenue calculator sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletInputs {
    /// Projected customer deposits, in dollars
    pub deposits: f64,

    /// Fed funds rate, in percent (4.5 = 4.5%)
    pub fed_rate: f64,
}

/// Revenue from the fed funds rate share on wallet deposits.
///
/// Values are unrounded; rounding happens at display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletRevenue {
    pub monthly: f64,
    pub annual: f64,
}
