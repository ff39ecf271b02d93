use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Presentation configuration. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Constants used by the revenue projections.
    pub projection: ProjectionSettings,

    /// Range of the "Projected Deposits" slider, in dollars.
    pub deposits: SliderRange,

    /// Range of the "Fed Funds Rate" slider, in percent.
    pub fed_rate: SliderRange,

    /// Where the comparison slider divider starts, in percent.
    pub initial_slider_position: f64,

    /// Outbound link opened by the "Schedule a call" buttons.
    pub scheduling_url: String,

    /// Simulated network delay of the lead-capture form, in milliseconds.
    pub submit_delay_ms: u64,
}

impl DeckSettings {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            projection: ProjectionSettings::default(),
            deposits: SliderRange {
                min: 1_000_000.0,
                max: 100_000_000.0,
                step: 1_000_000.0,
                default: 10_000_000.0,
            },
            fed_rate: SliderRange {
                min: 0.0,
                max: 10.0,
                step: 0.25,
                default: 4.5,
            },
            initial_slider_position: 50.0,
            scheduling_url: "https://calendly.com/zmvc/ir".to_string(),
            submit_delay_ms: 1000,
        }
    }
}

/// Constants of the revenue projection and wallet revenue formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Share of the fed funds yield on deposits kept as revenue (0.80 = 80%).
    pub revenue_share: f64,

    /// Multiplier applied to forecasts in the bull case.
    pub bull_case_multiplier: f64,

    /// CAGR start value when the series has no usable actual.
    pub fallback_start_revenue: f64,

    /// CAGR end value when the series has no usable projection.
    pub fallback_end_revenue: f64,

    /// Any month label containing this marker is in the projection window.
    pub projection_year_marker: String,

    /// Month labels in the projection window that lack the year marker.
    pub projection_lead_months: Vec<String>,

    /// Months hidden from the revenue trend chart.
    pub excluded_display_months: Vec<String>,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            revenue_share: 0.80,
            bull_case_multiplier: 1.15,
            fallback_start_revenue: 540_266.0,
            fallback_end_revenue: 705_048.0,
            projection_year_marker: "'26".to_string(),
            projection_lead_months: vec!["Dec '25".to_string()],
            excluded_display_months: vec![
                "Dec '24".to_string(),
                "Jan '25".to_string(),
                "Feb '25".to_string(),
            ],
        }
    }
}

/// Bounds and granularity of a numeric input slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    /// Clamp `value` into the range and round it to the nearest step,
    /// counted from `min`. Non-finite input snaps to the default.
    ///
    /// Inverted bounds are treated as their swap; NaN bounds leave the
    /// value unclamped.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let (lo, hi) = self.ordered_bounds();
        if lo.is_nan() || hi.is_nan() {
            return value;
        }
        let clamped = value.clamp(lo, hi);
        if self.step.is_nan() || self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - lo) / self.step).round();
        (lo + steps * self.step).clamp(lo, hi)
    }

    fn ordered_bounds(&self) -> (f64, f64) {
        if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        }
    }
}
