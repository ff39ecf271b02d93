use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::revenue::{
    MonthlyRecord, ProductRevenue, ProductShare, RevenuePoint, RevenueSeries, SeriesSegment,
};
use crate::models::settings::ProjectionSettings;
use crate::models::wallet::WalletRevenue;

/// Derives the numbers shown on the financial performance section.
///
/// Every method is a pure function of its arguments and the configured
/// constants; nothing is remembered between calls.
///
/// The revenue pipeline runs in order:
/// partition → strip/stitch actuals → scale projections → concatenate,
/// with the display filter applied to the result for the trend chart.
#[derive(Debug, Clone, Default)]
pub struct MetricsProjector {
    settings: ProjectionSettings,
}

impl MetricsProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ProjectionSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    // ── Wallet calculator ───────────────────────────────────────────

    /// annual = deposits × (fed_rate / 100) × revenue_share; monthly = annual / 12.
    ///
    /// Inputs are not range-checked; the sliders own their bounds.
    #[must_use]
    pub fn compute_wallet_revenue(&self, deposits: f64, fed_rate: f64) -> WalletRevenue {
        let annual = deposits * (fed_rate / 100.0) * self.settings.revenue_share;
        WalletRevenue {
            monthly: annual / 12.0,
            annual,
        }
    }

    // ── Revenue series ──────────────────────────────────────────────

    /// Whether a month label falls in the projection window.
    #[must_use]
    pub fn is_projection_month(&self, month: &str) -> bool {
        month.contains(self.settings.projection_year_marker.as_str())
            || self
                .settings
                .projection_lead_months
                .iter()
                .any(|m| m == month)
    }

    /// Split the raw monthly records into actuals and projections and
    /// return them as one chart series.
    ///
    /// - actuals lose `projected`, except the last one whose `projected`
    ///   repeats its `revenue` so both areas meet on the chart
    /// - projections lose `revenue`; a missing forecast counts as 0 and is
    ///   scaled by the bull-case multiplier when `bull_case` is set
    ///
    /// The input is not modified.
    #[must_use]
    pub fn build_revenue_series(&self, records: &[MonthlyRecord], bull_case: bool) -> RevenueSeries {
        let (actual_records, projection_records): (Vec<&MonthlyRecord>, Vec<&MonthlyRecord>) =
            records
                .iter()
                .partition(|r| !self.is_projection_month(&r.month));

        let last_actual = actual_records.len().checked_sub(1);
        let actuals = actual_records.iter().enumerate().map(|(i, r)| RevenuePoint {
            month: r.month.clone(),
            revenue: r.revenue,
            projected: if Some(i) == last_actual { r.revenue } else { None },
            segment: SeriesSegment::Actual,
        });

        let multiplier = if bull_case {
            self.settings.bull_case_multiplier
        } else {
            1.0
        };
        let projections = projection_records.iter().map(|r| RevenuePoint {
            month: r.month.clone(),
            revenue: None,
            projected: Some(r.projected.unwrap_or(0.0) * multiplier),
            segment: SeriesSegment::Projection,
        });

        let series = RevenueSeries::new(actuals.chain(projections).collect());
        debug!(
            actuals = actual_records.len(),
            projections = projection_records.len(),
            bull_case,
            "Built revenue series"
        );
        series
    }

    /// Compound annual growth rate, in percent, from the last actual to the
    /// last projection of `series`.
    ///
    /// `years` is the number of projection months / 12. A zero-valued or
    /// missing endpoint falls back to the configured constant. An empty
    /// projection window (or any other non-finite outcome) is reported as
    /// [`CoreError::NotComputable`].
    pub fn compute_cagr(&self, series: &RevenueSeries) -> Result<f64, CoreError> {
        let projection_months = series.projection_months();
        if projection_months == 0 {
            warn!("CAGR requested for a series without projection months");
            return Err(CoreError::NotComputable(
                "projection window is empty (0 years)".to_string(),
            ));
        }
        let years = projection_months as f64 / 12.0;

        let start = series
            .actuals()
            .last()
            .and_then(|p| non_zero(p.revenue).or_else(|| non_zero(p.projected)))
            .unwrap_or(self.settings.fallback_start_revenue);
        let end = series
            .projections()
            .last()
            .and_then(|p| non_zero(p.projected))
            .unwrap_or(self.settings.fallback_end_revenue);

        let cagr = ((end / start).powf(1.0 / years) - 1.0) * 100.0;
        if !cagr.is_finite() {
            warn!(start, end, years, "CAGR is not finite");
            return Err(CoreError::NotComputable(format!(
                "growth from {start} to {end} over {years} years has no finite rate"
            )));
        }
        Ok(cagr)
    }

    /// Drop points whose month label is in `excluded`, keeping order.
    #[must_use]
    pub fn filter_display_window<S: AsRef<str>>(
        &self,
        series: &RevenueSeries,
        excluded: &[S],
    ) -> RevenueSeries {
        RevenueSeries::new(
            series
                .points
                .iter()
                .filter(|p| !excluded.iter().any(|m| m.as_ref() == p.month))
                .cloned()
                .collect(),
        )
    }

    /// [`filter_display_window`](Self::filter_display_window) with the
    /// configured excluded months.
    #[must_use]
    pub fn trend_window(&self, series: &RevenueSeries) -> RevenueSeries {
        self.filter_display_window(series, self.settings.excluded_display_months.as_slice())
    }

    // ── Product mix ─────────────────────────────────────────────────

    /// Each product's share of total revenue, in input order.
    #[must_use]
    pub fn product_mix(&self, products: &[ProductRevenue]) -> Vec<ProductShare> {
        let total: f64 = products.iter().map(|p| p.value).sum();
        products
            .iter()
            .map(|p| ProductShare {
                name: p.name.clone(),
                value: p.value,
                color: p.color.clone(),
                share_pct: if total > 0.0 {
                    p.value / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

/// Falsy values (missing, zero, NaN) count as absent.
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
