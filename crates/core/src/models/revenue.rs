use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of the `monthly_revenue_with_projection` series as bundled in
/// `financial_data.json`.
///
/// Historical months carry `revenue`; months in the projection window carry
/// `projected`. Either field may be missing in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month label in the form `Mon 'YY` (e.g., "Dec '25")
    pub month: String,

    /// Confirmed revenue for the month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    /// Forecasted revenue for the month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected: Option<f64>,
}

impl MonthlyRecord {
    /// A historical month with confirmed revenue.
    pub fn actual(month: impl Into<String>, revenue: f64) -> Self {
        Self {
            month: month.into(),
            revenue: Some(revenue),
            projected: None,
        }
    }

    /// A forecast month.
    pub fn forecast(month: impl Into<String>, projected: f64) -> Self {
        Self {
            month: month.into(),
            revenue: None,
            projected: Some(projected),
        }
    }

    /// First day of the month named by the label, if it parses.
    /// "Dec '25" → 2025-12-01.
    #[must_use]
    pub fn period(&self) -> Option<NaiveDate> {
        parse_month_label(&self.month)
    }
}

/// Parse a `Mon 'YY` label into the first day of that month.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {}", label.trim()), "%d %b '%y").ok()
}

/// Which side of the actual/forecast split a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSegment {
    /// Confirmed historical revenue
    Actual,
    /// Forward-looking forecast
    Projection,
}

/// A chart-ready point of the combined revenue series.
///
/// The frontend draws `revenue` as the solid "Actual" area and `projected`
/// as the dashed "Projected" area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<f64>,

    pub segment: SeriesSegment,
}

/// Actuals followed by projections, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub points: Vec<RevenuePoint>,
}

impl RevenueSeries {
    pub fn new(points: Vec<RevenuePoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn actuals(&self) -> impl Iterator<Item = &RevenuePoint> {
        self.points
            .iter()
            .filter(|p| p.segment == SeriesSegment::Actual)
    }

    pub fn projections(&self) -> impl Iterator<Item = &RevenuePoint> {
        self.points
            .iter()
            .filter(|p| p.segment == SeriesSegment::Projection)
    }

    /// Number of months in the projection window.
    #[must_use]
    pub fn projection_months(&self) -> usize {
        self.projections().count()
    }

    /// Month labels in series order.
    #[must_use]
    pub fn months(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.month.as_str()).collect()
    }
}

/// One slice of the revenue-by-product breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    /// Product name (e.g., "Wallet")
    pub name: String,

    /// Revenue attributed to the product
    pub value: f64,

    /// Slice color as a CSS color string
    #[serde(default)]
    pub color: String,
}

/// A product slice with its share of total revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShare {
    pub name: String,
    pub value: f64,
    pub color: String,

    /// value / total × 100
    pub share_pct: f64,
}

/// Contents of `financial_data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    #[serde(default)]
    pub monthly_revenue_with_projection: Vec<MonthlyRecord>,

    #[serde(default)]
    pub revenue_by_product: Vec<ProductRevenue>,
}
