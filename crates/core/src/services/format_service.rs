//! Display strings for the values the page renders.
//!
//! Rounding follows the browser: halves round toward positive infinity.

/// Rendered in place of a CAGR that cannot be computed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Round half toward +∞, like `Math.round`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Whole dollars with thousands separators: 360000.4 → "$360,000".
/// Amounts beyond the `u64` range render as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = round_half_up(value);
    if rounded.abs() >= u64::MAX as f64 {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Deposits badge: 10_000_000 → "$10.0M".
#[must_use]
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// Revenue axis tick: 540266 → "$540.266k".
#[must_use]
pub fn format_thousands_tick(value: f64) -> String {
    format!("${}k", value / 1000.0)
}

/// Percentage with fixed decimals: (12.345, 1) → "12.3%".
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Projected CAGR badge; `None` renders as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_cagr(cagr: Option<f64>) -> String {
    match cagr {
        Some(v) if v.is_finite() => format_percent(v, 1),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

