//! Sanity checks for the bundled JSON content.

use tracing::warn;

use crate::errors::CoreError;
use crate::models::cohort::CohortTables;
use crate::models::revenue::FinancialData;
use crate::models::settings::{DeckSettings, SliderRange};
use crate::models::team::TeamMember;

/// Reject empty month labels and negative or non-finite money values.
///
/// Month labels that do not parse, or that are not in chronological order,
/// are only logged: the chart renders them as given.
pub fn validate_financials(data: &FinancialData) -> Result<(), CoreError> {
    let mut previous = None;
    for (i, record) in data.monthly_revenue_with_projection.iter().enumerate() {
        if record.month.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "monthly record #{i} has an empty month label"
            )));
        }
        for (field, value) in [("revenue", record.revenue), ("projected", record.projected)] {
            if let Some(v) = value {
                if !is_valid_amount(v) {
                    return Err(CoreError::ValidationError(format!(
                        "{} {field} must be a non-negative number, got {v}",
                        record.month
                    )));
                }
            }
        }

        match record.period() {
            Some(period) => {
                if previous.is_some_and(|p| period <= p) {
                    warn!(month = %record.month, "Monthly revenue is out of chronological order");
                }
                previous = Some(period);
            }
            None => warn!(month = %record.month, "Unrecognized month label"),
        }
    }

    for product in &data.revenue_by_product {
        if !is_valid_amount(product.value) {
            return Err(CoreError::ValidationError(format!(
                "product '{}' has invalid revenue {}",
                product.name, product.value
            )));
        }
    }
    Ok(())
}

/// Retention values are percentages.
pub fn validate_cohorts(tables: &CohortTables) -> Result<(), CoreError> {
    for (product, cohorts) in tables {
        for cohort in cohorts {
            if let Some(v) = cohort
                .retention
                .iter()
                .find(|v| !v.is_finite() || **v < 0.0 || **v > 100.0)
            {
                return Err(CoreError::ValidationError(format!(
                    "{product} cohort {} has retention {v} outside 0-100",
                    cohort.month
                )));
            }
        }
    }
    Ok(())
}

/// Every member needs a name.
pub fn validate_team(team: &[TeamMember]) -> Result<(), CoreError> {
    match team.iter().position(|m| m.name.trim().is_empty()) {
        Some(i) => Err(CoreError::ValidationError(format!(
            "team member #{i} has no name"
        ))),
        None => Ok(()),
    }
}

/// Slider ranges must be finite, ordered, and contain their default.
pub fn validate_settings(settings: &DeckSettings) -> Result<(), CoreError> {
    for (name, range) in [("deposits", &settings.deposits), ("fed_rate", &settings.fed_rate)] {
        validate_range(name, range)?;
    }
    Ok(())
}

fn validate_range(name: &str, range: &SliderRange) -> Result<(), CoreError> {
    let SliderRange { min, max, step, default } = *range;
    if !(min.is_finite() && max.is_finite() && step.is_finite() && default.is_finite()) {
        return Err(CoreError::ValidationError(format!(
            "{name} range has a non-finite bound, step or default"
        )));
    }
    if min > max {
        return Err(CoreError::ValidationError(format!(
            "{name} range min {min} is greater than max {max}"
        )));
    }
    if step < 0.0 {
        return Err(CoreError::ValidationError(format!(
            "{name} range step {step} is negative"
        )));
    }
    if default < min || default > max {
        return Err(CoreError::ValidationError(format!(
            "{name} default {default} is outside {min}-{max}"
        )));
    }
    Ok(())
}

fn is_valid_amount(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
