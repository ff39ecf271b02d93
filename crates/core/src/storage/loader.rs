use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::errors::CoreError;
use crate::models::cohort::CohortTables;
use crate::models::deck::DeckData;
use crate::models::highlights::Highlights;
use crate::models::revenue::FinancialData;
use crate::models::settings::DeckSettings;
use crate::models::team::TeamMember;

use super::validation;

pub const FINANCIAL_DATA_FILE: &str = "financial_data.json";
pub const HIGHLIGHTS_FILE: &str = "highlights.json";
pub const COHORT_DATA_FILE: &str = "cohort_data.json";
pub const TEAM_DATA_FILE: &str = "team_data.json";

/// Raw bytes of the four bundled documents.
///
/// Use this for WASM where the frontend bundles the JSON at build time.
#[derive(Debug, Clone, Copy)]
pub struct DeckSources<'a> {
    pub financial_data: &'a [u8],
    pub highlights: &'a [u8],
    pub cohort_data: &'a [u8],
    pub team_data: &'a [u8],
}

/// Parses and validates the static presentation content.
pub struct DeckLoader;

impl DeckLoader {
    /// Parse every document and validate the result.
    ///
    /// Flow: JSON bytes → serde models → validation → DeckData
    pub fn load_from_bytes(sources: DeckSources<'_>) -> Result<DeckData, CoreError> {
        let data = DeckData {
            financials: Self::financials_from_slice(sources.financial_data)?,
            highlights: Self::highlights_from_slice(sources.highlights)?,
            cohorts: Self::cohorts_from_slice(sources.cohort_data)?,
            team: Self::team_from_slice(sources.team_data)?,
        };
        info!(
            months = data.financials.monthly_revenue_with_projection.len(),
            products = data.financials.revenue_by_product.len(),
            cohort_tables = data.cohorts.len(),
            team = data.team.len(),
            "Loaded deck data"
        );
        Ok(data)
    }

    /// Load the four documents from a directory (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_dir(dir: impl AsRef<std::path::Path>) -> Result<DeckData, CoreError> {
        let dir = dir.as_ref();
        tracing::debug!(dir = %dir.display(), "Reading deck data");
        let financial_data = std::fs::read(dir.join(FINANCIAL_DATA_FILE))?;
        let highlights = std::fs::read(dir.join(HIGHLIGHTS_FILE))?;
        let cohort_data = std::fs::read(dir.join(COHORT_DATA_FILE))?;
        let team_data = std::fs::read(dir.join(TEAM_DATA_FILE))?;
        Self::load_from_bytes(DeckSources {
            financial_data: &financial_data,
            highlights: &highlights,
            cohort_data: &cohort_data,
            team_data: &team_data,
        })
    }

    pub fn financials_from_slice(bytes: &[u8]) -> Result<FinancialData, CoreError> {
        let data: FinancialData = parse(bytes, FINANCIAL_DATA_FILE)?;
        validation::validate_financials(&data)?;
        Ok(data)
    }

    pub fn highlights_from_slice(bytes: &[u8]) -> Result<Highlights, CoreError> {
        parse(bytes, HIGHLIGHTS_FILE)
    }

    pub fn cohorts_from_slice(bytes: &[u8]) -> Result<CohortTables, CoreError> {
        let tables: CohortTables = parse(bytes, COHORT_DATA_FILE)?;
        validation::validate_cohorts(&tables)?;
        Ok(tables)
    }

    pub fn team_from_slice(bytes: &[u8]) -> Result<Vec<TeamMember>, CoreError> {
        let team: Vec<TeamMember> = parse(bytes, TEAM_DATA_FILE)?;
        validation::validate_team(&team)?;
        Ok(team)
    }

    /// Settings overrides; missing fields keep their defaults.
    pub fn settings_from_slice(bytes: &[u8]) -> Result<DeckSettings, CoreError> {
        let settings: DeckSettings = parse(bytes, "settings")?;
        validation::validate_settings(&settings)?;
        Ok(settings)
    }

    /// Serialize any model back to pretty JSON (for export or fixtures).
    pub fn to_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize: {e}")))
    }
}

fn parse<T: DeserializeOwned>(bytes: &[u8], source: &str) -> Result<T, CoreError> {
    serde_json::from_slice(bytes)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse {source}: {e}")))
}
