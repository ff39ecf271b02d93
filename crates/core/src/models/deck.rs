use serde::{Deserialize, Serialize};

use super::cohort::CohortTables;
use super::highlights::Highlights;
use super::revenue::FinancialData;
use super::team::TeamMember;

/// All static content bundled with the presentation.
///
/// Loaded once per session and never mutated by the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckData {
    /// `financial_data.json`
    pub financials: FinancialData,

    /// `highlights.json`
    pub highlights: Highlights,

    /// `cohort_data.json`
    pub cohorts: CohortTables,

    /// `team_data.json`
    pub team: Vec<TeamMember>,
}
