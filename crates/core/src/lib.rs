pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::time::Duration;

use models::{
    cohort::{Cohort, HeatCell},
    deck::DeckData,
    highlights::Highlights,
    revenue::{ProductShare, RevenueSeries},
    settings::DeckSettings,
    team::TeamMember,
    wallet::{WalletInputs, WalletRevenue},
};
use services::{
    cohort_service::CohortService,
    format_service,
    lead_service::LeadForm,
    listeners::{EventTarget, ListenerRegistration},
    metrics_projector::MetricsProjector,
    position_tracker::PositionTracker,
};
use storage::loader::{DeckLoader, DeckSources};

use errors::CoreError;

/// Main entry point for the investor deck core library.
/// Holds the static content and the interactive view state of the page.
#[must_use]
pub struct InvestorDeck {
    data: DeckData,
    settings: DeckSettings,
    projector: MetricsProjector,
    cohort_service: CohortService,
    slider: PositionTracker,
    lead_form: LeadForm,
    bull_case: bool,
    wallet: WalletInputs,
}

impl std::fmt::Debug for InvestorDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestorDeck")
            .field("months", &self.data.financials.monthly_revenue_with_projection.len())
            .field("team", &self.data.team.len())
            .field("slider", &self.slider)
            .field("bull_case", &self.bull_case)
            .field("wallet", &self.wallet)
            .field("lead_form", &self.lead_form.status())
            .finish()
    }
}

impl InvestorDeck {
    /// Build a deck over already-loaded content with default settings.
    pub fn new(data: DeckData) -> Self {
        Self::with_settings(data, DeckSettings::default())
    }

    pub fn with_settings(data: DeckData, settings: DeckSettings) -> Self {
        let projector = MetricsProjector::with_settings(settings.projection.clone());
        let slider = PositionTracker::with_position(settings.initial_slider_position);
        let wallet = WalletInputs {
            deposits: settings.deposits.default,
            fed_rate: settings.fed_rate.default,
        };

        Self {
            data,
            settings,
            projector,
            cohort_service: CohortService::new(),
            slider,
            lead_form: LeadForm::new(),
            bull_case: false,
            wallet,
        }
    }

    /// Parse the bundled JSON documents.
    /// Use this for WASM where the frontend embeds the files.
    pub fn load_from_bytes(sources: DeckSources<'_>) -> Result<Self, CoreError> {
        let data = DeckLoader::load_from_bytes(sources)?;
        Ok(Self::new(data))
    }

    /// Load the JSON documents from a directory (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_dir(dir: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let data = DeckLoader::load_from_dir(dir)?;
        Ok(Self::new(data))
    }

    // ── Static content ──────────────────────────────────────────────

    #[must_use]
    pub fn data(&self) -> &DeckData {
        &self.data
    }

    #[must_use]
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    #[must_use]
    pub fn highlights(&self) -> &Highlights {
        &self.data.highlights
    }

    #[must_use]
    pub fn team(&self) -> &[TeamMember] {
        &self.data.team
    }

    /// Link opened by the "Schedule a call" buttons.
    #[must_use]
    pub fn scheduling_url(&self) -> &str {
        &self.settings.scheduling_url
    }

    // ── Comparison slider ───────────────────────────────────────────

    #[must_use]
    pub fn slider(&self) -> &PositionTracker {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut PositionTracker {
        &mut self.slider
    }

    /// Attach the slider's window listeners; they are removed when the
    /// returned registration is dropped.
    pub fn mount_slider<T: EventTarget>(target: &mut T) -> ListenerRegistration<'_, T> {
        ListenerRegistration::for_slider(target)
    }

    // ── Revenue trend ───────────────────────────────────────────────

    #[must_use]
    pub fn is_bull_case(&self) -> bool {
        self.bull_case
    }

    /// Toggle the "Bull Case (+15%)" scenario.
    pub fn set_bull_case(&mut self, bull_case: bool) {
        self.bull_case = bull_case;
    }

    /// Actuals followed by (scenario-scaled) projections.
    #[must_use]
    pub fn revenue_series(&self) -> RevenueSeries {
        self.projector.build_revenue_series(
            &self.data.financials.monthly_revenue_with_projection,
            self.bull_case,
        )
    }

    /// The series as plotted on the trend chart, early months excluded.
    #[must_use]
    pub fn revenue_trend(&self) -> RevenueSeries {
        self.projector.trend_window(&self.revenue_series())
    }

    /// Projected CAGR in percent over the projection window.
    pub fn projected_cagr(&self) -> Result<f64, CoreError> {
        self.projector.compute_cagr(&self.revenue_series())
    }

    /// CAGR badge text, e.g. "112.3%", or "n/a".
    #[must_use]
    pub fn cagr_label(&self) -> String {
        format_service::format_cagr(self.projected_cagr().ok())
    }

    #[must_use]
    pub fn product_mix(&self) -> Vec<ProductShare> {
        self.projector
            .product_mix(&self.data.financials.revenue_by_product)
    }

    // ── Wallet calculator ───────────────────────────────────────────

    #[must_use]
    pub fn wallet_inputs(&self) -> WalletInputs {
        self.wallet
    }

    /// Move the deposits slider. Returns the value after range/step snapping.
    pub fn set_deposits(&mut self, deposits: f64) -> f64 {
        self.wallet.deposits = self.settings.deposits.snap(deposits);
        self.wallet.deposits
    }

    /// Move the fed funds rate slider. Returns the value after snapping.
    pub fn set_fed_rate(&mut self, fed_rate: f64) -> f64 {
        self.wallet.fed_rate = self.settings.fed_rate.snap(fed_rate);
        self.wallet.fed_rate
    }

    #[must_use]
    pub fn wallet_revenue(&self) -> WalletRevenue {
        self.projector
            .compute_wallet_revenue(self.wallet.deposits, self.wallet.fed_rate)
    }

    /// Deposits badge text, e.g. "$10.0M".
    #[must_use]
    pub fn deposits_label(&self) -> String {
        format_service::format_millions(self.wallet.deposits)
    }

    // ── Cohorts ─────────────────────────────────────────────────────

    pub fn cohort_table(&self, product: &str) -> Result<&[Cohort], CoreError> {
        self.cohort_service.table(&self.data.cohorts, product)
    }

    /// Heat-map rows for one product line.
    pub fn cohort_heat_map(&self, product: &str) -> Result<Vec<Vec<HeatCell>>, CoreError> {
        let cohorts = self.cohort_table(product)?;
        Ok(self.cohort_service.heat_map(cohorts))
    }

    /// Mean retention of a product line at month `month`.
    pub fn average_retention(&self, product: &str, month: usize) -> Result<Option<f64>, CoreError> {
        let cohorts = self.cohort_table(product)?;
        Ok(self.cohort_service.average_retention(cohorts, month))
    }

    // ── Lead capture ────────────────────────────────────────────────

    #[must_use]
    pub fn lead_form(&self) -> &LeadForm {
        &self.lead_form
    }

    pub fn lead_form_mut(&mut self) -> &mut LeadForm {
        &mut self.lead_form
    }

    /// How long the caller should wait between `begin_submit` and
    /// `complete_submit`.
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        self.settings.submit_delay()
    }
}
