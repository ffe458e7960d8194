//! View-owned UI state.
//!
//! The dashboard keeps three pieces of interactive state: the search text,
//! the active intelligence tab, and the scenario sliders. They live in a
//! [`ViewState`] owned by one [`DashboardView`]; nothing is process-wide.
//! Every change arrives as a [`ViewEvent`] and is applied synchronously.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pulse_core::scenario::{net_impact, NetImpact, ScenarioInput};
use pulse_core::Catalog;

use crate::error::ViewError;
use crate::page;

/// Intelligence panel tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntelTab {
    /// Market intelligence cards.
    #[default]
    MarketIntelligence,
    /// Sales force quotes with sentiment.
    SalesInsights,
    /// What-if scenario builder.
    ScenarioBuilder,
}

impl IntelTab {
    /// All tabs, in display order.
    pub const ALL: [IntelTab; 3] = [
        IntelTab::MarketIntelligence,
        IntelTab::SalesInsights,
        IntelTab::ScenarioBuilder,
    ];

    /// URL slug.
    pub fn slug(self) -> &'static str {
        match self {
            IntelTab::MarketIntelligence => "market-intelligence",
            IntelTab::SalesInsights => "sales-insights",
            IntelTab::ScenarioBuilder => "scenario-builder",
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            IntelTab::MarketIntelligence => "Market Intelligence",
            IntelTab::SalesInsights => "Sales Insights",
            IntelTab::ScenarioBuilder => "Scenario Builder",
        }
    }
}

impl fmt::Display for IntelTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IntelTab {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntelTab::ALL
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| ViewError::unknown_tab(s))
    }
}

/// Interactive state of one dashboard view.
///
/// `Default` is the on-load state: empty search, market intelligence tab,
/// sliders at (-5 %, +50 bps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Search box text. Captured but not acted on.
    pub search: String,
    /// Active intelligence tab.
    pub tab: IntelTab,
    /// Scenario slider positions.
    pub scenario: ScenarioInput,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Search text edited.
    SetSearch(String),
    /// Tab clicked.
    SelectTab(IntelTab),
    /// Revenue slider moved (percent).
    SetRevenueShift(i32),
    /// Interest slider moved (bps).
    SetInterestShift(i32),
}

/// A dashboard view: read-only content plus the state it owns.
#[derive(Debug)]
pub struct DashboardView<'a> {
    catalog: &'a Catalog,
    state: ViewState,
}

impl<'a> DashboardView<'a> {
    /// Creates a view in its on-load state.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_state(catalog, ViewState::default())
    }

    /// Creates a view with explicit state.
    pub fn with_state(catalog: &'a Catalog, state: ViewState) -> Self {
        Self { catalog, state }
    }

    /// Applies one event. Slider values are clamped to their ranges.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SetSearch(text) => self.state.search = text,
            ViewEvent::SelectTab(tab) => self.state.tab = tab,
            ViewEvent::SetRevenueShift(percent) => {
                self.state.scenario = self.state.scenario.with_revenue_shift(percent);
            }
            ViewEvent::SetInterestShift(bps) => {
                self.state.scenario = self.state.scenario.with_interest_shift(bps);
            }
        }
    }

    /// Applies a sequence of events in order.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Content being displayed.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Scenario estimate for the current slider positions.
    pub fn estimate(&self) -> NetImpact {
        net_impact(&self.state.scenario)
    }

    /// Renders the full page.
    pub fn render(&self) -> String {
        page::render_page(self.catalog, &self.state)
    }
}
