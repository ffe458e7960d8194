//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pulse_core::scenario::{net_impact, ScenarioInput};
use pulse_core::Catalog;
use pulse_view::{DashboardView, ViewEvent, ViewResult};

use crate::error::ServerResult;

/// Application state.
pub struct AppState {
    /// Validated dashboard content, shared read-only.
    pub catalog: Catalog,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Narrows a query integer to `i32`, pinning at either end.
///
/// The slider types clamp further; this only keeps huge URL values on the
/// same path instead of failing extraction.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

// =============================================================================
// DASHBOARD PAGE
// =============================================================================

/// Query parameters carrying the view state of the page.
///
/// Each present parameter becomes one view event applied to a fresh view.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Active tab slug.
    pub tab: Option<String>,
    /// Revenue slider position (%).
    pub revenue: Option<i64>,
    /// Interest slider position (bps).
    pub interest: Option<i64>,
    /// Search box text.
    pub q: Option<String>,
}

impl PageQuery {
    /// Converts the query into view events, in page order.
    pub fn events(self) -> ViewResult<Vec<ViewEvent>> {
        let mut events = Vec::with_capacity(4);
        if let Some(q) = self.q {
            events.push(ViewEvent::SetSearch(q));
        }
        if let Some(tab) = self.tab {
            events.push(ViewEvent::SelectTab(tab.parse()?));
        }
        if let Some(percent) = self.revenue {
            events.push(ViewEvent::SetRevenueShift(saturate(percent)));
        }
        if let Some(bps) = self.interest {
            events.push(ViewEvent::SetInterestShift(saturate(bps)));
        }
        Ok(events)
    }
}

/// Render the dashboard.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ServerResult<Html<String>> {
    let events = query.events()?;
    debug!(events = events.len(), "rendering dashboard");

    let mut view = DashboardView::new(&state.catalog);
    view.apply_all(events);

    Ok(Html(view.render()))
}

// =============================================================================
// SCENARIO
// =============================================================================

/// Query parameters for the scenario calculator.
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioQuery {
    /// Revenue change (%). Defaults to the on-load position.
    pub revenue: Option<i64>,
    /// Interest-rate change (bps). Defaults to the on-load position.
    pub interest: Option<i64>,
}

impl ScenarioQuery {
    /// Clamped calculator input.
    pub fn input(&self) -> ScenarioInput {
        let mut input = ScenarioInput::default();
        if let Some(percent) = self.revenue {
            input = input.with_revenue_shift(saturate(percent));
        }
        if let Some(bps) = self.interest {
            input = input.with_interest_shift(saturate(bps));
        }
        input
    }
}

/// Scenario calculator response.
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    /// Revenue change applied (%), after clamping.
    pub revenue_shift_percent: i32,
    /// Interest-rate change applied (bps), after clamping.
    pub interest_shift_bps: i32,
    /// Estimated PAT impact in crore rupees.
    pub net_impact: Decimal,
    /// Display form of the estimate.
    pub display: String,
}

/// Compute the estimated PAT impact of a scenario.
pub async fn scenario(Query(query): Query<ScenarioQuery>) -> Json<ScenarioResponse> {
    let input = query.input();
    let impact = net_impact(&input);
    debug!(
        revenue = input.revenue_shift.percent(),
        interest = input.interest_shift.bps(),
        %impact,
        "scenario recomputed"
    );

    Json(ScenarioResponse {
        revenue_shift_percent: input.revenue_shift.percent(),
        interest_shift_bps: input.interest_shift.bps(),
        net_impact: impact.crore(),
        display: impact.to_string(),
    })
}

// =============================================================================
// CONTENT
// =============================================================================

/// Dump the dashboard content.
pub async fn content(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.catalog.clone())
}
