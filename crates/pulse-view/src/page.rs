//! Full-page layout.

use url::form_urlencoded;

use pulse_core::Catalog;

use crate::cards::{action_card, intel_card, metric_card, quote_card, scenario_panel};
use crate::markup::escape;
use crate::state::{IntelTab, ViewState};

const SEARCH_PLACEHOLDER: &str = "Ask GenAI… ex: /compare NIM vs peers";

const STYLE: &str = r#"
  body { margin: 0; padding: 1.5rem; background: #f9fafb; color: #1f2937; font-family: system-ui, sans-serif; }
  main { max-width: 64rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1.5rem; }
  h2 { font-size: 0.875rem; color: #4b5563; margin: 0 0 0.5rem; }
  .card { background: #fff; border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1rem; }
  .banner { background: #eef2ff; border-left: 4px solid #4f46e5; padding: 1rem; border-radius: 0.25rem; }
  .banner h1 { font-size: 1rem; font-weight: 500; color: #312e81; margin: 0; }
  .search input { width: 100%; box-sizing: border-box; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.375rem; }
  .metrics { display: grid; grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr)); gap: 1rem; }
  .metric header { display: flex; justify-content: space-between; font-size: 0.75rem; color: #6b7280; }
  .metric-delta { font-style: italic; opacity: 0.6; font-size: 0.625rem; }
  .metric-body { display: flex; align-items: flex-end; gap: 0.5rem; }
  .metric-value { font-size: 1.25rem; font-weight: 600; }
  .metric-spark { flex: 1; height: 2rem; color: #4f46e5; }
  .sparkline { width: 100%; height: 100%; }
  .stack { display: flex; flex-direction: column; gap: 0.75rem; }
  .tabs { display: flex; gap: 0.5rem; background: #fff; border: 1px solid #e5e7eb; border-radius: 0.75rem; padding: 0.25rem; margin-bottom: 1rem; }
  .tabs a { padding: 0.5rem 0.75rem; border-radius: 0.5rem; text-decoration: none; color: inherit; font-size: 0.875rem; }
  .tabs a[aria-selected="true"] { background: #4f46e5; color: #fff; }
  .grid2 { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1rem; }
  .sentiment { font-family: monospace; font-size: 0.75rem; }
  .positive { color: #059669; }
  .negative { color: #dc2626; }
  .action { display: flex; align-items: center; justify-content: space-between; }
  .action p { flex: 1; margin: 0 1rem 0 0; }
  .scenario label { display: block; font-size: 0.75rem; color: #4b5563; margin-bottom: 0.75rem; }
  .scenario input[type=range] { width: 100%; }
"#;

/// Renders the complete dashboard document.
pub fn render_page(catalog: &Catalog, state: &ViewState) -> String {
    let content = [
        search_and_headline(catalog, state),
        daily_pulse(catalog),
        ceo_insights(catalog),
        intel_tabs(catalog, state),
        action_queue(catalog),
    ]
    .join("\n");

    html_doc("Daily Pulse", &content)
}

fn html_doc(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
<main>
{content}
</main>
</body>
</html>"#
    )
}

fn search_and_headline(catalog: &Catalog, state: &ViewState) -> String {
    let scenario = state.scenario;
    format!(
        r#"<section>
  <form class="search" method="get" action="/" role="search">
    <input type="search" name="q" placeholder="{placeholder}" value="{search}">
    <input type="hidden" name="tab" value="{tab}">
    <input type="hidden" name="revenue" value="{revenue}">
    <input type="hidden" name="interest" value="{interest}">
  </form>
  <div class="banner"><h1>{headline}</h1></div>
</section>"#,
        placeholder = escape(SEARCH_PLACEHOLDER),
        search = escape(&state.search),
        tab = state.tab.slug(),
        revenue = scenario.revenue_shift.percent(),
        interest = scenario.interest_shift.bps(),
        headline = escape(&catalog.headline),
    )
}

fn daily_pulse(catalog: &Catalog) -> String {
    let cards: String = catalog.metrics.iter().map(metric_card).collect();
    format!(
        r#"<section>
  <h2>Daily Pulse (L0)</h2>
  <div class="metrics">{cards}</div>
</section>"#
    )
}

fn ceo_insights(catalog: &Catalog) -> String {
    let cards: String = catalog.ceo_insights.iter().map(intel_card).collect();
    format!(
        r#"<section class="stack">
  <h2>GenAI CEO Insights</h2>
  {cards}
</section>"#
    )
}

fn intel_tabs(catalog: &Catalog, state: &ViewState) -> String {
    let links: String = IntelTab::ALL
        .iter()
        .map(|&tab| {
            format!(
                r#"<a role="tab" href="{href}" aria-selected="{selected}">{label}</a>"#,
                href = tab_href(tab, state),
                selected = tab == state.tab,
                label = tab.label(),
            )
        })
        .collect();

    let panel = match state.tab {
        IntelTab::MarketIntelligence => {
            let cards: String = catalog.market_intel.iter().map(intel_card).collect();
            format!(r#"<div class="grid2">{cards}</div>"#)
        }
        IntelTab::SalesInsights => {
            let cards: String = catalog.sales_quotes.iter().map(quote_card).collect();
            format!(r#"<div class="grid2">{cards}</div>"#)
        }
        IntelTab::ScenarioBuilder => scenario_panel(state),
    };

    format!(
        r#"<section>
  <nav class="tabs" role="tablist">{links}</nav>
  <div role="tabpanel" id="panel-{slug}">{panel}</div>
</section>"#,
        slug = state.tab.slug(),
    )
}

fn action_queue(catalog: &Catalog) -> String {
    let cards: String = catalog.actions.iter().map(action_card).collect();
    format!(
        r#"<section class="stack">
  <h2>Action Queue</h2>
  {cards}
</section>"#
    )
}

/// Link selecting `tab` while keeping the rest of the state.
fn tab_href(tab: IntelTab, state: &ViewState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("tab", tab.slug());
    query.append_pair("revenue", &state.scenario.revenue_shift.percent().to_string());
    query.append_pair("interest", &state.scenario.interest_shift.bps().to_string());
    if !state.search.is_empty() {
        query.append_pair("q", &state.search);
    }
    escape(&format!("/?{}", query.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::scenario::ScenarioInput;

    fn render(state: &ViewState) -> String {
        render_page(&Catalog::builtin(), state)
    }

    #[test]
    fn test_default_page_sections() {
        let html = render(&ViewState::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        for heading in ["Daily Pulse (L0)", "GenAI CEO Insights", "Action Queue"] {
            assert!(html.contains(heading), "missing {heading}");
        }
        assert!(html.contains("PAT hits ₹670 Cr"));
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert_eq!(html.matches(r#"class="card metric""#).count(), 5);
        assert_eq!(html.matches(r#"class="card action""#).count(), 3);
    }

    #[test]
    fn test_only_active_panel_renders() {
        let html = render(&ViewState::default());
        assert!(html.contains(r#"id="panel-market-intelligence""#));
        assert!(html.contains("🌐 Relaxed fintech IPO norms"));
        assert!(!html.contains("Sentiment 0.72"));
        assert!(!html.contains("Estimated PAT impact"));

        let html = render(&ViewState {
            tab: IntelTab::SalesInsights,
            ..ViewState::default()
        });
        assert!(html.contains("Sentiment 0.72"));
        assert!(html.contains("sentiment negative"));
        assert!(!html.contains("🌐 Relaxed fintech IPO norms"));
    }

    #[test]
    fn test_scenario_tab() {
        let html = render(&ViewState {
            tab: IntelTab::ScenarioBuilder,
            scenario: ScenarioInput::new(0, 0),
            ..ViewState::default()
        });
        assert!(html.contains(r#"<strong id="net-impact">₹0 Cr</strong>"#));
        assert!(html.contains(r#"aria-selected="true">Scenario Builder</a>"#));
    }

    #[test]
    fn test_tab_links_keep_state() {
        let state = ViewState {
            search: "NIM & peers".to_string(),
            tab: IntelTab::MarketIntelligence,
            scenario: ScenarioInput::new(3, -40),
        };
        assert_eq!(
            tab_href(IntelTab::SalesInsights, &state),
            "/?tab=sales-insights&amp;revenue=3&amp;interest=-40&amp;q=NIM+%26+peers"
        );
    }

    #[test]
    fn test_search_text_is_escaped() {
        let html = render(&ViewState {
            search: "</title><script>x</script>".to_string(),
            ..ViewState::default()
        });
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;/title&gt;&lt;script&gt;x&lt;/script&gt;"));
    }
}
