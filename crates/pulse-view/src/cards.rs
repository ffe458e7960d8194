//! Card renderers.
//!
//! Each renderer is a pure function from one content record to an HTML
//! fragment. All text goes through [`escape`] or [`rich_text`].

use pulse_core::scenario::{net_impact, InterestShift, RevenueShift};
use pulse_core::types::{ActionItem, Insight, MetricTile, SalesQuote};

use crate::markup::{escape, rich_text};
use crate::sparkline::Sparkline;
use crate::state::{IntelTab, ViewState};

const SPARK_WIDTH: f64 = 100.0;
const SPARK_HEIGHT: f64 = 32.0;

/// Metric tile with value, delta label and sparkline.
pub fn metric_card(metric: &MetricTile) -> String {
    let spark = Sparkline::new(&metric.spark).to_svg(SPARK_WIDTH, SPARK_HEIGHT);
    format!(
        r#"<article class="card metric">
  <header><span class="metric-title">{title}</span><span class="metric-delta">{delta}</span></header>
  <div class="metric-body"><span class="metric-value">{value}</span><div class="metric-spark">{spark}</div></div>
</article>"#,
        title = escape(&metric.title),
        delta = escape(&metric.delta),
        value = escape(&metric.value),
    )
}

/// Sales quote with a sentiment read-out colored by sign.
pub fn quote_card(quote: &SalesQuote) -> String {
    format!(
        r#"<article class="card quote">
  <p>“{text}”</p>
  <p class="sentiment {class}">Sentiment {score}</p>
</article>"#,
        text = escape(&quote.quote),
        class = quote.sentiment.tone().css_class(),
        score = quote.sentiment,
    )
}

/// Free-text insight in the rich-text subset.
pub fn intel_card(insight: &Insight) -> String {
    format!(
        r#"<article class="card intel"><p>{}</p></article>"#,
        rich_text(insight.text())
    )
}

/// Action queue task with its approve button.
pub fn action_card(action: &ActionItem) -> String {
    format!(
        r#"<article class="card action" data-action-id="{id}">
  <p>{task}</p>
  <button type="button" class="approve">Approve</button>
</article>"#,
        id = action.id,
        task = escape(&action.task),
    )
}

/// Scenario builder: two sliders and the live estimate.
///
/// The sliders sit in a GET form so the page still recomputes without
/// script; [`SCENARIO_SCRIPT`] recomputes in place while dragging.
pub fn scenario_panel(state: &ViewState) -> String {
    let input = state.scenario;
    let impact = net_impact(&input);
    format!(
        r#"<article class="card scenario">
  <h3>Scenario Builder</h3>
  <form method="get" action="/" id="scenario-form">
    <input type="hidden" name="tab" value="{tab}">
    <input type="hidden" name="q" value="{search}">
    <label>Revenue change (%)
      <input type="range" name="revenue" id="revenue" min="{rev_min}" max="{rev_max}" step="1" value="{revenue}">
      <span id="revenue-value">{revenue_label}</span>
    </label>
    <label>Interest&#8209;rate change (bps)
      <input type="range" name="interest" id="interest" min="{int_min}" max="{int_max}" step="1" value="{interest}">
      <span id="interest-value">{interest_label}</span>
    </label>
    <noscript><button type="submit">Recalculate</button></noscript>
  </form>
  <p class="estimate">🧮 Estimated PAT impact: <strong id="net-impact">{impact}</strong></p>
</article>
<script>{SCENARIO_SCRIPT}</script>"#,
        tab = IntelTab::ScenarioBuilder.slug(),
        search = escape(&state.search),
        rev_min = RevenueShift::MIN,
        rev_max = RevenueShift::MAX,
        revenue = input.revenue_shift.percent(),
        revenue_label = input.revenue_shift,
        int_min = InterestShift::MIN,
        int_max = InterestShift::MAX,
        interest = input.interest_shift.bps(),
        interest_label = input.interest_shift,
    )
}

/// Recomputes the estimate through the scenario API on every slider move.
pub const SCENARIO_SCRIPT: &str = r#"
(function () {
  const revenue = document.getElementById('revenue');
  const interest = document.getElementById('interest');
  const output = document.getElementById('net-impact');
  async function recompute() {
    document.getElementById('revenue-value').textContent = revenue.value + '%';
    document.getElementById('interest-value').textContent = interest.value + ' bps';
    const params = new URLSearchParams({ revenue: revenue.value, interest: interest.value });
    try {
      const res = await fetch('/api/v1/scenario?' + params);
      if (res.ok) output.textContent = (await res.json()).display;
    } catch (e) { /* keep last estimate */ }
  }
  revenue.addEventListener('input', recompute);
  interest.addEventListener('input', recompute);
})();
"#;
