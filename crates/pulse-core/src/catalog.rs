//! Built-in dashboard content.
//!
//! Everything the dashboard shows besides the scenario estimate comes from a
//! [`Catalog`]. The catalog is immutable once loaded; [`Catalog::load`]
//! refuses to hand out one whose guarded collections are empty, so the view
//! never renders a partially populated page.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Collection, PulseError, PulseResult};
use crate::types::{ActionItem, Insight, MetricTile, SalesQuote, Sentiment};

/// All static content rendered on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Banner headline.
    pub headline: String,
    /// Daily Pulse (L0) metric tiles.
    pub metrics: Vec<MetricTile>,
    /// GenAI CEO insights.
    pub ceo_insights: Vec<Insight>,
    /// Market intelligence tab entries.
    pub market_intel: Vec<Insight>,
    /// Sales insights tab entries.
    pub sales_quotes: Vec<SalesQuote>,
    /// Action queue tasks.
    pub actions: Vec<ActionItem>,
}

impl Catalog {
    /// Loads the built-in sample content, validated.
    pub fn load() -> PulseResult<Self> {
        Self::builtin().validated()
    }

    /// Validates the catalog and returns it unchanged.
    pub fn validated(self) -> PulseResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Checks the load-time invariants.
    ///
    /// Each guarded collection must be non-empty and every sentiment score
    /// must lie in [-1, 1].
    pub fn validate(&self) -> PulseResult<()> {
        for collection in Collection::ALL {
            if self.len_of(collection) == 0 {
                return Err(PulseError::empty_collection(collection));
            }
        }

        for quote in &self.sales_quotes {
            quote.sentiment.validate()?;
        }

        Ok(())
    }

    /// Returns the number of entries in a guarded collection.
    #[must_use]
    pub fn len_of(&self, collection: Collection) -> usize {
        match collection {
            Collection::CeoInsights => self.ceo_insights.len(),
            Collection::MarketIntel => self.market_intel.len(),
            Collection::SalesQuotes => self.sales_quotes.len(),
            Collection::ActionQueue => self.actions.len(),
        }
    }

    /// The built-in sample content, unvalidated.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            headline: "PAT hits ₹670 Cr (+162 % YoY) – liquidity headroom widens, CASA ratio soft; \
                       GenAI suggests deposit retention action."
                .to_string(),
            metrics: vec![
                MetricTile::new(
                    "CASA Inflow (₹ Cr)",
                    "+94",
                    "+13% vs yesterday",
                    [94.0, 85.0, 88.0, 83.0],
                ),
                MetricTile::new(
                    "Disbursements (₹ Cr)",
                    "212",
                    "+7%",
                    [212.0, 198.0, 205.0, 190.0],
                ),
                MetricTile::new(
                    "Gross NPA (%)",
                    "1.84",
                    "↘ -2 bps",
                    [1.86, 1.85, 1.84, 1.85],
                ),
                MetricTile::new(
                    "Liquidity Coverage (%)",
                    "132",
                    "+4 ppt",
                    [128.0, 126.0, 129.0, 132.0],
                ),
                MetricTile::new(
                    "Digital Txn Success (%)",
                    "99.1",
                    "↗ +0.2%",
                    [98.9, 99.0, 99.05, 99.1],
                ),
            ],
            ceo_insights: vec![
                Insight::new(
                    "Micro‑loan demand spike in Uttar Pradesh → potential ₹150 Cr disbursement in Q2.",
                ),
                Insight::new(
                    "Deposit outflow risk of ₹300 Cr after competitor rate hike; retention campaign suggested.",
                ),
                Insight::new(
                    "Proposed RBI leverage cap could shave 80 bps off ROE by FY‑27; capital buffer plan needed.",
                ),
            ],
            market_intel: vec![
                Insight::new(
                    "🛠️ 15 % tariff on finished solar panels – domestic makers scaling → term‑lending window ₹500 Cr/12 mo.",
                ),
                Insight::new(
                    "🚜 Weak monsoon forecast – agri‑input suppliers likely to need higher working‑capital by Q3.",
                ),
                Insight::new(
                    "🌐 Relaxed fintech IPO norms – advisory pipeline could boost fee income by 8 %.",
                ),
            ],
            sales_quotes: vec![
                quote(
                    1,
                    "Two‑wheeler loan interest surging in tier‑2 cities, EV models driving buzz.",
                    dec!(0.72),
                ),
                quote(
                    2,
                    "MSME clients complain trade‑finance TAT 5 days; risk attrition to fintechs.",
                    dec!(-0.41),
                ),
                quote(
                    3,
                    "WhatsApp onboarding praised; referral intent up 18 % among micro‑loan borrowers.",
                    dec!(0.6),
                ),
            ],
            actions: vec![
                action(1, "Approve 7.9 % limited‑period deposit offer for top‑tier savers"),
                action(2, "Kick‑off capital‑buffer roadmap vs. leverage cap scenario"),
                action(3, "Launch micro‑loan WhatsApp campaign in UP"),
            ],
        }
    }
}

fn quote(id: u32, text: &str, score: Decimal) -> SalesQuote {
    SalesQuote {
        id,
        quote: text.to_string(),
        sentiment: Sentiment::from_literal(score),
    }
}

fn action(id: u32, task: &str) -> ActionItem {
    ActionItem {
        id,
        task: task.to_string(),
    }
}
