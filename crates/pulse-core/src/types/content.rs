//! Text content records.

use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;

/// A narrative insight or market-intelligence item.
///
/// Text may use the dashboard's rich-text subset (`**bold**` and emoji);
/// it is never interpreted as HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insight(String);

impl Insight {
    /// Creates an insight.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// A quote gathered from the sales force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQuote {
    /// Stable identifier.
    pub id: u32,
    /// Quote text.
    pub quote: String,
    /// Sentiment score.
    pub sentiment: Sentiment,
}

/// A task waiting in the action queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Stable identifier.
    pub id: u32,
    /// Task description.
    pub task: String,
}
