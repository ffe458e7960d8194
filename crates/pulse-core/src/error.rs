//! Error types for the Pulse dashboard.
//!
//! The scenario calculator is total over its clamped domain, so the only
//! failures here are content faults detected while the catalog loads.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for Pulse operations.
pub type PulseResult<T> = Result<T, PulseError>;

/// The content collections that must be non-empty before the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// GenAI CEO insights.
    CeoInsights,
    /// Market intelligence tab.
    MarketIntel,
    /// Sales insights tab.
    SalesQuotes,
    /// Action queue.
    ActionQueue,
}

impl Collection {
    /// All guarded collections, in page order.
    pub const ALL: [Collection; 4] = [
        Collection::CeoInsights,
        Collection::MarketIntel,
        Collection::SalesQuotes,
        Collection::ActionQueue,
    ];
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::CeoInsights => "CEO insights",
            Collection::MarketIntel => "market intelligence",
            Collection::SalesQuotes => "sales insights",
            Collection::ActionQueue => "action queue",
        };
        write!(f, "{name}")
    }
}

/// The main error type for Pulse operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PulseError {
    /// A guarded content collection has no entries.
    #[error("Content collection is empty: {collection}")]
    EmptyCollection {
        /// The offending collection.
        collection: Collection,
    },

    /// A sentiment score lies outside [-1, 1].
    #[error("Invalid sentiment: {value} - must be within [-1, 1]")]
    InvalidSentiment {
        /// The out-of-range score.
        value: Decimal,
    },
}

impl PulseError {
    /// Creates an empty collection error.
    #[must_use]
    pub fn empty_collection(collection: Collection) -> Self {
        Self::EmptyCollection { collection }
    }

    /// Creates an invalid sentiment error.
    #[must_use]
    pub fn invalid_sentiment(value: Decimal) -> Self {
        Self::InvalidSentiment { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = PulseError::empty_collection(Collection::ActionQueue);
        assert_eq!(err.to_string(), "Content collection is empty: action queue");
    }

    #[test]
    fn test_sentiment_error() {
        let err = PulseError::invalid_sentiment(dec!(1.5));
        assert!(err.to_string().contains("1.5"));
    }
}
