//! Content records displayed on the dashboard.
//!
//! - [`MetricTile`]: Daily Pulse metric with a sparkline series
//! - [`Insight`]: Free-text insight or market-intelligence item
//! - [`SalesQuote`]: Field quote carrying a [`Sentiment`] score
//! - [`ActionItem`]: Task awaiting executive approval

mod content;
mod metric;
mod sentiment;

pub use content::{ActionItem, Insight, SalesQuote};
pub use metric::MetricTile;
pub use sentiment::{Sentiment, Tone};
