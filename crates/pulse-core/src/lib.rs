//! # Pulse Core
//!
//! Domain types and the one piece of arithmetic behind the Pulse executive
//! dashboard.
//!
//! - **Scenario**: bounded slider inputs and the PAT impact estimate
//! - **Types**: metric tiles, insights, sales quotes, action items
//! - **Catalog**: the built-in sample content and its load-time checks
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let catalog = Catalog::load().expect("built-in content is valid");
//! assert!(!catalog.actions.is_empty());
//!
//! let input = ScenarioInput::new(20, -100);
//! assert_eq!(net_impact(&input).crore(), dec!(-350));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod error;
pub mod scenario;
pub mod types;

pub use catalog::Catalog;
pub use error::{Collection, PulseError, PulseResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{Collection, PulseError, PulseResult};
    pub use crate::scenario::{net_impact, InterestShift, NetImpact, RevenueShift, ScenarioInput};
    pub use crate::types::{ActionItem, Insight, MetricTile, SalesQuote, Sentiment, Tone};
}
