//! # Pulse View
//!
//! View state and server-side HTML rendering for the Pulse dashboard.
//!
//! A [`DashboardView`] borrows the immutable [`pulse_core::Catalog`] and owns
//! the interactive [`ViewState`]. User interactions arrive as [`ViewEvent`]s,
//! are applied synchronously, and the page is re-rendered from scratch.
//!
//! ```rust
//! use pulse_core::Catalog;
//! use pulse_view::{DashboardView, IntelTab, ViewEvent};
//!
//! let catalog = Catalog::load().expect("built-in content is valid");
//! let mut view = DashboardView::new(&catalog);
//! view.apply(ViewEvent::SelectTab(IntelTab::ScenarioBuilder));
//! view.apply(ViewEvent::SetRevenueShift(20));
//! view.apply(ViewEvent::SetInterestShift(-100));
//!
//! assert!(view.render().contains("₹-350 Cr"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cards;
pub mod error;
pub mod markup;
pub mod page;
pub mod sparkline;
pub mod state;

pub use error::{ViewError, ViewResult};
pub use state::{DashboardView, IntelTab, ViewEvent, ViewState};
