//! View error types.

use thiserror::Error;

/// A specialized Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors raised while turning request input into view events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Tab slug does not name an intelligence tab.
    #[error("Unknown tab: {slug}")]
    UnknownTab {
        /// The unrecognized slug.
        slug: String,
    },
}

impl ViewError {
    /// Creates an unknown tab error.
    #[must_use]
    pub fn unknown_tab(slug: impl Into<String>) -> Self {
        Self::UnknownTab { slug: slug.into() }
    }
}
