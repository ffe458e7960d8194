//! Sentiment scores and their display tone.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PulseError, PulseResult};

/// Display tone derived from the sign of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Score >= 0.
    Positive,
    /// Score < 0.
    Negative,
}

impl Tone {
    /// CSS class used when rendering this tone.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }
}

/// A sentiment score in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentiment(Decimal);

impl Sentiment {
    /// Creates a sentiment score, rejecting values outside [-1, 1].
    pub fn new(score: Decimal) -> PulseResult<Self> {
        let sentiment = Self(score);
        sentiment.validate()?;
        Ok(sentiment)
    }

    /// Creates a sentiment score without range checking.
    ///
    /// Used for built-in literals; [`crate::Catalog::validate`] still checks them.
    #[must_use]
    pub const fn from_literal(score: Decimal) -> Self {
        Self(score)
    }

    /// Checks the score lies in [-1, 1].
    pub fn validate(&self) -> PulseResult<()> {
        if self.0 < Decimal::NEGATIVE_ONE || self.0 > Decimal::ONE {
            return Err(PulseError::invalid_sentiment(self.0));
        }
        Ok(())
    }

    /// Returns the raw score.
    #[must_use]
    pub fn score(self) -> Decimal {
        self.0
    }

    /// Returns the display tone. Zero counts as positive.
    #[must_use]
    pub fn tone(self) -> Tone {
        if self.0 >= Decimal::ZERO {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
