//! Scenario impact calculator.
//!
//! Maps a revenue shift (percent) and an interest-rate shift (basis points)
//! to an estimated PAT impact in crore rupees:
//!
//! ```text
//! net_impact = round(revenue_shift * -20 + interest_shift * -0.5)
//! ```
//!
//! Inputs are bounded newtypes that clamp on construction, the way a range
//! control pins its thumb at either stop. The calculator itself never fails.
//!
//! # Example
//!
//! ```rust
//! use pulse_core::scenario::{net_impact, ScenarioInput};
//! use rust_decimal_macros::dec;
//!
//! let input = ScenarioInput::default();
//! assert_eq!(net_impact(&input).crore(), dec!(75));
//! ```

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Crore impact per percentage point of revenue shift.
const REVENUE_COEFFICIENT: Decimal = dec!(-20);

/// Crore impact per basis point of interest-rate shift.
const INTEREST_COEFFICIENT: Decimal = dec!(-0.5);

/// Revenue change in whole percent, bounded to [-20, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct RevenueShift(i32);

impl RevenueShift {
    /// Lowest selectable shift.
    pub const MIN: i32 = -20;
    /// Highest selectable shift.
    pub const MAX: i32 = 20;
    /// Shift selected on load.
    pub const DEFAULT: RevenueShift = RevenueShift(-5);

    /// Creates a shift, pinning `percent` into [`Self::MIN`, `Self::MAX`].
    #[must_use]
    pub fn clamped(percent: i32) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the shift in percent.
    #[must_use]
    pub fn percent(self) -> i32 {
        self.0
    }
}

impl Default for RevenueShift {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for RevenueShift {
    fn from(percent: i32) -> Self {
        Self::clamped(percent)
    }
}

impl From<RevenueShift> for i32 {
    fn from(shift: RevenueShift) -> Self {
        shift.0
    }
}

impl fmt::Display for RevenueShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Interest-rate change in basis points, bounded to [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct InterestShift(i32);

impl InterestShift {
    /// Lowest selectable shift.
    pub const MIN: i32 = -100;
    /// Highest selectable shift.
    pub const MAX: i32 = 100;
    /// Shift selected on load.
    pub const DEFAULT: InterestShift = InterestShift(50);

    /// Creates a shift, pinning `bps` into [`Self::MIN`, `Self::MAX`].
    #[must_use]
    pub fn clamped(bps: i32) -> Self {
        Self(bps.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn bps(self) -> i32 {
        self.0
    }
}

impl Default for InterestShift {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for InterestShift {
    fn from(bps: i32) -> Self {
        Self::clamped(bps)
    }
}

impl From<InterestShift> for i32 {
    fn from(shift: InterestShift) -> Self {
        shift.0
    }
}

impl fmt::Display for InterestShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

/// The two slider positions of the scenario builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Revenue change (%).
    pub revenue_shift: RevenueShift,
    /// Interest-rate change (bps).
    pub interest_shift: InterestShift,
}

impl ScenarioInput {
    /// Creates an input from raw slider values, clamping both.
    #[must_use]
    pub fn new(revenue_percent: i32, interest_bps: i32) -> Self {
        Self {
            revenue_shift: RevenueShift::clamped(revenue_percent),
            interest_shift: InterestShift::clamped(interest_bps),
        }
    }

    /// Returns the input with the revenue slider moved to `percent`.
    #[must_use]
    pub fn with_revenue_shift(self, percent: i32) -> Self {
        Self {
            revenue_shift: RevenueShift::clamped(percent),
            ..self
        }
    }

    /// Returns the input with the interest slider moved to `bps`.
    #[must_use]
    pub fn with_interest_shift(self, bps: i32) -> Self {
        Self {
            interest_shift: InterestShift::clamped(bps),
            ..self
        }
    }
}

/// Estimated PAT impact, in whole crore rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NetImpact(Decimal);

impl NetImpact {
    /// Returns the estimate in crore rupees.
    #[must_use]
    pub fn crore(self) -> Decimal {
        self.0
    }

    /// Returns true if the scenario erodes profit.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for NetImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{} Cr", self.0)
    }
}

/// Computes the estimated PAT impact of a scenario.
///
/// Exact halves (odd basis-point shifts) round away from zero.
#[must_use]
pub fn net_impact(input: &ScenarioInput) -> NetImpact {
    let raw = Decimal::from(input.revenue_shift.percent()) * REVENUE_COEFFICIENT
        + Decimal::from(input.interest_shift.bps()) * INTEREST_COEFFICIENT;

    NetImpact(
        raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let input = ScenarioInput::default();
        assert_eq!(input.revenue_shift.percent(), -5);
        assert_eq!(input.interest_shift.bps(), 50);
        assert_eq!(net_impact(&input).crore(), dec!(75));
    }

    #[test]
    fn test_neutral_scenario() {
        let impact = net_impact(&ScenarioInput::new(0, 0));
        assert_eq!(impact.crore(), Decimal::ZERO);
        assert!(!impact.is_negative());
        assert_eq!(impact.to_string(), "₹0 Cr");
    }

    #[test]
    fn test_extreme_scenario() {
        let impact = net_impact(&ScenarioInput::new(20, -100));
        assert_eq!(impact.crore(), dec!(-350));
        assert!(impact.is_negative());
        assert_eq!(impact.to_string(), "₹-350 Cr");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(net_impact(&ScenarioInput::new(0, 1)).crore(), dec!(-1));
        assert_eq!(net_impact(&ScenarioInput::new(0, -1)).crore(), dec!(1));
        assert_eq!(net_impact(&ScenarioInput::new(1, 3)).crore(), dec!(-22));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(RevenueShift::clamped(99).percent(), 20);
        assert_eq!(RevenueShift::clamped(-21).percent(), -20);
        assert_eq!(InterestShift::clamped(-500).bps(), -100);
        assert_eq!(InterestShift::clamped(7).bps(), 7);
    }

    #[test]
    fn test_slider_moves() {
        let input = ScenarioInput::default()
            .with_revenue_shift(10)
            .with_interest_shift(250);
        assert_eq!(input, ScenarioInput::new(10, 100));
        assert_eq!(net_impact(&input).crore(), dec!(-250));
    }

    #[test]
    fn test_display() {
        assert_eq!(RevenueShift::clamped(-5).to_string(), "-5%");
        assert_eq!(InterestShift::clamped(50).to_string(), "50 bps");
        assert_eq!(net_impact(&ScenarioInput::default()).to_string(), "₹75 Cr");
    }

    #[test]
    fn test_deserialize_clamps() {
        let input: ScenarioInput =
            serde_json::from_str(r#"{"revenue_shift": 40, "interest_shift": -300}"#).unwrap();
        assert_eq!(input, ScenarioInput::new(20, -100));
    }
}
