//! Property tests for the scenario impact calculator.

use proptest::prelude::*;
use pulse_core::prelude::*;
use rust_decimal::Decimal;

/// Reference formula in floating point. Every intermediate value is a
/// multiple of 0.5, so f64 is exact and `round` breaks ties away from zero.
fn reference(revenue: i32, interest: i32) -> i64 {
    (f64::from(revenue) * -20.0 + f64::from(interest) * -0.5).round() as i64
}

proptest! {
    #[test]
    fn matches_reference_over_valid_domain(revenue in -20i32..=20, interest in -100i32..=100) {
        let impact = net_impact(&ScenarioInput::new(revenue, interest));
        prop_assert_eq!(impact.crore(), Decimal::from(reference(revenue, interest)));
    }

    #[test]
    fn result_is_whole_crore(revenue in -20i32..=20, interest in -100i32..=100) {
        let impact = net_impact(&ScenarioInput::new(revenue, interest));
        prop_assert_eq!(impact.crore().scale(), 0);
    }

    #[test]
    fn out_of_range_inputs_behave_like_slider_stops(revenue in any::<i32>(), interest in any::<i32>()) {
        let input = ScenarioInput::new(revenue, interest);
        prop_assert!((RevenueShift::MIN..=RevenueShift::MAX).contains(&input.revenue_shift.percent()));
        prop_assert!((InterestShift::MIN..=InterestShift::MAX).contains(&input.interest_shift.bps()));

        let pinned = ScenarioInput::new(
            revenue.clamp(RevenueShift::MIN, RevenueShift::MAX),
            interest.clamp(InterestShift::MIN, InterestShift::MAX),
        );
        prop_assert_eq!(net_impact(&input), net_impact(&pinned));
    }

    #[test]
    fn higher_revenue_never_raises_impact(revenue in -20i32..20, interest in -100i32..=100) {
        let lower = net_impact(&ScenarioInput::new(revenue, interest));
        let higher = net_impact(&ScenarioInput::new(revenue + 1, interest));
        prop_assert!(higher < lower);
    }
}

#[test]
fn documented_cases() {
    let cases = [((-5, 50), 75), ((0, 0), 0), ((20, -100), -350)];
    for ((revenue, interest), expected) in cases {
        let impact = net_impact(&ScenarioInput::new(revenue, interest));
        assert_eq!(impact.crore(), Decimal::from(expected), "({revenue}, {interest})");
    }
}
