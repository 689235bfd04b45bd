//! Property tests for periods, collections and duration ordering
//!
//! Durations are generated well past the range of a calendar date so the
//! ordering is exercised on both sides of it.

use conditional_core::*;
use proptest::prelude::*;
use std::cmp::Ordering;

// =============================================================================
// Strategies
// =============================================================================

fn interval() -> impl Strategy<Value = Interval> {
    (
        0u32..1_000_000,
        0u32..100_000,
        0u32..10_000_000,
        0u32..1_000_000,
        0u32..1_000_000,
        0u32..1_000_000,
    )
        .prop_map(|(years, months, days, hours, minutes, seconds)| {
            Interval::new(years, months, days, hours, minutes, seconds)
        })
}

/// Mostly small calendar lengths, sometimes hundreds of millennia
fn mixed_interval() -> impl Strategy<Value = Interval> {
    prop_oneof![
        3 => (0u32..5, 0u32..24, 0u32..400, 0u32..48).prop_map(|(years, months, days, hours)| {
            Interval::new(years, months, days, hours, 0, 0)
        }),
        1 => interval(),
    ]
}

fn category_period() -> impl Strategy<Value = ConditionalPeriod> {
    (1i64..1_000_000, 0i64..1_000_000, any::<bool>(), interval()).prop_map(
        |(lower, span, unbounded, result)| {
            let upper = if unbounded { 0 } else { lower + span };
            ConditionalPeriod::new(ConditionalType::Category, lower, upper, result).unwrap()
        },
    )
}

fn duration_period() -> impl Strategy<Value = ConditionalPeriod> {
    (mixed_interval(), mixed_interval(), interval()).prop_filter_map(
        "upper below lower",
        |(lower, upper, result)| ConditionalPeriod::new(ConditionalType::Duration, lower, upper, result).ok(),
    )
}

// =============================================================================
// Period Properties
// =============================================================================

proptest! {
    #[test]
    fn category_period_string_round_trips(period in category_period()) {
        let parsed = ConditionalPeriod::parse(&period.to_string()).unwrap();
        prop_assert_eq!(&parsed, &period);
        prop_assert_eq!(parsed.to_string(), period.to_string());
    }

    #[test]
    fn duration_period_string_round_trips(period in duration_period()) {
        let parsed = ConditionalPeriod::parse(&period.to_string()).unwrap();
        prop_assert_eq!(&parsed, &period);
        prop_assert_eq!(parsed.to_string(), period.to_string());
    }

    #[test]
    fn category_bounds_hold(lower in -10i64..1_000, upper in -10i64..1_000) {
        match ConditionalPeriod::new(ConditionalType::Category, lower, upper, "P1D") {
            Ok(period) => {
                let lower = period.lower().as_category().unwrap();
                let upper = period.upper().as_category().unwrap();
                prop_assert!(lower >= 1);
                prop_assert!(upper == 0 || upper >= lower);
            }
            Err(PeriodError::InvalidLowerBound(_)) => prop_assert!(lower < 1),
            Err(PeriodError::InvalidUpperBound(_)) => prop_assert!(lower >= 1 && upper < 0),
            Err(PeriodError::InvalidBoundOrder { .. }) => prop_assert!(upper > 0 && upper < lower),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn duration_bounds_hold(lower in mixed_interval(), upper in mixed_interval()) {
        match ConditionalPeriod::new(ConditionalType::Duration, lower, upper, "P1D") {
            Ok(_) => prop_assert!(upper.is_zero() || upper.compare(&lower) != Ordering::Less),
            Err(PeriodError::InvalidBoundOrder { .. }) => {
                prop_assert!(!upper.is_zero());
                prop_assert_eq!(upper.compare(&lower), Ordering::Less);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn duration_period_matches_its_own_bounds(period in duration_period()) {
        let lower = period.lower().as_interval().unwrap();
        let upper = period.upper().as_interval().unwrap();
        if !upper.is_zero() {
            prop_assert!(period.matches(lower).unwrap());
            prop_assert!(period.matches(upper).unwrap());
        }
    }
}

// =============================================================================
// Duration Ordering Properties
// =============================================================================

proptest! {
    #[test]
    fn interval_spec_round_trips(interval in interval()) {
        prop_assert_eq!(Interval::make(&interval.spec()).unwrap(), interval);
    }

    #[test]
    fn interval_compare_is_antisymmetric(a in mixed_interval(), b in mixed_interval()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn interval_compare_is_transitive(a in mixed_interval(), b in mixed_interval(), c in mixed_interval()) {
        let mut sorted = [a, b, c];
        sorted.sort_by(|x, y| x.compare(y));
        prop_assert_ne!(sorted[0].compare(&sorted[1]), Ordering::Greater);
        prop_assert_ne!(sorted[1].compare(&sorted[2]), Ordering::Greater);
        prop_assert_ne!(sorted[0].compare(&sorted[2]), Ordering::Greater);
    }

    #[test]
    fn longer_interval_compares_greater(base in interval(), extra in 1u32..1_000) {
        let longer_days = Interval::new(
            base.years(),
            base.months(),
            base.days() + extra,
            base.hours(),
            base.minutes(),
            base.seconds(),
        );
        let longer_years = Interval::new(
            base.years() + extra,
            base.months(),
            base.days(),
            base.hours(),
            base.minutes(),
            base.seconds(),
        );
        prop_assert_eq!(base.compare(&longer_days), Ordering::Less);
        prop_assert_eq!(base.compare(&longer_years), Ordering::Less);
    }
}

// =============================================================================
// Collection Properties
// =============================================================================

proptest! {
    #[test]
    fn category_collection_string_round_trips(periods in prop::collection::vec(category_period(), 0..8)) {
        let collection = ConditionalCollection::from_array(periods).unwrap();
        let parsed = ConditionalCollection::parse(&collection.to_string()).unwrap();
        prop_assert_eq!(parsed, collection);
    }

    #[test]
    fn duration_collection_string_round_trips(periods in prop::collection::vec(duration_period(), 0..8)) {
        let collection = ConditionalCollection::from_array(periods).unwrap();
        let parsed = ConditionalCollection::parse(&collection.to_string()).unwrap();
        prop_assert_eq!(parsed, collection);
    }

    #[test]
    fn find_returns_first_matching_period(
        periods in prop::collection::vec(category_period(), 1..8),
        value in 1i64..2_000_000,
    ) {
        let collection = ConditionalCollection::from_array(periods).unwrap();
        let expected = collection.iter().find(|period| period.matches(value).unwrap());
        prop_assert_eq!(collection.find(value).unwrap(), expected);
    }
}
