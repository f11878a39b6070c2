//! Integration tests across the holiday variants.

use fer_core::Error;
use fer_model::{
    ChainConfig, ComputedHoliday, ConstantDayHoliday, ConstantWeekdayHoliday, EmptyHoliday,
    Holiday, LeapYearRule, OffsetHoliday, UniqueHoliday,
};
use fer_time::{Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn christmas() -> Holiday {
    Holiday::from(ConstantDayHoliday::new("Christmas", Month::December, 25).unwrap())
}

/// A chain of `n` offset holidays rooted at Christmas, each shifting by
/// `step` days.
fn chain(n: usize, step: i32) -> Holiday {
    let mut holiday = OffsetHoliday::with_anchor("link 1", christmas(), step).unwrap();
    for i in 2..=n {
        holiday =
            OffsetHoliday::with_anchor(format!("link {i}"), Holiday::Offset(holiday), step).unwrap();
    }
    Holiday::Offset(holiday)
}

// ─── Constant day ─────────────────────────────────────────────────────────────

#[test]
fn constant_day_is_year_independent() {
    let h = christmas();
    for year in [1583, 1900, 2024, 2100, 9999] {
        assert_eq!(h.compute(year).unwrap().ymd(), (year, 12, 25));
    }
}

#[test]
fn leap_day_policies() {
    let mut h = ConstantDayHoliday::new("Leap Day", Month::February, 29).unwrap();

    h.set_leap_year_rule(LeapYearRule::PreviousDay);
    assert_eq!(h.compute(2023).unwrap(), date(2023, 2, 28));

    h.set_leap_year_rule(LeapYearRule::NextDay);
    assert_eq!(h.compute(2023).unwrap(), date(2023, 3, 1));

    h.set_leap_year_rule(LeapYearRule::Strict);
    assert!(matches!(
        h.compute(2023),
        Err(Error::InvalidConfiguration(_))
    ));
    // Leap years are unaffected by the rule.
    assert_eq!(h.compute(2024).unwrap(), date(2024, 2, 29));
}

// ─── Constant weekday ─────────────────────────────────────────────────────────

#[test]
fn nth_weekday_reference_dates() {
    let first_monday =
        ConstantWeekdayHoliday::new("x", Month::January, Weekday::Monday, 1).unwrap();
    assert_eq!(first_monday.compute(2024).unwrap(), date(2024, 1, 1));

    let last_monday =
        ConstantWeekdayHoliday::new("x", Month::January, Weekday::Monday, -1).unwrap();
    assert_eq!(last_monday.compute(2024).unwrap(), date(2024, 1, 29));

    // Midsummer-style rule: Friday between 19 and 25 June (third Friday
    // after 18 June would differ; this is the 2024 check for index 3).
    let third_friday = ConstantWeekdayHoliday::new("x", Month::June, Weekday::Friday, 3).unwrap();
    assert_eq!(third_friday.compute(2024).unwrap(), date(2024, 6, 21));
}

#[test]
fn second_to_last_sunday() {
    let h = ConstantWeekdayHoliday::new("x", Month::October, Weekday::Sunday, -2).unwrap();
    // Sundays in October 2024: 6, 13, 20, 27.
    assert_eq!(h.compute(2024).unwrap(), date(2024, 10, 20));
}

// ─── Offset chains ────────────────────────────────────────────────────────────

#[test]
fn offset_chain_sum_matches_direct_offset() {
    let direct = OffsetHoliday::with_anchor("direct", christmas(), -2).unwrap();
    let mut link = OffsetHoliday::with_anchor("a", christmas(), 1).unwrap();
    link = OffsetHoliday::with_anchor("b", Holiday::Offset(link), -3).unwrap();
    assert_eq!(
        Holiday::Offset(link).compute(2024).unwrap(),
        Holiday::Offset(direct).compute(2024).unwrap()
    );
}

#[test]
fn chain_at_limit_computes_beyond_limit_fails() {
    let at_limit = chain(10, 1);
    assert_eq!(at_limit.compute(2024).unwrap(), date(2025, 1, 4));

    let beyond = chain(11, 1);
    for result in [
        beyond.compute(2024).map(|_| ()),
        beyond.eq_checked(&beyond.clone()).map(|_| ()),
        beyond.hash_checked().map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(Error::RecursionLimitExceeded { limit: 10 })
        ));
    }
}

#[test]
fn custom_chain_config_applies_to_all_guarded_operations() {
    let two = chain(2, 1);
    let tight = ChainConfig::new(1);
    assert!(matches!(
        two.compute_with(2024, tight),
        Err(Error::RecursionLimitExceeded { limit: 1 })
    ));
    assert!(two.eq_with(&two.clone(), tight).is_err());
    assert!(two.hash_with(tight).is_err());
    assert!(two.compute_with(2024, ChainConfig::new(2)).is_ok());
}

#[test]
fn unassigned_offset_reports_unassigned() {
    let h = Holiday::Offset(OffsetHoliday::new("dangling", 5));
    assert!(matches!(h.compute(2024), Err(Error::Unassigned)));
}

// ─── Computed (Easter) ────────────────────────────────────────────────────────

#[test]
fn easter_published_reference_dates() {
    let easter = Holiday::from(ComputedHoliday::easter("Easter"));
    assert_eq!(easter.compute(2024).unwrap(), date(2024, 3, 31));
    assert_eq!(easter.compute(2025).unwrap(), date(2025, 4, 20));
}

#[test]
fn good_friday_via_offset_from_easter() {
    let easter = Holiday::from(ComputedHoliday::easter("Easter"));
    let good_friday = OffsetHoliday::with_anchor("Good Friday", easter, -2).unwrap();
    assert_eq!(
        Holiday::Offset(good_friday).compute(2024).unwrap(),
        date(2024, 3, 29)
    );
}

// ─── Unique ───────────────────────────────────────────────────────────────────

#[test]
fn unique_computes_only_its_year() {
    let h = Holiday::from(UniqueHoliday::new("one-off", date(2025, 12, 25)));
    assert_eq!(h.compute(2025).unwrap(), date(2025, 12, 25));
    assert!(matches!(
        h.compute(2026),
        Err(Error::WrongYear {
            requested: 2026,
            expected: 2025
        })
    ));
}

// ─── Placeholder ──────────────────────────────────────────────────────────────

#[test]
fn placeholder_never_computes() {
    let h = Holiday::from(EmptyHoliday);
    assert!(matches!(h.compute(2024), Err(Error::NotComputable)));
}

// ─── Ranges ───────────────────────────────────────────────────────────────────

#[test]
fn range_is_ascending() {
    let h = christmas();
    let dates: Vec<_> = h
        .compute_range(2020, 2024)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(dates.len(), 5);
    for pair in dates.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(dates[0], date(2020, 12, 25));
    assert_eq!(dates[4], date(2024, 12, 25));
}

// ─── Property tests ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn chain_sum_law(offsets in proptest::collection::vec(-30i32..=30, 1..=10), year in 1990i32..=2100) {
        let root_date = christmas().compute(year).unwrap();
        let total: i32 = offsets.iter().sum();

        let mut holiday = OffsetHoliday::with_anchor("link", christmas(), offsets[0]).unwrap();
        for &offset in &offsets[1..] {
            holiday = OffsetHoliday::with_anchor("link", Holiday::Offset(holiday), offset).unwrap();
        }
        let computed = Holiday::Offset(holiday).compute(year).unwrap();
        prop_assert_eq!(computed, root_date.add_days(total).unwrap());
    }

    #[test]
    fn nth_weekday_lands_on_requested_weekday(
        month in 1u8..=12,
        weekday in 1u8..=7,
        index in prop_oneof![-4i8..=-1, 1i8..=4],
        year in 1990i32..=2100,
    ) {
        let h = ConstantWeekdayHoliday::new(
            "x",
            Month::from_number(month).unwrap(),
            Weekday::from_ordinal(weekday).unwrap(),
            index,
        ).unwrap();
        let result = h.compute(year).unwrap();
        prop_assert_eq!(result.weekday().ordinal(), weekday);
    }
}
