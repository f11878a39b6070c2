//! Integration tests for the binary codec: round-trips, dispatch, and
//! failure atomicity.

use fer_core::Error;
use fer_model::codec::{MAGIC, TYPE_CONSTANT_DAY};
use fer_model::{
    ComputedHoliday, ConstantDayHoliday, ConstantWeekdayHoliday, EmptyHoliday, Holiday,
    HolidayKind, LeapYearRule, OffsetHoliday, UniqueHoliday,
};
use fer_time::{Date, Month, TickSpan, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// One richly configured holiday per serializable variant.
fn samples() -> Vec<Holiday> {
    let mut constant_day = ConstantDayHoliday::new("Leap Day", Month::February, 29).unwrap();
    constant_day.set_leap_year_rule(LeapYearRule::PreviousDay);
    constant_day.base_mut().set_optional(true);
    constant_day
        .base_mut()
        .set_active_range(Some(1996), None)
        .unwrap();

    let mut constant_weekday =
        ConstantWeekdayHoliday::new("Thanksgiving", Month::November, Weekday::Thursday, 4).unwrap();
    constant_weekday.set_weekday_offset(1);
    constant_weekday
        .base_mut()
        .set_start_time(TickSpan::from_hms(12, 0, 0));

    let easter = ComputedHoliday::easter("Easter");
    let offset = OffsetHoliday::with_anchor(
        "Good Friday",
        Holiday::Computed(easter.clone()),
        -2,
    )
    .unwrap();

    let mut unique = UniqueHoliday::new("Total eclipse", date(2026, 8, 12));
    unique.set_duration(TickSpan::from_hours(6)).unwrap();

    vec![
        Holiday::ConstantDay(constant_day),
        Holiday::ConstantWeekday(constant_weekday),
        Holiday::Computed(easter),
        Holiday::Offset(offset),
        Holiday::Unique(unique),
    ]
}

// ─── Round-trips ──────────────────────────────────────────────────────────────

#[test]
fn every_variant_roundtrips_through_dispatch() {
    for holiday in samples() {
        let bytes = holiday.serialize().unwrap();
        let decoded = Holiday::deserialize_any(&bytes).unwrap();
        assert_eq!(decoded.kind(), holiday.kind());
        assert!(
            holiday.eq_checked(&decoded).unwrap(),
            "round-trip changed {holiday}"
        );
    }
}

#[test]
fn decoded_offset_still_computes() {
    let original = samples().remove(3);
    let decoded = Holiday::deserialize_any(&original.serialize().unwrap()).unwrap();
    // Good Friday 2024 via the decoded copy.
    assert_eq!(decoded.compute(2024).unwrap(), date(2024, 3, 29));
}

#[test]
fn variant_deserializer_replaces_instance() {
    let source = ConstantDayHoliday::new("Christmas", Month::December, 25).unwrap();
    let bytes = source.serialize().unwrap();

    let mut target = ConstantDayHoliday::new("Placeholder", Month::January, 1).unwrap();
    target.deserialize(&bytes).unwrap();
    assert!(Holiday::ConstantDay(target)
        .eq_checked(&Holiday::ConstantDay(source))
        .unwrap());
}

// ─── Failure modes ────────────────────────────────────────────────────────────

#[test]
fn corrupt_magic_rejected_without_mutation() {
    let source = ConstantDayHoliday::new("Christmas", Month::December, 25).unwrap();
    let mut bytes = source.serialize().unwrap();
    bytes[0] ^= 0xFF;

    assert!(matches!(
        Holiday::deserialize_any(&bytes),
        Err(Error::CorruptData(_))
    ));

    let mut target = ConstantDayHoliday::new("Original", Month::May, 1).unwrap();
    let before = Holiday::ConstantDay(target.clone());
    assert!(matches!(
        target.deserialize(&bytes),
        Err(Error::CorruptData(_))
    ));
    // Rollback contract: the failed deserialize left the target untouched.
    assert!(Holiday::ConstantDay(target).eq_checked(&before).unwrap());
}

#[test]
fn unknown_type_identifier_rejected() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC);
    let name = b"feriae.LunarHoliday";
    bytes.extend_from_slice(&(name.len() as u32).to_le_bytes());
    bytes.extend_from_slice(name);

    match Holiday::deserialize_any(&bytes) {
        Err(Error::UnknownType(ty)) => assert_eq!(ty, "feriae.LunarHoliday"),
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn type_mismatch_reported_per_variant() {
    let unique = UniqueHoliday::new("one-off", date(2025, 1, 1));
    let bytes = unique.serialize().unwrap();

    let mut target = ConstantDayHoliday::new("x", Month::May, 1).unwrap();
    match target.deserialize(&bytes) {
        Err(Error::TypeMismatch { expected, found }) => {
            assert_eq!(expected, TYPE_CONSTANT_DAY);
            assert_eq!(found, "feriae.UniqueHoliday");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn truncated_record_rejected() {
    for holiday in samples() {
        let bytes = holiday.serialize().unwrap();
        let truncated = &bytes[..bytes.len() - 1];
        assert!(
            Holiday::deserialize_any(truncated).is_err(),
            "truncated {holiday} accepted"
        );
    }
}

#[test]
fn trailing_bytes_rejected() {
    let mut bytes = samples()[0].serialize().unwrap();
    bytes.push(0);
    assert!(matches!(
        Holiday::deserialize_any(&bytes),
        Err(Error::CorruptData(_))
    ));
}

#[test]
fn rollback_on_semantic_failure() {
    // A structurally sound record whose fields fail validation: weekday
    // index zero inside a serialized constant-weekday holiday.
    let source =
        ConstantWeekdayHoliday::new("May Bank Holiday", Month::May, Weekday::Monday, 1).unwrap();
    let mut bytes = source.serialize().unwrap();
    let index_pos = bytes.len() - 5; // index byte sits before the trailing i32 offset
    bytes[index_pos] = 0;

    let mut target =
        ConstantWeekdayHoliday::new("Original", Month::June, Weekday::Friday, 2).unwrap();
    let before = Holiday::ConstantWeekday(target.clone());
    assert!(matches!(
        target.deserialize(&bytes),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(Holiday::ConstantWeekday(target).eq_checked(&before).unwrap());
}

#[test]
fn placeholder_is_excluded_from_serialization() {
    assert!(Holiday::from(EmptyHoliday).serialize().is_err());
    // An offset holiday with no anchor assigned serializes to nothing either.
    let dangling = OffsetHoliday::new("dangling", 3);
    assert!(matches!(dangling.serialize(), Err(Error::Unassigned)));
}
