//! Holiday that falls on the same day and month every year.

use fer_core::errors::{Error, Result};
use fer_core::ensure;
use fer_time::date::{days_in_month, is_leap_year};
use fer_time::{Date, Month};

use crate::base::HolidayBase;

/// What to do when a 29 February holiday is computed for a non-leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LeapYearRule {
    /// Fail: the holiday does not exist in that year.
    #[default]
    Strict = 0,
    /// Fall back to 28 February.
    PreviousDay = 1,
    /// Fall back to 1 March.
    NextDay = 2,
}

impl LeapYearRule {
    /// Decode from the persisted byte.
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(LeapYearRule::Strict),
            1 => Some(LeapYearRule::PreviousDay),
            2 => Some(LeapYearRule::NextDay),
            _ => None,
        }
    }

    /// The persisted byte.
    pub(crate) fn code(&self) -> u8 {
        *self as u8
    }
}

/// A holiday on a fixed day of a fixed month, e.g. 25 December.
///
/// 29 February is the only configuration that does not exist in every year;
/// [`LeapYearRule`] decides how non-leap years are handled.
#[derive(Debug, Clone)]
pub struct ConstantDayHoliday {
    base: HolidayBase,
    month: Month,
    day: u8,
    leap_year_rule: LeapYearRule,
}

impl ConstantDayHoliday {
    /// Create a fixed-date holiday. The day must exist in the month (29 is
    /// accepted for February).
    pub fn new(name: impl Into<String>, month: Month, day: u8) -> Result<Self> {
        validate_day(month, day)?;
        Ok(ConstantDayHoliday {
            base: HolidayBase::new(name),
            month,
            day,
            leap_year_rule: LeapYearRule::default(),
        })
    }

    pub(crate) fn from_parts(
        base: HolidayBase,
        month: Month,
        day: u8,
        leap_year_rule: LeapYearRule,
    ) -> Result<Self> {
        validate_day(month, day)?;
        Ok(ConstantDayHoliday {
            base,
            month,
            day,
            leap_year_rule,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The shared base block.
    pub fn base(&self) -> &HolidayBase {
        &self.base
    }

    /// Mutable access to the shared base block.
    pub fn base_mut(&mut self) -> &mut HolidayBase {
        &mut self.base
    }

    /// The month the holiday falls in.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The non-leap-year policy for 29 February.
    pub fn leap_year_rule(&self) -> LeapYearRule {
        self.leap_year_rule
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Change month and day together, re-validating the combination.
    pub fn set_month_day(&mut self, month: Month, day: u8) -> Result<()> {
        validate_day(month, day)?;
        self.month = month;
        self.day = day;
        Ok(())
    }

    /// Change the non-leap-year policy.
    pub fn set_leap_year_rule(&mut self, rule: LeapYearRule) {
        self.leap_year_rule = rule;
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Compute the date for `year`.
    pub fn compute(&self, year: i32) -> Result<Date> {
        if self.month == Month::February && self.day == 29 && !is_leap_year(year) {
            return match self.leap_year_rule {
                LeapYearRule::Strict => Err(Error::InvalidConfiguration(format!(
                    "29 February does not exist in {year}"
                ))),
                LeapYearRule::PreviousDay => Date::from_ymd(year, 2, 28),
                LeapYearRule::NextDay => Date::from_ymd(year, 3, 1),
            };
        }
        Date::from_ymd(year, self.month.number(), self.day)
    }

    // ── Equality / hashing ────────────────────────────────────────────────────

    pub(crate) fn eq_fields(&self, other: &Self) -> bool {
        self.base.same_as(&other.base)
            && self.month == other.month
            && self.day == other.day
            && self.leap_year_rule == other.leap_year_rule
    }

    pub(crate) fn feed_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.base.feed_hash(state);
        self.month.hash(state);
        self.day.hash(state);
        self.leap_year_rule.hash(state);
    }
}

/// The day must exist in the month in at least one year, so February
/// accepts 29 (a leap reference year is used for the upper bound).
fn validate_day(month: Month, day: u8) -> Result<()> {
    let max = days_in_month(2000, month.number());
    ensure!(
        day >= 1 && day <= max,
        "day {day} out of range [1, {max}] for {month}"
    );
    Ok(())
}
