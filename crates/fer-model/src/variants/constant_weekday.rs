//! Holiday on the nth (or nth-from-last) weekday of a month.

use fer_core::errors::Result;
use fer_core::ensure;
use fer_time::{Date, Month, Weekday};

use crate::base::HolidayBase;

/// A holiday like "fourth Thursday of November" or "last Monday of May".
///
/// A positive `weekday_index` counts occurrences from the start of the
/// month, a negative one from its end. An additional `weekday_offset` in
/// days is applied afterwards. The result is deliberately never clamped to
/// the month or year: large indexes and offsets spill into adjacent months.
#[derive(Debug, Clone)]
pub struct ConstantWeekdayHoliday {
    base: HolidayBase,
    month: Month,
    weekday: Weekday,
    weekday_index: i8,
    weekday_offset: i32,
}

impl ConstantWeekdayHoliday {
    /// Create an nth-weekday holiday. `weekday_index` must not be zero.
    pub fn new(
        name: impl Into<String>,
        month: Month,
        weekday: Weekday,
        weekday_index: i8,
    ) -> Result<Self> {
        ensure!(weekday_index != 0, "weekday index must not be zero");
        Ok(ConstantWeekdayHoliday {
            base: HolidayBase::new(name),
            month,
            weekday,
            weekday_index,
            weekday_offset: 0,
        })
    }

    pub(crate) fn from_parts(
        base: HolidayBase,
        month: Month,
        weekday: Weekday,
        weekday_index: i8,
        weekday_offset: i32,
    ) -> Result<Self> {
        ensure!(weekday_index != 0, "weekday index must not be zero");
        Ok(ConstantWeekdayHoliday {
            base,
            month,
            weekday,
            weekday_index,
            weekday_offset,
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

    /// The month anchoring the search.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The weekday the holiday falls on (before the day offset).
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Occurrence index; negative counts from the end of the month.
    pub fn weekday_index(&self) -> i8 {
        self.weekday_index
    }

    /// Day offset applied after the weekday search.
    pub fn weekday_offset(&self) -> i32 {
        self.weekday_offset
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Change the month.
    pub fn set_month(&mut self, month: Month) {
        self.month = month;
    }

    /// Change the weekday.
    pub fn set_weekday(&mut self, weekday: Weekday) {
        self.weekday = weekday;
    }

    /// Change the occurrence index. Must not be zero.
    pub fn set_weekday_index(&mut self, index: i8) -> Result<()> {
        ensure!(index != 0, "weekday index must not be zero");
        self.weekday_index = index;
        Ok(())
    }

    /// Change the trailing day offset.
    pub fn set_weekday_offset(&mut self, offset: i32) {
        self.weekday_offset = offset;
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Compute the date for `year`.
    ///
    /// Walks from the first (or, for negative indexes, last) day of the month
    /// to the nearest matching weekday, then jumps whole weeks for the
    /// remaining occurrences, then applies the day offset.
    pub fn compute(&self, year: i32) -> Result<Date> {
        let step: i32 = if self.weekday_index > 0 { 1 } else { -1 };
        let first = Date::from_ymd(year, self.month.number(), 1)?;
        let mut date = if step > 0 { first } else { first.end_of_month() };
        while date.weekday() != self.weekday {
            date = date.add_days(step)?;
        }
        let date = date.add_days(7 * (self.weekday_index as i32 - step))?;
        date.add_days(self.weekday_offset)
    }

    // ── Equality / hashing ────────────────────────────────────────────────────

    pub(crate) fn eq_fields(&self, other: &Self) -> bool {
        self.base.same_as(&other.base)
            && self.month == other.month
            && self.weekday == other.weekday
            && self.weekday_index == other.weekday_index
            && self.weekday_offset == other.weekday_offset
    }

    pub(crate) fn feed_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.base.feed_hash(state);
        self.month.hash(state);
        self.weekday.hash(state);
        self.weekday_index.hash(state);
        self.weekday_offset.hash(state);
    }
}
