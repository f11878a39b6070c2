//! One-off holiday on a single absolute date.

use fer_core::errors::{Error, Result};
use fer_time::{Date, TickSpan};

use crate::base::HolidayBase;

/// A holiday that happened (or happens) exactly once, on a fixed date.
///
/// Setting the date pins both active-year bounds to the date's year; the
/// bounds cannot be edited any other way, which is why this variant exposes
/// individual base-block setters instead of mutable base access.
#[derive(Debug, Clone)]
pub struct UniqueHoliday {
    base: HolidayBase,
    date: Date,
}

impl UniqueHoliday {
    /// Create a one-off holiday on `date`.
    pub fn new(name: impl Into<String>, date: Date) -> Self {
        let mut base = HolidayBase::new(name);
        base.pin_active_year(date.year());
        UniqueHoliday { base, date }
    }

    pub(crate) fn from_parts(base: HolidayBase, date: Date) -> Result<Self> {
        if base.active_from_year() != Some(date.year())
            || base.active_to_year() != Some(date.year())
        {
            return Err(Error::InvalidConfiguration(format!(
                "active range must equal the holiday year {}",
                date.year()
            )));
        }
        Ok(UniqueHoliday { base, date })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The shared base block.
    pub fn base(&self) -> &HolidayBase {
        &self.base
    }

    /// The absolute date.
    pub fn date(&self) -> Date {
        self.date
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Change the date, re-pinning the active-year bounds to its year.
    pub fn set_date(&mut self, date: Date) {
        self.date = date;
        self.base.pin_active_year(date.year());
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.base.set_name(name);
    }

    /// Set the optional annotation.
    pub fn set_optional(&mut self, optional: bool) {
        self.base.set_optional(optional);
    }

    /// Set the start time.
    pub fn set_start_time(&mut self, start_time: TickSpan) {
        self.base.set_start_time(start_time);
    }

    /// Set the duration. Must not be negative.
    pub fn set_duration(&mut self, duration: TickSpan) -> Result<()> {
        self.base.set_duration(duration)
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Return the stored date when `year` matches its year, otherwise fail
    /// with [`Error::WrongYear`].
    pub fn compute(&self, year: i32) -> Result<Date> {
        let expected = self.date.year();
        if year != expected {
            return Err(Error::WrongYear {
                requested: year,
                expected,
            });
        }
        Ok(self.date)
    }

    // ── Equality / hashing ────────────────────────────────────────────────────

    pub(crate) fn eq_fields(&self, other: &Self) -> bool {
        self.base.same_as(&other.base) && self.date == other.date
    }

    pub(crate) fn feed_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.base.feed_hash(state);
        self.date.hash(state);
    }
}
