//! Holiday at a day offset from another holiday.

use fer_core::errors::{Error, Result};
use fer_core::ensure;
use fer_time::Date;

use crate::base::HolidayBase;
use crate::chain::ChainConfig;
use crate::holiday::Holiday;

/// A holiday defined relative to an anchor holiday, e.g. "the day after
/// Thanksgiving" or "46 days before Easter".
///
/// The anchor is exclusively owned. It may itself be an offset holiday,
/// forming a chain; every chain-walking operation first checks the chain
/// against a [`ChainConfig`] depth limit.
#[derive(Debug, Clone)]
pub struct OffsetHoliday {
    base: HolidayBase,
    anchor: Box<Holiday>,
    offset_days: i32,
}

impl OffsetHoliday {
    /// Create an offset holiday with no anchor assigned yet.
    pub fn new(name: impl Into<String>, offset_days: i32) -> Self {
        OffsetHoliday {
            base: HolidayBase::new(name),
            anchor: Box::new(Holiday::Empty(crate::variants::empty::EmptyHoliday)),
            offset_days,
        }
    }

    /// Create an offset holiday anchored to `anchor`.
    pub fn with_anchor(name: impl Into<String>, anchor: Holiday, offset_days: i32) -> Result<Self> {
        let mut holiday = OffsetHoliday::new(name, offset_days);
        holiday.set_anchor(anchor)?;
        Ok(holiday)
    }

    pub(crate) fn from_parts(base: HolidayBase, anchor: Holiday, offset_days: i32) -> Result<Self> {
        ensure!(
            !matches!(anchor, Holiday::Empty(_)),
            "the placeholder cannot be an anchor"
        );
        Ok(OffsetHoliday {
            base,
            anchor: Box::new(anchor),
            offset_days,
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

    /// The anchor holiday (the placeholder until one is assigned).
    pub fn anchor(&self) -> &Holiday {
        &self.anchor
    }

    /// Whether a real anchor has been assigned.
    pub fn is_assigned(&self) -> bool {
        !matches!(*self.anchor, Holiday::Empty(_))
    }

    /// The day offset applied to the anchor's date.
    pub fn offset_days(&self) -> i32 {
        self.offset_days
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Assign the anchor holiday. The placeholder itself is not assignable.
    pub fn set_anchor(&mut self, anchor: Holiday) -> Result<()> {
        ensure!(
            !matches!(anchor, Holiday::Empty(_)),
            "the placeholder cannot be an anchor"
        );
        self.anchor = Box::new(anchor);
        Ok(())
    }

    /// Change the day offset.
    pub fn set_offset_days(&mut self, offset_days: i32) {
        self.offset_days = offset_days;
    }

    // ── Chain guard ───────────────────────────────────────────────────────────

    /// Walk the anchor chain and fail if it holds more offset holidays than
    /// the configured limit allows. Runs before compute, checked equality,
    /// checked hashing, and after deserialization.
    pub(crate) fn check_chain(&self, config: ChainConfig) -> Result<()> {
        let mut depth: u32 = 0;
        let mut current = self;
        loop {
            depth += 1;
            if depth > config.limit() {
                log::trace!("offset chain exceeds limit {}", config.limit());
                return Err(Error::RecursionLimitExceeded {
                    limit: config.limit(),
                });
            }
            match current.anchor.as_ref() {
                Holiday::Offset(next) => current = next,
                _ => return Ok(()),
            }
        }
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Compute the date for `year` with an explicit chain configuration.
    pub fn compute_with(&self, year: i32, config: ChainConfig) -> Result<Date> {
        self.check_chain(config)?;
        self.resolve(year)
    }

    /// Resolve the whole chain: the root anchor's date plus every offset
    /// along the way. Inner offset holidays join this resolution directly
    /// rather than starting a fresh guarded computation.
    fn resolve(&self, year: i32) -> Result<Date> {
        let anchor_date = match self.anchor.as_ref() {
            Holiday::Empty(_) => return Err(Error::Unassigned),
            Holiday::Offset(inner) => inner.resolve(year)?,
            other => other.compute(year)?,
        };
        anchor_date.add_days(self.offset_days)
    }

    // ── Equality / hashing ────────────────────────────────────────────────────

    pub(crate) fn eq_fields(&self, other: &Self) -> bool {
        self.base.same_as(&other.base)
            && self.offset_days == other.offset_days
            && self.anchor.eq_unguarded(&other.anchor)
    }

    pub(crate) fn feed_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.base.feed_hash(state);
        self.offset_days.hash(state);
        self.anchor.feed_hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::constant_day::ConstantDayHoliday;
    use fer_time::Month;

    fn christmas() -> Holiday {
        Holiday::ConstantDay(ConstantDayHoliday::new("Christmas", Month::December, 25).unwrap())
    }

    #[test]
    fn unassigned_anchor_fails() {
        let h = OffsetHoliday::new("Boxing Day", 1);
        assert!(!h.is_assigned());
        assert!(matches!(
            h.compute_with(2024, ChainConfig::default()),
            Err(Error::Unassigned)
        ));
    }

    #[test]
    fn single_offset() {
        let h = OffsetHoliday::with_anchor("Boxing Day", christmas(), 1).unwrap();
        assert_eq!(
            h.compute_with(2024, ChainConfig::default()).unwrap().ymd(),
            (2024, 12, 26)
        );
    }

    #[test]
    fn chained_offsets_sum() {
        let first = OffsetHoliday::with_anchor("day after", christmas(), 1).unwrap();
        let second =
            OffsetHoliday::with_anchor("three days before that", Holiday::Offset(first), -3)
                .unwrap();
        assert_eq!(
            second
                .compute_with(2024, ChainConfig::default())
                .unwrap()
                .ymd(),
            (2024, 12, 23)
        );
    }

    #[test]
    fn placeholder_not_assignable() {
        let mut h = OffsetHoliday::new("x", 0);
        assert!(h
            .set_anchor(Holiday::Empty(crate::variants::empty::EmptyHoliday))
            .is_err());
    }

    #[test]
    fn chain_limit_enforced() {
        let mut holiday = OffsetHoliday::with_anchor("o1", christmas(), 1).unwrap();
        for i in 2..=4 {
            holiday =
                OffsetHoliday::with_anchor(format!("o{i}"), Holiday::Offset(holiday), 1).unwrap();
        }
        // Four offset holidays in the chain: fine at limit 4, fails at 3.
        assert!(holiday.compute_with(2024, ChainConfig::new(4)).is_ok());
        assert!(matches!(
            holiday.compute_with(2024, ChainConfig::new(3)),
            Err(Error::RecursionLimitExceeded { limit: 3 })
        ));
    }
}
