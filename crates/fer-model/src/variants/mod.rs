//! Concrete holiday variants.
//!
//! Each variant owns a [`crate::base::HolidayBase`] block and the extra state
//! its computation strategy needs. The closed set is tied together by the
//! [`crate::holiday::Holiday`] enum.

/// Holiday computed by an RPN instruction program.
pub mod computed;

/// Holiday on the same day and month every year.
pub mod constant_day;

/// Holiday on the nth (or nth-from-last) weekday of a month.
pub mod constant_weekday;

/// Placeholder for a not-yet-assigned anchor.
pub mod empty;

/// Holiday at a day offset from another holiday.
pub mod offset;

/// One-off holiday on a single absolute date.
pub mod unique;
