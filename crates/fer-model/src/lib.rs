//! # fer-model
//!
//! The polymorphic holiday data model: five concrete date-computation
//! strategies plus a placeholder, a bounded-depth guard for offset chains,
//! and a self-describing binary codec that round-trips every variant.
//!
//! A [`Holiday`] computes the calendar date it falls on in a given year:
//!
//! ```
//! use fer_model::{ConstantDayHoliday, Holiday};
//! use fer_time::Month;
//!
//! let christmas = ConstantDayHoliday::new("Christmas", Month::December, 25).unwrap();
//! let holiday = Holiday::from(christmas);
//! assert_eq!(holiday.compute(2025).unwrap().ymd(), (2025, 12, 25));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The base block shared by every variant.
pub mod base;

/// Offset-chain depth configuration.
pub mod chain;

/// Binary serialization of holidays.
pub mod codec;

/// The `Holiday` enum and its dispatch surface.
pub mod holiday;

/// Concrete holiday variants.
pub mod variants;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use base::HolidayBase;
pub use chain::ChainConfig;
pub use holiday::{Holiday, HolidayKind};
pub use variants::computed::ComputedHoliday;
pub use variants::constant_day::{ConstantDayHoliday, LeapYearRule};
pub use variants::constant_weekday::ConstantWeekdayHoliday;
pub use variants::empty::EmptyHoliday;
pub use variants::offset::OffsetHoliday;
pub use variants::unique::UniqueHoliday;
