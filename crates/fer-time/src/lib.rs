//! # fer-time
//!
//! Calendar primitives for feriae: the day-serial [`Date`] type, the
//! [`Weekday`] and [`Month`] enums, and [`TickSpan`] for sub-day time spans.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `TickSpan` — a signed span of 100 ns ticks.
pub mod span;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use span::TickSpan;
pub use weekday::Weekday;
