//! `TickSpan` — a signed span of 100 ns ticks.
//!
//! Holidays carry two of these: a start time (offset from midnight) and a
//! duration. The tick resolution matches the persisted wire format, which
//! stores both as raw 64-bit tick counts.

/// A signed time span counted in 100 ns ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TickSpan(i64);

/// Ticks per second (100 ns resolution).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Ticks per minute.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;

/// Ticks per hour.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;

/// Ticks per day.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

impl TickSpan {
    /// The zero span (midnight, when used as a start time).
    pub const ZERO: TickSpan = TickSpan(0);

    /// One full day; the default holiday duration.
    pub const DAY: TickSpan = TickSpan(TICKS_PER_DAY);

    /// Create a span from a raw tick count.
    pub fn from_ticks(ticks: i64) -> Self {
        TickSpan(ticks)
    }

    /// Create a span from hours, minutes, and seconds.
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        TickSpan(hours * TICKS_PER_HOUR + minutes * TICKS_PER_MINUTE + seconds * TICKS_PER_SECOND)
    }

    /// Create a span of whole hours.
    pub fn from_hours(hours: i64) -> Self {
        TickSpan(hours * TICKS_PER_HOUR)
    }

    /// Create a span of whole minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        TickSpan(minutes * TICKS_PER_MINUTE)
    }

    /// Create a span of whole days.
    pub fn from_days(days: i64) -> Self {
        TickSpan(days * TICKS_PER_DAY)
    }

    /// Return the raw tick count.
    pub fn ticks(&self) -> i64 {
        self.0
    }

    /// Return the number of whole hours in the span (truncating).
    pub fn whole_hours(&self) -> i64 {
        self.0 / TICKS_PER_HOUR
    }

    /// Return the number of whole minutes in the span (truncating).
    pub fn whole_minutes(&self) -> i64 {
        self.0 / TICKS_PER_MINUTE
    }

    /// Return `true` if the span is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for TickSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total_seconds = (self.0 / TICKS_PER_SECOND).abs();
        let h = total_seconds / 3600;
        let m = total_seconds / 60 % 60;
        let s = total_seconds % 60;
        write!(f, "{sign}{h:02}:{m:02}:{s:02}")
    }
}
