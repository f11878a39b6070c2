//! The base block: attributes shared by every holiday variant.

use std::hash::{Hash, Hasher};

use fer_core::errors::{Error, Result};
use fer_core::ensure;
use fer_time::TickSpan;
use uuid::Uuid;

/// Attributes common to every holiday variant.
///
/// The id is generated once and stays stable across edits; it participates in
/// equality and hashing together with all other fields, and the codec writes
/// the whole block as a common prefix ahead of the variant-specific fields.
#[derive(Debug, Clone)]
pub struct HolidayBase {
    id: Uuid,
    name: String,
    active_from_year: Option<i32>,
    active_to_year: Option<i32>,
    optional: bool,
    start_time: TickSpan,
    duration: TickSpan,
}

impl HolidayBase {
    /// Create a base block with a fresh id, no active-year bounds, a
    /// midnight start time, and a 24 h duration.
    pub fn new(name: impl Into<String>) -> Self {
        HolidayBase {
            id: Uuid::new_v4(),
            name: name.into(),
            active_from_year: None,
            active_to_year: None,
            optional: false,
            start_time: TickSpan::ZERO,
            duration: TickSpan::DAY,
        }
    }

    /// Reassemble a base block from stored fields, re-validating the
    /// cross-field invariants. Used by the codec.
    pub(crate) fn from_parts(
        id: Uuid,
        name: String,
        active_from_year: Option<i32>,
        active_to_year: Option<i32>,
        optional: bool,
        start_time: TickSpan,
        duration: TickSpan,
    ) -> Result<Self> {
        if let (Some(from), Some(to)) = (active_from_year, active_to_year) {
            ensure!(from <= to, "active range {from}..={to} is inverted");
        }
        ensure!(!duration.is_negative(), "duration must not be negative");
        Ok(HolidayBase {
            id,
            name,
            active_from_year,
            active_to_year,
            optional,
            start_time,
            duration,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The stable unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First year (inclusive) the holiday is active, if bounded.
    pub fn active_from_year(&self) -> Option<i32> {
        self.active_from_year
    }

    /// Last year (inclusive) the holiday is active, if bounded.
    pub fn active_to_year(&self) -> Option<i32> {
        self.active_to_year
    }

    /// Whether the holiday is marked optional. Annotation only; computation
    /// ignores it.
    pub fn optional(&self) -> bool {
        self.optional
    }

    /// Start time as an offset from midnight.
    pub fn start_time(&self) -> TickSpan {
        self.start_time
    }

    /// Duration of the holiday.
    pub fn duration(&self) -> TickSpan {
        self.duration
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set both active-year bounds at once. `to < from` is invalid.
    pub fn set_active_range(&mut self, from: Option<i32>, to: Option<i32>) -> Result<()> {
        if let (Some(f), Some(t)) = (from, to) {
            ensure!(f <= t, "active range {f}..={t} is inverted");
        }
        self.active_from_year = from;
        self.active_to_year = to;
        Ok(())
    }

    /// Pin both active-year bounds to a single year.
    pub(crate) fn pin_active_year(&mut self, year: i32) {
        self.active_from_year = Some(year);
        self.active_to_year = Some(year);
    }

    /// Set the optional annotation.
    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
    }

    /// Set the start time (offset from midnight).
    pub fn set_start_time(&mut self, start_time: TickSpan) {
        self.start_time = start_time;
    }

    /// Set the duration. Must not be negative.
    pub fn set_duration(&mut self, duration: TickSpan) -> Result<()> {
        ensure!(!duration.is_negative(), "duration must not be negative");
        self.duration = duration;
        Ok(())
    }

    // ── Shared helpers ────────────────────────────────────────────────────────

    /// Fail with [`Error::OutOfActiveRange`] if `year` lies outside the
    /// configured bounds.
    pub(crate) fn check_active(&self, year: i32) -> Result<()> {
        let below = self.active_from_year.is_some_and(|from| year < from);
        let above = self.active_to_year.is_some_and(|to| year > to);
        if below || above {
            return Err(Error::OutOfActiveRange {
                year,
                from: self.active_from_year,
                to: self.active_to_year,
            });
        }
        Ok(())
    }

    /// Field-wise comparison; the shared part of every variant's equality.
    pub(crate) fn same_as(&self, other: &HolidayBase) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.active_from_year == other.active_from_year
            && self.active_to_year == other.active_to_year
            && self.optional == other.optional
            && self.start_time == other.start_time
            && self.duration == other.duration
    }

    /// Feed all fields into a hasher; the shared part of every variant's hash.
    pub(crate) fn feed_hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.active_from_year.hash(state);
        self.active_to_year.hash(state);
        self.optional.hash(state);
        self.start_time.hash(state);
        self.duration.hash(state);
    }
}
