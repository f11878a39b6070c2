//! The `Holiday` enum: the closed set of variants and their shared surface.

use std::hash::{Hash, Hasher};

use fer_core::errors::Result;
use fer_time::Date;

use crate::base::HolidayBase;
use crate::chain::ChainConfig;
use crate::variants::computed::ComputedHoliday;
use crate::variants::constant_day::ConstantDayHoliday;
use crate::variants::constant_weekday::ConstantWeekdayHoliday;
use crate::variants::empty::EmptyHoliday;
use crate::variants::offset::OffsetHoliday;
use crate::variants::unique::UniqueHoliday;

/// Discriminates the closed variant set without carrying any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    /// Same day and month every year.
    ConstantDay,
    /// nth weekday of a month.
    ConstantWeekday,
    /// Day offset from an anchor holiday.
    Offset,
    /// RPN-computed date.
    Computed,
    /// Single absolute date.
    Unique,
    /// Unassigned placeholder.
    Empty,
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HolidayKind::ConstantDay => "constant day",
            HolidayKind::ConstantWeekday => "constant weekday",
            HolidayKind::Offset => "offset",
            HolidayKind::Computed => "computed",
            HolidayKind::Unique => "unique",
            HolidayKind::Empty => "placeholder",
        };
        write!(f, "{name}")
    }
}

/// A holiday: one of the five computation strategies, or the placeholder.
///
/// The set is closed; codec dispatch and equality are plain `match` tables.
/// Equality and hashing are offered as checked operations because they walk
/// offset chains just like `compute` does and must report a chain that
/// exceeds the depth limit instead of descending into it.
#[derive(Debug, Clone)]
pub enum Holiday {
    /// Same day and month every year.
    ConstantDay(ConstantDayHoliday),
    /// nth weekday of a month.
    ConstantWeekday(ConstantWeekdayHoliday),
    /// Day offset from an anchor holiday.
    Offset(OffsetHoliday),
    /// RPN-computed date.
    Computed(ComputedHoliday),
    /// Single absolute date.
    Unique(UniqueHoliday),
    /// Unassigned placeholder.
    Empty(EmptyHoliday),
}

impl Holiday {
    /// The variant discriminant.
    pub fn kind(&self) -> HolidayKind {
        match self {
            Holiday::ConstantDay(_) => HolidayKind::ConstantDay,
            Holiday::ConstantWeekday(_) => HolidayKind::ConstantWeekday,
            Holiday::Offset(_) => HolidayKind::Offset,
            Holiday::Computed(_) => HolidayKind::Computed,
            Holiday::Unique(_) => HolidayKind::Unique,
            Holiday::Empty(_) => HolidayKind::Empty,
        }
    }

    /// The shared base block; `None` for the placeholder, which has none.
    pub fn base(&self) -> Option<&HolidayBase> {
        match self {
            Holiday::ConstantDay(h) => Some(h.base()),
            Holiday::ConstantWeekday(h) => Some(h.base()),
            Holiday::Offset(h) => Some(h.base()),
            Holiday::Computed(h) => Some(h.base()),
            Holiday::Unique(h) => Some(h.base()),
            Holiday::Empty(_) => None,
        }
    }

    /// The display name; `None` for the placeholder.
    pub fn name(&self) -> Option<&str> {
        self.base().map(HolidayBase::name)
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Compute the date the holiday falls on in `year`, using the default
    /// chain configuration.
    pub fn compute(&self, year: i32) -> Result<Date> {
        self.compute_with(year, ChainConfig::default())
    }

    /// Compute the date the holiday falls on in `year`.
    pub fn compute_with(&self, year: i32, config: ChainConfig) -> Result<Date> {
        match self {
            Holiday::ConstantDay(h) => h.compute(year),
            Holiday::ConstantWeekday(h) => h.compute(year),
            Holiday::Offset(h) => h.compute_with(year, config),
            Holiday::Computed(h) => h.compute(year),
            Holiday::Unique(h) => h.compute(year),
            Holiday::Empty(h) => h.compute(year),
        }
    }

    /// Compute the holiday for every year in `from_year..=to_year`,
    /// ascending and lazily. Errors surface per element; consuming an
    /// element never tears down the rest of the sequence.
    pub fn compute_range(
        &self,
        from_year: i32,
        to_year: i32,
    ) -> impl Iterator<Item = Result<Date>> + '_ {
        self.compute_range_with(from_year, to_year, ChainConfig::default())
    }

    /// [`compute_range`](Self::compute_range) with an explicit chain
    /// configuration.
    pub fn compute_range_with(
        &self,
        from_year: i32,
        to_year: i32,
        config: ChainConfig,
    ) -> impl Iterator<Item = Result<Date>> + '_ {
        (from_year..=to_year).map(move |year| self.compute_with(year, config))
    }

    // ── Checked equality / hashing ────────────────────────────────────────────

    /// Structural equality across the whole variant state, using the default
    /// chain configuration.
    pub fn eq_checked(&self, other: &Holiday) -> Result<bool> {
        self.eq_with(other, ChainConfig::default())
    }

    /// Structural equality with an explicit chain configuration. Both sides'
    /// offset chains are depth-checked first.
    pub fn eq_with(&self, other: &Holiday, config: ChainConfig) -> Result<bool> {
        self.guard_chain(config)?;
        other.guard_chain(config)?;
        Ok(self.eq_unguarded(other))
    }

    /// Structural hash, using the default chain configuration.
    pub fn hash_checked(&self) -> Result<u64> {
        self.hash_with(ChainConfig::default())
    }

    /// Structural hash with an explicit chain configuration.
    pub fn hash_with(&self, config: ChainConfig) -> Result<u64> {
        self.guard_chain(config)?;
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.feed_hash(&mut hasher);
        Ok(hasher.finish())
    }

    fn guard_chain(&self, config: ChainConfig) -> Result<()> {
        match self {
            Holiday::Offset(h) => h.check_chain(config),
            _ => Ok(()),
        }
    }

    pub(crate) fn eq_unguarded(&self, other: &Holiday) -> bool {
        match (self, other) {
            (Holiday::ConstantDay(a), Holiday::ConstantDay(b)) => a.eq_fields(b),
            (Holiday::ConstantWeekday(a), Holiday::ConstantWeekday(b)) => a.eq_fields(b),
            (Holiday::Offset(a), Holiday::Offset(b)) => a.eq_fields(b),
            (Holiday::Computed(a), Holiday::Computed(b)) => a.eq_fields(b),
            (Holiday::Unique(a), Holiday::Unique(b)) => a.eq_fields(b),
            (Holiday::Empty(_), Holiday::Empty(_)) => true,
            _ => false,
        }
    }

    pub(crate) fn feed_hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Holiday::ConstantDay(h) => h.feed_hash(state),
            Holiday::ConstantWeekday(h) => h.feed_hash(state),
            Holiday::Offset(h) => h.feed_hash(state),
            Holiday::Computed(h) => h.feed_hash(state),
            Holiday::Unique(h) => h.feed_hash(state),
            Holiday::Empty(_) => {}
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.kind()),
            None => write!(f, "({})", self.kind()),
        }
    }
}

// ── Variant conversions ───────────────────────────────────────────────────────

impl From<ConstantDayHoliday> for Holiday {
    fn from(h: ConstantDayHoliday) -> Self {
        Holiday::ConstantDay(h)
    }
}

impl From<ConstantWeekdayHoliday> for Holiday {
    fn from(h: ConstantWeekdayHoliday) -> Self {
        Holiday::ConstantWeekday(h)
    }
}

impl From<OffsetHoliday> for Holiday {
    fn from(h: OffsetHoliday) -> Self {
        Holiday::Offset(h)
    }
}

impl From<ComputedHoliday> for Holiday {
    fn from(h: ComputedHoliday) -> Self {
        Holiday::Computed(h)
    }
}

impl From<UniqueHoliday> for Holiday {
    fn from(h: UniqueHoliday) -> Self {
        Holiday::Unique(h)
    }
}

impl From<EmptyHoliday> for Holiday {
    fn from(h: EmptyHoliday) -> Self {
        Holiday::Empty(h)
    }
}
