//! Binary serialization of holidays.
//!
//! Each record is self-describing: a 4-byte magic constant, a type-identifier
//! string for polymorphic dispatch, the base block shared by all variants,
//! then the variant-specific fields. All integers are little-endian, strings
//! are `u32`-length-prefixed UTF-8, and the format is treated as bit-exact
//! for backward compatibility of persisted data.
//!
//! Deserialization is atomic per instance: the bytes are decoded into a
//! fresh value through the same validating constructors the rest of the
//! crate uses, and only a fully valid value replaces the target. A failed
//! decode leaves the previous state untouched.

mod reader;
mod writer;

use fer_core::errors::{Error, Result};
use fer_time::{Date, Month, TickSpan, Weekday};
use uuid::Uuid;

use crate::base::HolidayBase;
use crate::chain::ChainConfig;
use crate::holiday::Holiday;
use crate::variants::computed::ComputedHoliday;
use crate::variants::constant_day::{ConstantDayHoliday, LeapYearRule};
use crate::variants::constant_weekday::ConstantWeekdayHoliday;
use crate::variants::offset::OffsetHoliday;
use crate::variants::unique::UniqueHoliday;

use self::reader::ByteReader;
use self::writer::ByteWriter;

/// Magic constant opening every serialized holiday.
pub const MAGIC: [u8; 4] = *b"FER1";

/// Type identifier of [`ConstantDayHoliday`].
pub const TYPE_CONSTANT_DAY: &str = "feriae.ConstantDayHoliday";

/// Type identifier of [`ConstantWeekdayHoliday`].
pub const TYPE_CONSTANT_WEEKDAY: &str = "feriae.ConstantWeekdayHoliday";

/// Type identifier of [`OffsetHoliday`].
pub const TYPE_OFFSET: &str = "feriae.OffsetHoliday";

/// Type identifier of [`ComputedHoliday`].
pub const TYPE_COMPUTED: &str = "feriae.ComputedHoliday";

/// Type identifier of [`UniqueHoliday`].
pub const TYPE_UNIQUE: &str = "feriae.UniqueHoliday";

// ── Header ────────────────────────────────────────────────────────────────────

fn write_header(w: &mut ByteWriter, type_id: &str) {
    w.put_bytes(&MAGIC);
    w.put_string(type_id);
}

/// Read magic and type identifier. A wrong magic means the bytes are not a
/// holiday record at all.
fn read_header(r: &mut ByteReader) -> Result<String> {
    let magic = r.take(4)?;
    if magic != MAGIC {
        return Err(Error::CorruptData(format!(
            "bad magic {magic:02x?}, expected {MAGIC:02x?}"
        )));
    }
    r.read_string()
}

// ── Base block ────────────────────────────────────────────────────────────────

fn write_base(w: &mut ByteWriter, base: &HolidayBase) {
    w.put_bytes(base.id().as_bytes());
    w.put_string(base.name());
    w.put_opt_i32(base.active_from_year());
    w.put_opt_i32(base.active_to_year());
    w.put_bool(base.optional());
    w.put_i64(base.start_time().ticks());
    w.put_i64(base.duration().ticks());
}

fn read_base(r: &mut ByteReader) -> Result<HolidayBase> {
    let id_bytes: [u8; 16] = r
        .take(16)?
        .try_into()
        .expect("take(16) yields 16 bytes");
    let id = Uuid::from_bytes(id_bytes);
    let name = r.read_string()?;
    let active_from = r.read_opt_i32()?;
    let active_to = r.read_opt_i32()?;
    let optional = r.read_bool()?;
    let start_time = TickSpan::from_ticks(r.read_i64()?);
    let duration = TickSpan::from_ticks(r.read_i64()?);
    HolidayBase::from_parts(
        id,
        name,
        active_from,
        active_to,
        optional,
        start_time,
        duration,
    )
}

fn check_type(expected: &str, found: String) -> Result<()> {
    if found != expected {
        return Err(Error::TypeMismatch {
            expected: expected.to_string(),
            found,
        });
    }
    Ok(())
}

// ── Polymorphic dispatch ──────────────────────────────────────────────────────

impl Holiday {
    /// Serialize any non-placeholder holiday.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        match self {
            Holiday::ConstantDay(h) => h.serialize(),
            Holiday::ConstantWeekday(h) => h.serialize(),
            Holiday::Offset(h) => h.serialize(),
            Holiday::Computed(h) => h.serialize(),
            Holiday::Unique(h) => h.serialize(),
            Holiday::Empty(_) => Err(Error::InvalidConfiguration(
                "the placeholder holiday cannot be serialized".to_string(),
            )),
        }
    }

    /// Deserialize a holiday of any variant, dispatching on the embedded
    /// type identifier.
    pub fn deserialize_any(bytes: &[u8]) -> Result<Holiday> {
        let mut r = ByteReader::new(bytes);
        let type_id = read_header(&mut r)?;
        log::debug!("decoding holiday record of type {type_id}");
        let holiday = match type_id.as_str() {
            TYPE_CONSTANT_DAY => Holiday::ConstantDay(ConstantDayHoliday::decode_body(&mut r)?),
            TYPE_CONSTANT_WEEKDAY => {
                Holiday::ConstantWeekday(ConstantWeekdayHoliday::decode_body(&mut r)?)
            }
            TYPE_OFFSET => Holiday::Offset(OffsetHoliday::decode_body(&mut r)?),
            TYPE_COMPUTED => Holiday::Computed(ComputedHoliday::decode_body(&mut r)?),
            TYPE_UNIQUE => Holiday::Unique(UniqueHoliday::decode_body(&mut r)?),
            _ => return Err(Error::UnknownType(type_id)),
        };
        r.finish()?;
        Ok(holiday)
    }
}

// ── ConstantDay ───────────────────────────────────────────────────────────────

impl ConstantDayHoliday {
    /// Serialize to the wire format.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut w = ByteWriter::new();
        write_header(&mut w, TYPE_CONSTANT_DAY);
        write_base(&mut w, self.base());
        w.put_u8(self.day());
        w.put_u8(self.month().number());
        w.put_u8(self.leap_year_rule().code());
        Ok(w.into_bytes())
    }

    /// Replace this instance with the decoded bytes; on any failure the
    /// previous state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let mut r = ByteReader::new(bytes);
        check_type(TYPE_CONSTANT_DAY, read_header(&mut r)?)?;
        let decoded = Self::decode_body(&mut r)?;
        r.finish()?;
        *self = decoded;
        Ok(())
    }

    fn decode_body(r: &mut ByteReader) -> Result<Self> {
        let base = read_base(r)?;
        let day = r.read_u8()?;
        let month = Month::from_number(r.read_u8()?)
            .ok_or_else(|| Error::CorruptData("month byte out of range".to_string()))?;
        let rule = LeapYearRule::from_code(r.read_u8()?)
            .ok_or_else(|| Error::CorruptData("unknown leap-year rule byte".to_string()))?;
        Self::from_parts(base, month, day, rule)
    }
}

// ── ConstantWeekday ───────────────────────────────────────────────────────────

impl ConstantWeekdayHoliday {
    /// Serialize to the wire format.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut w = ByteWriter::new();
        write_header(&mut w, TYPE_CONSTANT_WEEKDAY);
        write_base(&mut w, self.base());
        w.put_u8(self.weekday().ordinal());
        w.put_u8(self.month().number());
        w.put_u8(self.weekday_index() as u8);
        w.put_i32(self.weekday_offset());
        Ok(w.into_bytes())
    }

    /// Replace this instance with the decoded bytes; on any failure the
    /// previous state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let mut r = ByteReader::new(bytes);
        check_type(TYPE_CONSTANT_WEEKDAY, read_header(&mut r)?)?;
        let decoded = Self::decode_body(&mut r)?;
        r.finish()?;
        *self = decoded;
        Ok(())
    }

    fn decode_body(r: &mut ByteReader) -> Result<Self> {
        let base = read_base(r)?;
        let weekday = Weekday::from_ordinal(r.read_u8()?)
            .ok_or_else(|| Error::CorruptData("weekday byte out of range".to_string()))?;
        let month = Month::from_number(r.read_u8()?)
            .ok_or_else(|| Error::CorruptData("month byte out of range".to_string()))?;
        let index = r.read_u8()? as i8;
        let offset = r.read_i32()?;
        Self::from_parts(base, month, weekday, index, offset)
    }
}

// ── Offset ────────────────────────────────────────────────────────────────────

impl OffsetHoliday {
    /// Serialize to the wire format. Fails with [`Error::Unassigned`] while
    /// no anchor is assigned — the placeholder has no wire form.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        if !self.is_assigned() {
            return Err(Error::Unassigned);
        }
        let anchor_bytes = self.anchor().serialize()?;
        let mut w = ByteWriter::new();
        write_header(&mut w, TYPE_OFFSET);
        write_base(&mut w, self.base());
        w.put_u32(anchor_bytes.len() as u32);
        w.put_bytes(&anchor_bytes);
        w.put_i32(self.offset_days());
        Ok(w.into_bytes())
    }

    /// Replace this instance with the decoded bytes; on any failure the
    /// previous state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let mut r = ByteReader::new(bytes);
        check_type(TYPE_OFFSET, read_header(&mut r)?)?;
        let decoded = Self::decode_body(&mut r)?;
        r.finish()?;
        *self = decoded;
        Ok(())
    }

    fn decode_body(r: &mut ByteReader) -> Result<Self> {
        let base = read_base(r)?;
        let anchor_len = r.read_u32()? as usize;
        let anchor = Holiday::deserialize_any(r.take(anchor_len)?)?;
        let offset_days = r.read_i32()?;
        let holiday = Self::from_parts(base, anchor, offset_days)?;
        // The persisted chain must satisfy the depth limit as well.
        holiday.check_chain(ChainConfig::default())?;
        Ok(holiday)
    }
}

// ── Computed ──────────────────────────────────────────────────────────────────

impl ComputedHoliday {
    /// Serialize to the wire format.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut w = ByteWriter::new();
        write_header(&mut w, TYPE_COMPUTED);
        write_base(&mut w, self.base());
        w.put_u32(self.instructions().len() as u32);
        for instruction in self.instructions() {
            w.put_string(instruction);
        }
        Ok(w.into_bytes())
    }

    /// Replace this instance with the decoded bytes; on any failure the
    /// previous state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let mut r = ByteReader::new(bytes);
        check_type(TYPE_COMPUTED, read_header(&mut r)?)?;
        let decoded = Self::decode_body(&mut r)?;
        r.finish()?;
        *self = decoded;
        Ok(())
    }

    fn decode_body(r: &mut ByteReader) -> Result<Self> {
        let base = read_base(r)?;
        let count = r.read_u32()?;
        let mut instructions = Vec::new();
        for _ in 0..count {
            instructions.push(r.read_string()?);
        }
        Self::from_parts(base, instructions)
    }
}

// ── Unique ────────────────────────────────────────────────────────────────────

impl UniqueHoliday {
    /// Serialize to the wire format.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut w = ByteWriter::new();
        write_header(&mut w, TYPE_UNIQUE);
        write_base(&mut w, self.base());
        let (year, month, day) = self.date().ymd();
        w.put_i32(year);
        w.put_u8(month);
        w.put_u8(day);
        Ok(w.into_bytes())
    }

    /// Replace this instance with the decoded bytes; on any failure the
    /// previous state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let mut r = ByteReader::new(bytes);
        check_type(TYPE_UNIQUE, read_header(&mut r)?)?;
        let decoded = Self::decode_body(&mut r)?;
        r.finish()?;
        *self = decoded;
        Ok(())
    }

    fn decode_body(r: &mut ByteReader) -> Result<Self> {
        let base = read_base(r)?;
        let year = r.read_i32()?;
        let month = r.read_u8()?;
        let day = r.read_u8()?;
        let date = Date::from_ymd(year, month, day)
            .map_err(|e| Error::CorruptData(format!("unique holiday date: {e}")))?;
        Self::from_parts(base, date)
    }
}
