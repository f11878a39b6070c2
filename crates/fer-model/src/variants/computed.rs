//! Holiday computed by an RPN instruction program.

use fer_core::errors::{Error, Result};
use fer_time::Date;

use crate::base::HolidayBase;

/// A holiday whose date is produced by an RPN program.
///
/// The target year is pushed onto the stack before the program runs; the
/// single remaining value is decoded as a packed day/month number
/// (`day * 100 + month`). The program text is validated lexically at
/// construction time, but runtime stack errors are still possible and are
/// reported from [`compute`](Self::compute).
#[derive(Debug, Clone)]
pub struct ComputedHoliday {
    base: HolidayBase,
    instructions: Vec<String>,
}

/// Easter Sunday per the anonymous Gregorian computus, spelled in the
/// evaluator's instruction set. The year arrives on the stack; intermediate
/// terms live in memory cells A–N; the result is `day * 100 + month`.
const EASTER_PROGRAM: &[&str] = &[
    "STO:Y",
    "RCL:Y", "19", "MOD", "STO:A",
    "RCL:Y", "100", "\\", "STO:B",
    "RCL:Y", "100", "MOD", "STO:C",
    "RCL:B", "4", "\\", "STO:D",
    "RCL:B", "4", "MOD", "STO:E",
    "RCL:B", "8", "+", "25", "\\", "STO:F",
    "RCL:B", "RCL:F", "-", "1", "+", "3", "\\", "STO:G",
    "19", "RCL:A", "*", "RCL:B", "+", "RCL:D", "-", "RCL:G", "-", "15", "+", "30", "MOD", "STO:H",
    "RCL:C", "4", "\\", "STO:I",
    "RCL:C", "4", "MOD", "STO:K",
    "32", "2", "RCL:E", "*", "+", "2", "RCL:I", "*", "+", "RCL:H", "-", "RCL:K", "-", "7", "MOD",
    "STO:L",
    "RCL:A", "11", "RCL:H", "*", "+", "22", "RCL:L", "*", "+", "451", "\\", "STO:M",
    "RCL:H", "RCL:L", "+", "7", "RCL:M", "*", "-", "114", "+", "STO:N",
    "RCL:N", "31", "MOD", "1", "+", "100", "*", "RCL:N", "31", "\\", "+",
];

impl ComputedHoliday {
    /// Create a computed holiday. The program must pass the evaluator's
    /// lexical validation.
    pub fn new(name: impl Into<String>, instructions: Vec<String>) -> Result<Self> {
        fer_eval::validate(&instructions)?;
        Ok(ComputedHoliday {
            base: HolidayBase::new(name),
            instructions,
        })
    }

    /// Create a holiday computing Easter Sunday.
    pub fn easter(name: impl Into<String>) -> Self {
        let instructions = EASTER_PROGRAM.iter().map(|s| s.to_string()).collect();
        ComputedHoliday::new(name, instructions).expect("built-in Easter program is valid")
    }

    pub(crate) fn from_parts(base: HolidayBase, instructions: Vec<String>) -> Result<Self> {
        fer_eval::validate(&instructions)?;
        Ok(ComputedHoliday { base, instructions })
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

    /// The instruction program.
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Replace the instruction program, re-validating it.
    pub fn set_instructions(&mut self, instructions: Vec<String>) -> Result<()> {
        fer_eval::validate(&instructions)?;
        self.instructions = instructions;
        Ok(())
    }

    // ── Computation ───────────────────────────────────────────────────────────

    /// Compute the date for `year`.
    ///
    /// Checks the active-year bounds, runs the program with the year as the
    /// initial stack, and decodes the packed result. The decoded day is not
    /// bounds-checked against the month: an overflowing day rolls forward
    /// through ordinary date arithmetic.
    pub fn compute(&self, year: i32) -> Result<Date> {
        fer_eval::validate(&self.instructions)?;
        self.base.check_active(year)?;
        let packed = fer_eval::evaluate(&self.instructions, &[year as f64])?;
        decode_packed(year, packed)
    }

    // ── Equality / hashing ────────────────────────────────────────────────────

    pub(crate) fn eq_fields(&self, other: &Self) -> bool {
        self.base.same_as(&other.base) && self.instructions == other.instructions
    }

    pub(crate) fn feed_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.base.feed_hash(state);
        self.instructions.hash(state);
    }
}

/// Decode a `day * 100 + month` packed value into a date in `year`.
fn decode_packed(year: i32, packed: f64) -> Result<Date> {
    if !packed.is_finite() || packed.fract() != 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "program result {packed} is not a packed day/month number"
        )));
    }
    let packed = packed as i64;
    let day = packed.div_euclid(100);
    let month = packed.rem_euclid(100);
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidConfiguration(format!(
            "program result {packed} decodes to month {month}"
        )));
    }
    let first = Date::from_ymd(year, month as u8, 1)?;
    first.add_days(day as i32 - 1)
}
