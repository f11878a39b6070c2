//! Error types for the feriae workspace.
//!
//! All failures in the workspace are recoverable values returned to the
//! caller through [`Result`]; nothing here aborts the process, and nothing
//! retries internally. The `ensure!` and `fail!` macros are shorthands for
//! the most common validation paths.

use thiserror::Error;

/// The top-level error type used throughout feriae.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A field value or combination of field values is not acceptable
    /// (month/day out of range, zero weekday index, malformed instruction
    /// program, negative duration, inverted active-year range, …).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested year lies outside the holiday's active range.
    #[error("year {year} outside active range [{from:?}, {to:?}]")]
    OutOfActiveRange {
        /// The year that was requested.
        year: i32,
        /// Lower inclusive bound, if configured.
        from: Option<i32>,
        /// Upper inclusive bound, if configured.
        to: Option<i32>,
    },

    /// An offset holiday was used before a base holiday was assigned.
    #[error("offset holiday has no base assigned")]
    Unassigned,

    /// An offset chain is longer than the configured limit.
    #[error("offset chain exceeds the recursion limit of {limit}")]
    RecursionLimitExceeded {
        /// The limit that was in effect.
        limit: u32,
    },

    /// An evaluator operator was applied to too few operands.
    #[error("stack underflow while executing '{0}'")]
    StackUnderflow(String),

    /// An evaluator token is not a literal, operator, or well-formed command.
    #[error("invalid instruction '{0}'")]
    InvalidInstruction(String),

    /// `RCL` was issued for a memory cell that holds no value.
    #[error("memory cell '{0}' is not defined")]
    UndefinedMemory(char),

    /// A unique holiday was asked to compute a year other than its own.
    #[error("unique holiday is fixed to year {expected}, not {requested}")]
    WrongYear {
        /// The year the caller asked for.
        requested: i32,
        /// The year the holiday is pinned to.
        expected: i32,
    },

    /// The placeholder holiday cannot compute a date.
    #[error("placeholder holiday cannot be computed")]
    NotComputable,

    /// Serialized bytes are malformed (bad magic, truncation, bad UTF-8, …).
    #[error("corrupt data: {0}")]
    CorruptData(String),

    /// A serialized type identifier names no known holiday variant.
    #[error("unknown holiday type '{0}'")]
    UnknownType(String),

    /// Serialized bytes carry a different variant than the deserializer.
    #[error("type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        /// The variant the deserializer belongs to.
        expected: String,
        /// The variant named in the byte sequence.
        found: String,
    },

    /// Calendar-range failure inside date arithmetic.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout feriae.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidConfiguration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fer_core::ensure;
/// fn month(m: u8) -> fer_core::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(6).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfiguration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidConfiguration(...))` immediately.
///
/// # Example
/// ```
/// use fer_core::fail;
/// fn reject() -> fer_core::Result<()> {
///     fail!("always rejected");
/// }
/// assert!(reject().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidConfiguration(format!($($msg)*)))
    };
}
