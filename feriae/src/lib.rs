//! # feriae
//!
//! Rule-based holiday date computation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `fer-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feriae = "0.1"
//! ```
//!
//! ```rust
//! use feriae::model::{ComputedHoliday, Holiday};
//!
//! let easter = Holiday::from(ComputedHoliday::easter("Easter"));
//! assert_eq!(easter.compute(2025).unwrap().ymd(), (2025, 4, 20));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use fer_core as core;

/// RPN expression evaluator.
pub use fer_eval as eval;

/// Holiday variants and the binary codec.
pub use fer_model as model;

/// Date, weekday, month, and tick-span types.
pub use fer_time as time;

pub use fer_core::{Error, Result};
pub use fer_model::{ChainConfig, Holiday, HolidayKind};
pub use fer_time::{Date, Month, TickSpan, Weekday};
