//! # fer-eval
//!
//! A small Reverse-Polish-Notation evaluator over an `f64` stack with named
//! single-character memory cells.
//!
//! Programs are sequences of string tokens: numeric literals, operators from
//! a fixed table, and `STO:`/`RCL:`/`DEL:` memory commands. Binary operators
//! read `a b OP` as `a OP b` — the first pop is the right-hand operand.
//!
//! ```
//! let program: Vec<String> = ["3", "4", "+"].iter().map(|s| s.to_string()).collect();
//! assert_eq!(fer_eval::evaluate(&program, &[]).unwrap(), 7.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Stack machine: token parsing, `validate`, `evaluate`.
pub mod machine;

/// The fixed operator table.
pub mod op;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use machine::{evaluate, validate};
pub use op::Op;
