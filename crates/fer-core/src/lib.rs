//! # fer-core
//!
//! Error definitions and shared macros for the feriae workspace.
//!
//! Every fallible operation in the workspace returns [`errors::Result`]; the
//! single [`errors::Error`] enum covers calendar failures, holiday
//! configuration and computation failures, evaluator runtime failures, and
//! codec failures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
