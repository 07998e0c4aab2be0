//! faultline: deterministic diagnostic strings for simple and aggregate errors.
//!
//! Failures that reach a log line or a telemetry event need exactly one
//! readable string. This crate renders any error value as that string,
//! including aggregates collected from concurrent or batched work, and
//! produces the same bytes for the same value in every locale.
//!
//! Key properties
//! - First-cause selection: aggregates are flattened in discovery order and
//!   only the first terminal fault is reported, keeping diagnostics bounded
//!   for arbitrarily large aggregates.
//! - Locale-invariant rendering: output never depends on `LC_ALL`/`LANG` or
//!   any regional configuration (see [`ToInvariantString`]).
//! - Pure and synchronous: no I/O, no locks, no mutation; safe to call
//!   concurrently on shared values.
//! - Work-list flattening: nested aggregates are expanded iteratively, never
//!   by call-stack recursion.
//!
//! Quick start
//! ```
//! use faultline::{format_error_detail, Fault};
//!
//! let timeout = Fault::msg("deadline exceeded");
//! let refused = Fault::msg("connection refused");
//! let batch = Fault::aggregate([timeout, refused]);
//!
//! // Only the first (dominant) cause is surfaced.
//! assert_eq!(format_error_detail(&batch), "deadline exceeded");
//! ```
//!
//! Wrapped errors keep their cause chain, rendered as one line:
//! ```
//! use faultline::{Fault, ToInvariantString};
//! use std::io;
//!
//! let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
//! assert_eq!(Fault::new(io_err).to_invariant_string(), "connection reset by peer");
//! ```
//!
//! With the `tracing` feature, `ResultExt` logs the formatted detail at
//! subsystem boundaries while passing the result through unchanged.

pub mod detail;
pub mod fault;
pub mod flatten;
pub mod invariant;
#[cfg(feature = "tracing")]
pub mod result_ext;

pub use detail::format_error_detail;
pub use fault::{Fault, DEFAULT_AGGREGATE_MESSAGE};
pub use flatten::Leaves;
pub use invariant::ToInvariantString;
#[cfg(feature = "tracing")]
pub use result_ext::ResultExt;
