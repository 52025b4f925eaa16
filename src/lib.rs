//! Precision and cycle audit of one math function.
//!
//! A function is evaluated on a target implementation and on a trusted
//! reference over a linear sweep of its domain. Every retained sample reports
//! absolute and relative error, the relative error in fractional bits, the
//! exact input as a hex float, the consumed cycles, and which running extrema
//! it just pushed.

pub mod core;
pub mod sweep;
pub mod functions;
pub mod config;
pub mod audit;
pub mod error;

pub use crate::core::accuracy::{absolute_error, bit_accuracy, relative_error, ErrorAnalyzer, ErrorRecord};
pub use crate::core::arith::{Arithmetic, Native};
pub use crate::core::classify::{classify, is_finite, is_zero, FpClass};
pub use crate::core::extremum::{Extremum, ExtremumFlags, ExtremumTracker};
pub use crate::core::format::NumericFormat;
pub use crate::core::hexfloat::{hex_encode, HexFloat};
pub use crate::core::rep::{from_bits, to_bits, AuditFloat};
pub use config::{AuditConfig, AxisConfig, FormatKind, OutputKind};
pub use error::AuditError;
pub use functions::Function;
pub use sweep::{Axis, Point, Record, RecordSink, Sweep, SweepSummary};
