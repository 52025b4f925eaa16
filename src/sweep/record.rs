use serde::Serialize;

use crate::core::accuracy::ErrorRecord;
use crate::core::extremum::{ExtremumFlags, ExtremumTracker};
use crate::core::hexfloat::hex_encode;
use crate::core::rep::AuditFloat;
use crate::sweep::eval::Point;

/// One retained sample, as handed to a [`RecordSink`](crate::sweep::sink::RecordSink).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record<F> {
    /// Position in the full sweep, skipped samples included.
    pub index:  usize,
    #[serde(flatten)]
    pub point:  Point<F>,
    pub x_hex:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_hex:  Option<String>,
    #[serde(flatten)]
    pub error:  ErrorRecord<F>,
    pub cycles: u64,
    pub flags:  ExtremumFlags,
}

impl<F: AuditFloat> Record<F> {
    pub fn new(index: usize, point: Point<F>, error: ErrorRecord<F>, cycles: u64, flags: ExtremumFlags) -> Self {
        Self {
            index,
            point,
            x_hex: hex_encode(point.x),
            y_hex: point.y.map(hex_encode),
            error,
            cycles,
            flags,
        }
    }
}

/// Outcome of a finished sweep.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SweepSummary<F> {
    pub emitted: usize,
    /// Samples dropped because the target result was Inf or NaN.
    pub skipped: usize,
    pub extrema: ExtremumTracker<F>,
}
