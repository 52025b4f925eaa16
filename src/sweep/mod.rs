pub mod domain;
pub mod eval;
pub mod record;
pub mod sink;
pub mod driver;

pub use domain::{lerp, Axis};
pub use driver::Sweep;
pub use eval::{Arity, Measured, Point, Reference, Target};
pub use record::{Record, SweepSummary};
pub use sink::{JsonLinesSink, RecordSink, TextSink};

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
