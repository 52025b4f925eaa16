use tracing::{debug, info, trace};

use crate::core::accuracy::ErrorAnalyzer;
use crate::core::arith::{Arithmetic, Native};
use crate::core::classify::{classify, is_finite};
use crate::core::extremum::ExtremumTracker;
use crate::core::rep::AuditFloat;
use crate::error::AuditError;
use crate::sweep::domain::Axis;
use crate::sweep::eval::{Arity, Point, Reference, Target};
use crate::sweep::record::{Record, SweepSummary};
use crate::sweep::sink::RecordSink;

/// A 1-D or 2-D linear sweep over the input domain of one function.
///
/// Samples are visited strictly in order (`y` outer, `x` inner) because the
/// extremum flags depend on what came before.
#[derive(Copy, Clone, Debug)]
pub struct Sweep<F, A = Native> {
    x:           Axis<F>,
    y:           Option<Axis<F>>,
    calibration: u64,
    analyzer:    ErrorAnalyzer<A>,
}

impl<F: AuditFloat> Sweep<F, Native> {
    pub fn one_d(x: Axis<F>) -> Self {
        Self {
            x,
            y: None,
            calibration: F::FORMAT.default_calibration(),
            analyzer: ErrorAnalyzer::native(),
        }
    }

    pub fn two_d(x: Axis<F>, y: Axis<F>) -> Self {
        Self {
            y: Some(y),
            ..Self::one_d(x)
        }
    }
}

impl<F: AuditFloat, A: Arithmetic<F>> Sweep<F, A> {
    /// Cycles subtracted from every raw count to remove measurement overhead.
    pub fn with_calibration(mut self, calibration: u64) -> Self {
        self.calibration = calibration;
        self
    }

    /// Carry out error terms and sample placement with `arith`.
    pub fn with_arithmetic<B: Arithmetic<F>>(self, arith: B) -> Sweep<F, B> {
        Sweep {
            x: self.x,
            y: self.y,
            calibration: self.calibration,
            analyzer: ErrorAnalyzer::new(arith),
        }
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        if self.y.is_some() { Arity::Binary } else { Arity::Unary }
    }

    #[inline]
    pub fn calibration(&self) -> u64 {
        self.calibration
    }

    /// Total number of sample points, skipped ones included. Saturates.
    pub fn len(&self) -> usize {
        self.x.points().saturating_mul(self.y.map_or(1, |y| y.points()))
    }

    pub fn run<T, R, S>(
        &self,
        target: &mut T,
        reference: &R,
        sink: &mut S,
    ) -> Result<SweepSummary<F>, AuditError>
    where
        T: Target<F> + ?Sized,
        R: Reference<F> + ?Sized,
        S: RecordSink<F> + ?Sized,
    {
        if target.arity() != self.arity() {
            return Err(AuditError::ArityMismatch {
                function: target.name().to_string(),
                expected: target.arity().count(),
                supplied: self.arity().count(),
            });
        }

        let format = F::FORMAT;
        info!(
            function = target.name(),
            format = %format,
            samples = self.len(),
            calibration = self.calibration,
            "starting sweep"
        );

        let arith = self.analyzer.arith();
        let mut extrema = ExtremumTracker::<F>::new();
        let mut emitted = 0usize;
        let mut skipped = 0usize;
        let mut index = 0usize;

        let mut step = |p: Point<F>| -> Result<(), AuditError> {
            let i = index;
            index += 1;

            let measured = target.evaluate(p);
            if !is_finite(measured.value) {
                debug!(index = i, x = %p.x, class = %classify(measured.value), "target result not finite, skipped");
                skipped += 1;
                return Ok(());
            }

            let cycles = measured.cycles.saturating_sub(self.calibration);
            let expected = reference.reference(p);
            let error = self.analyzer.analyze(measured.value, expected);
            let flags = extrema.update(i, error.absolute, error.relative, cycles);

            let record = Record::new(i, p, error, cycles, flags);
            trace!(
                index = i,
                x = %record.x_hex,
                bits = %error.bits,
                cycles,
                new_extrema = flags.len(),
                "sample"
            );
            sink.emit(&record)?;
            emitted += 1;
            Ok(())
        };

        match &self.y {
            None => {
                for x in self.x.values(arith) {
                    step(Point::unary(x))?;
                }
            }
            Some(y_axis) => {
                for y in y_axis.values(arith) {
                    for x in self.x.values(arith) {
                        step(Point::binary(x, y))?;
                    }
                }
            }
        }

        sink.finish()?;

        info!(
            emitted,
            skipped,
            abs_max = %extrema.abs_max.value,
            rel_max = %extrema.rel_max.value,
            cycles_max = extrema.cycles_max.value,
            "sweep finished"
        );

        Ok(SweepSummary { emitted, skipped, extrema })
    }
}
