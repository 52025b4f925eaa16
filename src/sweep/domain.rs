use crate::core::arith::Arithmetic;
use crate::core::classify::is_finite;
use crate::core::rep::AuditFloat;
use crate::error::AuditError;

/// i-th of `n` evenly spaced points on `[a, b]`, computed as
/// `a + i * ((b - a) / (n - 1))` with the given arithmetic.
///
/// Panics when `n < 2`; use [`Axis::new`] to validate up front.
#[inline]
pub fn lerp<F: AuditFloat, A: Arithmetic<F>>(arith: &A, a: F, b: F, n: usize, i: usize) -> F {
    assert!(n >= 2, "linear sweep needs at least 2 points, got {n}");
    let len = arith.sub(b, a);
    let dx = arith.div(len, F::from_index(n - 1));
    arith.add(a, arith.mul(F::from_index(i), dx))
}

/// One linearly sampled coordinate: `points` values from `lo` to `hi`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis<F> {
    lo:     F,
    hi:     F,
    points: usize,
}

impl<F: AuditFloat> Axis<F> {
    pub fn new(name: &'static str, lo: F, hi: F, points: usize) -> Result<Self, AuditError> {
        if points < 2 {
            return Err(AuditError::TooFewPoints { axis: name, points });
        }
        let max = F::FORMAT.max_points();
        if u64::try_from(points).map_or(true, |p| p > max) {
            return Err(AuditError::TooManyPoints { axis: name, points, max });
        }
        if !is_finite(lo) || !is_finite(hi) {
            return Err(AuditError::NonFiniteBound { axis: name });
        }
        Ok(Self { lo, hi, points })
    }

    #[inline]
    pub fn lo(&self) -> F {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> F {
        self.hi
    }

    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    #[inline]
    pub fn at<A: Arithmetic<F>>(&self, arith: &A, i: usize) -> F {
        lerp(arith, self.lo, self.hi, self.points, i)
    }

    pub fn values<'a, A: Arithmetic<F>>(&'a self, arith: &'a A) -> impl Iterator<Item = F> + 'a {
        (0..self.points).map(move |i| self.at(arith, i))
    }
}
