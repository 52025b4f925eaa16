//! Absolute / relative error of a target result against a reference, and the
//! relative error expressed in fractional bits.
//!
//! With N fractional bits the best achievable accuracy is A = 0.5 * 2^-N.
//! The other way round, an accuracy A corresponds to
//!
//!   acc_bits = log2(2A) = 1 + log2(A)
//!
//! which is negative when there are correct fractional bits: smaller is better.

use serde::Serialize;

use crate::core::arith::{Arithmetic, Native};
use crate::core::classify::is_zero;
use crate::core::rep::AuditFloat;

/// Error terms of one sample. Not retained beyond emission.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ErrorRecord<F> {
    pub absolute: F,
    pub relative: F,
    pub bits:     F,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct ErrorAnalyzer<A = Native> {
    arith: A,
}

impl ErrorAnalyzer<Native> {
    pub const fn native() -> Self {
        Self { arith: Native }
    }
}

impl<A> ErrorAnalyzer<A> {
    pub const fn new(arith: A) -> Self {
        Self { arith }
    }

    #[inline]
    pub fn arith(&self) -> &A {
        &self.arith
    }

    /// `target - reference`, signed.
    #[inline]
    pub fn absolute_error<F: AuditFloat>(&self, target: F, reference: F) -> F
    where
        A: Arithmetic<F>,
    {
        self.arith.sub(target, reference)
    }

    /// `absolute / |reference|`; 0 when both are zero, 1 when only the reference is.
    pub fn relative_error<F: AuditFloat>(&self, target: F, reference: F) -> F
    where
        A: Arithmetic<F>,
    {
        let absolute = self.absolute_error(target, reference);
        self.relative_of(absolute, target, reference)
    }

    // 0 / 1 convention for a zero reference, else `absolute / |reference|`.
    fn relative_of<F: AuditFloat>(&self, absolute: F, target: F, reference: F) -> F
    where
        A: Arithmetic<F>,
    {
        if is_zero(reference) {
            return if is_zero(target) { F::zero() } else { F::one() };
        }
        self.arith.div(absolute, self.arith.fabs(reference))
    }

    /// `1 + log2(|relative|)`, or `-mant_bits` for an exact result.
    ///
    /// Only the exact case saturates; anything else is reported as computed,
    /// which can go below `-mant_bits` for rounding that happens to land close.
    pub fn bit_accuracy<F: AuditFloat>(&self, relative: F) -> F
    where
        A: Arithmetic<F>,
    {
        if is_zero(relative) {
            return -F::from_index(F::FORMAT.mant_bits as usize);
        }
        self.arith.add(F::one(), self.arith.log2(self.arith.fabs(relative)))
    }

    pub fn analyze<F: AuditFloat>(&self, target: F, reference: F) -> ErrorRecord<F>
    where
        A: Arithmetic<F>,
    {
        let absolute = self.absolute_error(target, reference);
        let relative = self.relative_of(absolute, target, reference);
        ErrorRecord {
            absolute,
            relative,
            bits: self.bit_accuracy(relative),
        }
    }
}

#[inline]
pub fn absolute_error<F: AuditFloat>(target: F, reference: F) -> F {
    ErrorAnalyzer::native().absolute_error(target, reference)
}

#[inline]
pub fn relative_error<F: AuditFloat>(target: F, reference: F) -> F {
    ErrorAnalyzer::native().relative_error(target, reference)
}

#[inline]
pub fn bit_accuracy<F: AuditFloat>(relative: F) -> F {
    ErrorAnalyzer::native().bit_accuracy(relative)
}
