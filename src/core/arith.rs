use crate::core::rep::AuditFloat;

/// The primitive operations the error analysis is carried out with.
///
/// Swapping the implementation lets the arithmetic under test also compute
/// its own error terms, so compounding shows up in the reported numbers.
pub trait Arithmetic<F> {
    fn add(&self, a: F, b: F) -> F;
    fn sub(&self, a: F, b: F) -> F;
    fn mul(&self, a: F, b: F) -> F;
    fn div(&self, a: F, b: F) -> F;
    fn fabs(&self, a: F) -> F;
    fn log2(&self, a: F) -> F;
}

/// Plain Rust float operations in the value's own width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Native;

impl<F: AuditFloat> Arithmetic<F> for Native {
    #[inline]
    fn add(&self, a: F, b: F) -> F { a + b }
    #[inline]
    fn sub(&self, a: F, b: F) -> F { a - b }
    #[inline]
    fn mul(&self, a: F, b: F) -> F { a * b }
    #[inline]
    fn div(&self, a: F, b: F) -> F { a / b }
    #[inline]
    fn fabs(&self, a: F) -> F { a.abs() }
    #[inline]
    fn log2(&self, a: F) -> F { a.log2() }
}

impl<F, A: Arithmetic<F> + ?Sized> Arithmetic<F> for &A {
    #[inline]
    fn add(&self, a: F, b: F) -> F { (**self).add(a, b) }
    #[inline]
    fn sub(&self, a: F, b: F) -> F { (**self).sub(a, b) }
    #[inline]
    fn mul(&self, a: F, b: F) -> F { (**self).mul(a, b) }
    #[inline]
    fn div(&self, a: F, b: F) -> F { (**self).div(a, b) }
    #[inline]
    fn fabs(&self, a: F) -> F { (**self).fabs(a) }
    #[inline]
    fn log2(&self, a: F) -> F { (**self).log2(a) }
}
