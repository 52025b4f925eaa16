use core::fmt;

use serde::Serialize;

/// Number of arguments the audited function takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// A sample coordinate; `y` is set only for two-argument sweeps.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point<F> {
    pub x: F,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<F>,
}

impl<F> Point<F> {
    #[inline]
    pub const fn unary(x: F) -> Self {
        Self { x, y: None }
    }

    #[inline]
    pub const fn binary(x: F, y: F) -> Self {
        Self { x, y: Some(y) }
    }

    #[inline]
    pub const fn arity(&self) -> Arity {
        if self.y.is_some() { Arity::Binary } else { Arity::Unary }
    }
}

/// A target result together with the raw cycle count of that one call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measured<F> {
    pub value:  F,
    pub cycles: u64,
}

/// The implementation under test.
///
/// `evaluate` is the only call whose cost is measured; the window brackets
/// exactly one function call.
pub trait Target<F> {
    fn name(&self) -> &str;
    fn arity(&self) -> Arity;
    fn evaluate(&mut self, p: Point<F>) -> Measured<F>;
}

/// The trusted implementation the target is compared against.
pub trait Reference<F> {
    fn reference(&self, p: Point<F>) -> F;
}

impl<F, T: Target<F> + ?Sized> Target<F> for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn evaluate(&mut self, p: Point<F>) -> Measured<F> {
        (**self).evaluate(p)
    }
}

impl<F, R: Reference<F> + ?Sized> Reference<F> for &R {
    fn reference(&self, p: Point<F>) -> F {
        (**self).reference(p)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
