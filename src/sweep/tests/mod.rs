
use crate::core::rep::AuditFloat;
use crate::sweep::eval::{Arity, Measured, Point, Reference, Target};

/// Deterministic stand-in for a measured target: a closure plus a fixed raw cycle count.
pub(crate) struct FnTarget<G> {
    pub arity:  Arity,
    pub cycles: u64,
    pub calls:  usize,
    pub f:      G,
}

impl<G> FnTarget<G> {
    pub fn unary(cycles: u64, f: G) -> Self {
        Self { arity: Arity::Unary, cycles, calls: 0, f }
    }

    pub fn binary(cycles: u64, f: G) -> Self {
        Self { arity: Arity::Binary, cycles, calls: 0, f }
    }
}

impl<F: AuditFloat, G: FnMut(Point<F>) -> F> Target<F> for FnTarget<G> {
    fn name(&self) -> &str {
        "stand-in"
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn evaluate(&mut self, p: Point<F>) -> Measured<F> {
        self.calls += 1;
        Measured { value: (self.f)(p), cycles: self.cycles }
    }
}

pub(crate) struct FnReference<G>(pub G);

impl<F: AuditFloat, G: Fn(Point<F>) -> F> Reference<F> for FnReference<G> {
    fn reference(&self, p: Point<F>) -> F {
        (self.0)(p)
    }
}

/// Replays a fixed list of (value, raw cycles), one per call.
pub(crate) struct Scripted<F> {
    pub script: Vec<(F, u64)>,
    pub next:   usize,
}

impl<F: AuditFloat> Target<F> for Scripted<F> {
    fn name(&self) -> &str {
        "scripted"
    }

    fn arity(&self) -> Arity {
        Arity::Unary
    }

    fn evaluate(&mut self, _p: Point<F>) -> Measured<F> {
        let (value, cycles) = self.script[self.next];
        self.next += 1;
        Measured { value, cycles }
    }
}
