use core::hint::black_box;
use core::marker::PhantomData;
use std::time::Instant;

use crate::core::rep::AuditFloat;
use crate::functions::Function;
use crate::sweep::eval::{Arity, Measured, Point, Reference, Target};

/// Widths that have a `libm` implementation of every [`Function`].
///
/// `y` is ignored by one-argument functions.
pub trait Builtin: AuditFloat {
    fn libm(f: Function, x: Self, y: Self) -> Self;
}

impl Builtin for f32 {
    fn libm(f: Function, x: f32, y: f32) -> f32 {
        use Function::*;
        match f {
            Sin => libm::sinf(x),
            Cos => libm::cosf(x),
            Tan => libm::tanf(x),
            Asin => libm::asinf(x),
            Acos => libm::acosf(x),
            Atan => libm::atanf(x),
            Sinh => libm::sinhf(x),
            Cosh => libm::coshf(x),
            Tanh => libm::tanhf(x),
            Asinh => libm::asinhf(x),
            Acosh => libm::acoshf(x),
            Atanh => libm::atanhf(x),
            Exp => libm::expf(x),
            Exp2 => libm::exp2f(x),
            Expm1 => libm::expm1f(x),
            Log => libm::logf(x),
            Log2 => libm::log2f(x),
            Log10 => libm::log10f(x),
            Log1p => libm::log1pf(x),
            Sqrt => libm::sqrtf(x),
            Cbrt => libm::cbrtf(x),
            Trunc => libm::truncf(x),
            Ceil => libm::ceilf(x),
            Floor => libm::floorf(x),
            Round => libm::roundf(x),
            Fabs => libm::fabsf(x),
            Pow => libm::powf(x, y),
            Atan2 => libm::atan2f(x, y),
            Hypot => libm::hypotf(x, y),
            Fmin => libm::fminf(x, y),
            Fmax => libm::fmaxf(x, y),
            Fmod => libm::fmodf(x, y),
        }
    }
}

impl Builtin for f64 {
    fn libm(f: Function, x: f64, y: f64) -> f64 {
        use Function::*;
        match f {
            Sin => libm::sin(x),
            Cos => libm::cos(x),
            Tan => libm::tan(x),
            Asin => libm::asin(x),
            Acos => libm::acos(x),
            Atan => libm::atan(x),
            Sinh => libm::sinh(x),
            Cosh => libm::cosh(x),
            Tanh => libm::tanh(x),
            Asinh => libm::asinh(x),
            Acosh => libm::acosh(x),
            Atanh => libm::atanh(x),
            Exp => libm::exp(x),
            Exp2 => libm::exp2(x),
            Expm1 => libm::expm1(x),
            Log => libm::log(x),
            Log2 => libm::log2(x),
            Log10 => libm::log10(x),
            Log1p => libm::log1p(x),
            Sqrt => libm::sqrt(x),
            Cbrt => libm::cbrt(x),
            Trunc => libm::trunc(x),
            Ceil => libm::ceil(x),
            Floor => libm::floor(x),
            Round => libm::round(x),
            Fabs => libm::fabs(x),
            Pow => libm::pow(x, y),
            Atan2 => libm::atan2(x, y),
            Hypot => libm::hypot(x, y),
            Fmin => libm::fmin(x, y),
            Fmax => libm::fmax(x, y),
            Fmod => libm::fmod(x, y),
        }
    }
}

/// Host-side truth: `std` in f64.
pub fn host(f: Function, x: f64, y: f64) -> f64 {
    use Function::*;
    match f {
        Sin => x.sin(),
        Cos => x.cos(),
        Tan => x.tan(),
        Asin => x.asin(),
        Acos => x.acos(),
        Atan => x.atan(),
        Sinh => x.sinh(),
        Cosh => x.cosh(),
        Tanh => x.tanh(),
        Asinh => x.asinh(),
        Acosh => x.acosh(),
        Atanh => x.atanh(),
        Exp => x.exp(),
        Exp2 => x.exp2(),
        Expm1 => x.exp_m1(),
        Log => x.ln(),
        Log2 => x.log2(),
        Log10 => x.log10(),
        Log1p => x.ln_1p(),
        Sqrt => x.sqrt(),
        Cbrt => x.cbrt(),
        Trunc => x.trunc(),
        Ceil => x.ceil(),
        Floor => x.floor(),
        Round => x.round(),
        Fabs => x.abs(),
        Pow => x.powf(y),
        Atan2 => x.atan2(y),
        Hypot => x.hypot(y),
        Fmin => x.min(y),
        Fmax => x.max(y),
        Fmod => x % y,
    }
}

/// Times one `libm` call per sample. Elapsed nanoseconds stand in for cycles.
#[derive(Copy, Clone, Debug)]
pub struct LibmTarget<F> {
    function: Function,
    _width:   PhantomData<fn() -> F>,
}

impl<F: Builtin> LibmTarget<F> {
    pub const fn new(function: Function) -> Self {
        Self { function, _width: PhantomData }
    }
}

impl<F: Builtin> Target<F> for LibmTarget<F> {
    fn name(&self) -> &str {
        self.function.name()
    }

    fn arity(&self) -> Arity {
        self.function.arity()
    }

    fn evaluate(&mut self, p: Point<F>) -> Measured<F> {
        debug_assert_eq!(p.arity(), self.function.arity());
        let x = black_box(p.x);
        let y = black_box(p.y.unwrap_or_else(F::zero));

        let start = Instant::now();
        let value = black_box(F::libm(self.function, x, y));
        let elapsed = start.elapsed().as_nanos();

        Measured {
            value,
            cycles: u64::try_from(elapsed).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct HostReference {
    function: Function,
}

impl HostReference {
    pub const fn new(function: Function) -> Self {
        Self { function }
    }
}

impl<F: AuditFloat> Reference<F> for HostReference {
    fn reference(&self, p: Point<F>) -> F {
        let y = p.y.map_or(0.0, F::to_host);
        F::from_host(host(self.function, p.x.to_host(), y))
    }
}
