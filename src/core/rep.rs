use core::fmt::{Debug, Display, LowerExp};

use num_traits::Float;
use serde::Serialize;

use crate::core::format::NumericFormat;

/// A float whose storage bits can be reinterpreted as an unsigned integer.
///
/// Raw bits are widened to `u64`; the upper bits are always zero for
/// narrower formats. `to_raw` / `from_raw` never round or convert.
pub trait AuditFloat:
    Float + Debug + Display + LowerExp + Serialize + Send + Sync + 'static
{
    const FORMAT: NumericFormat;

    fn to_raw(self) -> u64;
    fn from_raw(bits: u64) -> Self;

    /// Exact up to `2^(mant_bits + 1)`; [`Axis::new`](crate::sweep::Axis::new)
    /// keeps point counts inside that range.
    fn from_index(i: usize) -> Self;

    /// Host value rounded into this format.
    fn from_host(v: f64) -> Self;
    fn to_host(self) -> f64;
}

impl AuditFloat for f32 {
    const FORMAT: NumericFormat = NumericFormat::BINARY32;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn from_index(i: usize) -> Self {
        i as f32
    }

    #[inline]
    fn from_host(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_host(self) -> f64 {
        self as f64
    }
}

impl AuditFloat for f64 {
    const FORMAT: NumericFormat = NumericFormat::BINARY64;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn from_index(i: usize) -> Self {
        i as f64
    }

    #[inline]
    fn from_host(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_host(self) -> f64 {
        self
    }
}

#[inline]
pub fn to_bits<F: AuditFloat>(x: F) -> u64 {
    x.to_raw()
}

#[inline]
pub fn from_bits<F: AuditFloat>(bits: u64) -> F {
    F::from_raw(bits)
}

/// Raw fields of an encoded value. Nothing is normalized or unbiased here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unpacked {
    pub sign:       bool, // true when the sign bit is set
    pub biased_exp: u32,  // 0 for zero / subnormal, all ones for Inf / NaN
    pub mant:       u64,  // encoded fraction, no implicit bit
}

impl Unpacked {
    #[inline]
    pub const fn from_raw(format: &NumericFormat, bits: u64) -> Self {
        Self {
            sign: bits & format.sign_mask() != 0,
            biased_exp: ((bits >> format.mant_bits) & format.exp_mask()) as u32,
            mant: bits & format.mant_mask(),
        }
    }

    #[inline]
    pub fn of<F: AuditFloat>(x: F) -> Self {
        Self::from_raw(&F::FORMAT, x.to_raw())
    }

    #[inline]
    pub const fn pack(self, format: &NumericFormat) -> u64 {
        let s = if self.sign { format.sign_mask() } else { 0 };
        s | ((self.biased_exp as u64 & format.exp_mask()) << format.mant_bits)
            | (self.mant & format.mant_mask())
    }
}

#[inline]
pub fn sign<F: AuditFloat>(x: F) -> bool {
    Unpacked::of(x).sign
}

#[inline]
pub fn biased_exponent<F: AuditFloat>(x: F) -> u32 {
    Unpacked::of(x).biased_exp
}

#[inline]
pub fn mantissa<F: AuditFloat>(x: F) -> u64 {
    Unpacked::of(x).mant
}
