use core::fmt;

use crate::core::format::NumericFormat;
use crate::core::rep::{AuditFloat, Unpacked};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FpClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// +0.0 and -0.0 both count as zero.
#[inline]
pub const fn is_zero_raw(format: &NumericFormat, bits: u64) -> bool {
    bits & !format.sign_mask() == 0
}

/// Normals, subnormals and zero. Inf and every NaN sit at or above the Inf pattern.
#[inline]
pub const fn is_finite_raw(format: &NumericFormat, bits: u64) -> bool {
    bits & !format.sign_mask() < format.inf_pattern()
}

pub const fn classify_raw(format: &NumericFormat, bits: u64) -> FpClass {
    let v = bits & !format.sign_mask();
    let inf = format.inf_pattern();

    if v == 0 {
        FpClass::Zero
    } else if v == inf {
        FpClass::Infinite
    } else if v > inf {
        FpClass::Nan
    } else if Unpacked::from_raw(format, v).biased_exp == 0 {
        FpClass::Subnormal
    } else {
        FpClass::Normal
    }
}

#[inline]
pub fn is_zero<F: AuditFloat>(x: F) -> bool {
    is_zero_raw(&F::FORMAT, x.to_raw())
}

#[inline]
pub fn is_finite<F: AuditFloat>(x: F) -> bool {
    is_finite_raw(&F::FORMAT, x.to_raw())
}

#[inline]
pub fn classify<F: AuditFloat>(x: F) -> FpClass {
    classify_raw(&F::FORMAT, x.to_raw())
}

impl fmt::Display for FpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Infinite => "inf",
            Self::Nan => "nan",
        };
        f.write_str(s)
    }
}
