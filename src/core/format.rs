use core::fmt;

/// Layout of a binary IEEE754 interchange format.
///
/// Layout: s eeee...e mmmm...m (total_bits)
/// Bias = 2^(exp_bits - 1) - 1
///
/// For e = 0 (subnormals / zero):
///   value = sign * (0.m) * 2^(1 - bias)
///
/// For 1 <= e < 2^exp_bits - 1 (normals):
///   value = sign * (1.m) * 2^(e - bias)
///
/// e = all ones encodes Inf (m = 0) or NaN (m != 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumericFormat {
    pub total_bits: u32,
    pub exp_bits:   u32,
    pub mant_bits:  u32, // encoded, without the implicit leading bit
    pub bias:       i32,
}

impl NumericFormat {
    /// IEEE binary32: 1 sign, 8 exponent, 23 mantissa, bias 127.
    pub const BINARY32: Self = Self::new(32, 8);

    /// IEEE binary64: 1 sign, 11 exponent, 52 mantissa, bias 1023.
    pub const BINARY64: Self = Self::new(64, 11);

    pub const fn new(total_bits: u32, exp_bits: u32) -> Self {
        Self {
            total_bits,
            exp_bits,
            mant_bits: total_bits - 1 - exp_bits,
            bias: (1 << (exp_bits - 1)) - 1,
        }
    }

    #[inline]
    pub const fn sign_mask(&self) -> u64 {
        1u64 << (self.total_bits - 1)
    }

    /// Exponent field mask, already shifted down (all ones, `exp_bits` wide).
    #[inline]
    pub const fn exp_mask(&self) -> u64 {
        (1u64 << self.exp_bits) - 1
    }

    /// +Inf: all exponent bits set, mantissa zero.
    #[inline]
    pub const fn inf_pattern(&self) -> u64 {
        self.exp_mask() << self.mant_bits
    }

    #[inline]
    pub const fn mant_mask(&self) -> u64 {
        (1u64 << self.mant_bits) - 1
    }

    /// Number of hex digits needed to show the whole mantissa.
    #[inline]
    pub const fn hex_digits(&self) -> usize {
        ((self.mant_bits + 3) / 4) as usize
    }

    /// Left shift that packs the mantissa into whole nibbles (1 for binary32).
    #[inline]
    pub const fn hex_shift(&self) -> u32 {
        self.hex_digits() as u32 * 4 - self.mant_bits
    }

    /// Decimal places used when printing sample coordinates.
    #[inline]
    pub const fn decimal_digits(&self) -> usize {
        if self.total_bits > 32 { 15 } else { 8 }
    }

    /// Largest sweep point count whose indices all convert to this format
    /// without rounding: indices run up to `2^(mant_bits + 1)`.
    #[inline]
    pub const fn max_points(&self) -> u64 {
        (1u64 << (self.mant_bits + 1)) + 1
    }

    /// Overhead of the simulated cycle counter, subtracted from raw counts by
    /// [`Sweep`](crate::sweep::Sweep) unless overridden. Wall-clock targets
    /// should pass their own offset.
    #[inline]
    pub const fn default_calibration(&self) -> u64 {
        if self.total_bits > 32 { 30 } else { 5 }
    }
}

impl fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary{}(e={}, m={}, bias={})",
            self.total_bits, self.exp_bits, self.mant_bits, self.bias
        )
    }
}
