use core::fmt::{self, Write};

use crate::core::format::NumericFormat;
use crate::core::rep::{AuditFloat, Unpacked};

/// Akin to C's `%a`, with a fixed number of mantissa digits per format.
///
/// Finite values get a leading blank or `-` so columns line up:
///   ` 0x1.800000p0`, `-0x0.000002p-126`, ` 0.0`, `-inf`
/// NaN is printed bare as `nan`.
pub fn write_raw<W: Write>(out: &mut W, format: &NumericFormat, bits: u64) -> fmt::Result {
    let inf = format.inf_pattern();
    let v = bits & !format.sign_mask();

    if v > inf {
        return out.write_str("nan");
    }

    out.write_char(if bits & format.sign_mask() != 0 { '-' } else { ' ' })?;

    if v == 0 {
        return out.write_str("0.0");
    }
    if v == inf {
        return out.write_str("inf");
    }

    let u = Unpacked::from_raw(format, v);
    let (lead, exp) = if u.biased_exp != 0 {
        // normal
        ('1', u.biased_exp as i32 - format.bias)
    } else {
        // sub-normal
        ('0', 1 - format.bias)
    };

    write!(
        out,
        "0x{lead}.{mant:0width$x}p{exp}",
        mant = u.mant << format.hex_shift(),
        width = format.hex_digits(),
    )
}

pub fn encode_raw(format: &NumericFormat, bits: u64) -> String {
    let mut s = String::with_capacity(format.hex_digits() + 10);
    // Writing into a String cannot fail.
    let _ = write_raw(&mut s, format, bits);
    s
}

#[inline]
pub fn hex_encode<F: AuditFloat>(x: F) -> String {
    encode_raw(&F::FORMAT, x.to_raw())
}

/// Display wrapper that renders its value with [`hex_encode`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct HexFloat<F>(pub F);

impl<F: AuditFloat> fmt::Display for HexFloat<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_raw(f, &F::FORMAT, self.0.to_raw())
    }
}
