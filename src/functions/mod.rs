//! Built-in functions that can be audited from the command line.
//!
//! Target: the `libm` implementation in the audited width.
//! Reference: the host `std` implementation in `f64`, rounded into that width.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AuditError;
use crate::sweep::eval::Arity;

pub mod targets;
pub use targets::{Builtin, HostReference, LibmTarget};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    // trig
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    // hyperbolic
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    // exp / log
    Exp,
    Exp2,
    Expm1,
    Log,
    Log2,
    Log10,
    Log1p,
    // roots
    Sqrt,
    Cbrt,
    // rounding
    Trunc,
    Ceil,
    Floor,
    Round,
    Fabs,
    // two arguments
    Pow,
    Atan2,
    Hypot,
    Fmin,
    Fmax,
    Fmod,
}

impl Function {
    pub const ALL: [Self; 32] = [
        Self::Sin, Self::Cos, Self::Tan, Self::Asin, Self::Acos, Self::Atan,
        Self::Sinh, Self::Cosh, Self::Tanh, Self::Asinh, Self::Acosh, Self::Atanh,
        Self::Exp, Self::Exp2, Self::Expm1, Self::Log, Self::Log2, Self::Log10, Self::Log1p,
        Self::Sqrt, Self::Cbrt,
        Self::Trunc, Self::Ceil, Self::Floor, Self::Round, Self::Fabs,
        Self::Pow, Self::Atan2, Self::Hypot, Self::Fmin, Self::Fmax, Self::Fmod,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Exp => "exp",
            Self::Exp2 => "exp2",
            Self::Expm1 => "expm1",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Log1p => "log1p",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Trunc => "trunc",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Round => "round",
            Self::Fabs => "fabs",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
            Self::Hypot => "hypot",
            Self::Fmin => "fmin",
            Self::Fmax => "fmax",
            Self::Fmod => "fmod",
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Self::Pow | Self::Atan2 | Self::Hypot | Self::Fmin | Self::Fmax | Self::Fmod => {
                Arity::Binary
            }
            _ => Arity::Unary,
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Accepts the plain name as well as the C `f` / `l` suffixed spellings
/// (`sinf`, `sinl`).
impl FromStr for Function {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::lookup(&name)
            .or_else(|| {
                name.strip_suffix('f')
                    .or_else(|| name.strip_suffix('l'))
                    .and_then(Self::lookup)
            })
            .ok_or_else(|| AuditError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Function {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Function {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
