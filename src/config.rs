use core::fmt;
use core::str::FromStr;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::NumericFormat;
use crate::error::AuditError;
use crate::functions::Function;
use crate::sweep::eval::Arity;

/// Width the audited function is evaluated in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    #[serde(alias = "float", alias = "binary32")]
    F32,
    #[serde(alias = "double", alias = "binary64")]
    F64,
}

impl FormatKind {
    pub const fn format(self) -> NumericFormat {
        match self {
            Self::F32 => NumericFormat::BINARY32,
            Self::F64 => NumericFormat::BINARY64,
        }
    }
}

impl FromStr for FormatKind {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "float" | "binary32" => Ok(Self::F32),
            "f64" | "double" | "binary64" => Ok(Self::F64),
            _ => Err(AuditError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// `::` lines.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisConfig {
    #[serde(default = "AxisConfig::default_lo")]
    pub lo: f64,
    #[serde(default = "AxisConfig::default_hi")]
    pub hi: f64,
    #[serde(default = "AxisConfig::default_points")]
    pub points: usize,
}

impl AxisConfig {
    pub const DEFAULT_POINTS: usize = 101;

    fn default_lo() -> f64 {
        0.0
    }

    fn default_hi() -> f64 {
        1.0
    }

    fn default_points() -> usize {
        Self::DEFAULT_POINTS
    }

    fn validate(&self, axis: &'static str) -> Result<(), AuditError> {
        if self.points < 2 {
            return Err(AuditError::TooFewPoints { axis, points: self.points });
        }
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(AuditError::NonFiniteBound { axis });
        }
        Ok(())
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            lo: Self::default_lo(),
            hi: Self::default_hi(),
            points: Self::DEFAULT_POINTS,
        }
    }
}

/// Everything that is fixed for the duration of one sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    pub function: Function,
    #[serde(default)]
    pub format: FormatKind,
    #[serde(default)]
    pub x: AxisConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisConfig>,
    /// Nanoseconds subtracted from each timed call. Defaults to 0: the
    /// built-in target is timed with a wall clock, not the simulated cycle
    /// counter that [`NumericFormat::default_calibration`] describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<u64>,
    #[serde(default)]
    pub output: OutputKind,
}

impl AuditConfig {
    /// Unary functions get a default x axis; binary ones also a default y axis.
    pub fn for_function(function: Function) -> Self {
        Self {
            function,
            format: FormatKind::default(),
            x: AxisConfig::default(),
            y: match function.arity() {
                Arity::Binary => Some(AxisConfig::default()),
                Arity::Unary => None,
            },
            calibration: None,
            output: OutputKind::default(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, AuditError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[inline]
    pub fn calibration(&self) -> u64 {
        self.calibration.unwrap_or(0)
    }

    pub fn arity(&self) -> Arity {
        if self.y.is_some() { Arity::Binary } else { Arity::Unary }
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        self.x.validate("x")?;
        if let Some(y) = &self.y {
            y.validate("y")?;
        }
        let expected = self.function.arity();
        if expected != self.arity() {
            return Err(AuditError::ArityMismatch {
                function: self.function.to_string(),
                expected: expected.count(),
                supplied: self.arity().count(),
            });
        }
        Ok(())
    }
}
