use thiserror::Error;

/// Everything that can stop an audit before or during a sweep.
///
/// A non-finite target result is not an error: that sample is skipped.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("axis `{axis}` needs at least 2 points, got {points}")]
    TooFewPoints { axis: &'static str, points: usize },

    #[error("axis `{axis}` has {points} points, more than the {max} the format can index exactly")]
    TooManyPoints {
        axis:   &'static str,
        points: usize,
        max:    u64,
    },

    #[error("axis `{axis}` has a non-finite bound")]
    NonFiniteBound { axis: &'static str },

    #[error("`{function}` takes {expected} argument(s) but the sweep supplies {supplied}")]
    ArityMismatch {
        function: String,
        expected: usize,
        supplied: usize,
    },

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("unknown numeric format `{0}` (expected f32 or f64)")]
    UnknownFormat(String),

    #[error("no function selected")]
    MissingFunction,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to write JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
