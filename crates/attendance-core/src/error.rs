use thiserror::Error;

/// Failure while turning raw stdin text into an [`InputRecord`].
///
/// [`InputRecord`]: crate::domain::InputRecord
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input data provided")]
    Empty,

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure inside the prediction arithmetic itself.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("currentAttendance must be a finite number, got {0}")]
    NonFiniteAttendance(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid bounds for {name}: low={low} > high={high}")]
    InvertedBounds {
        name: &'static str,
        low: f64,
        high: f64,
    },

    #[error("variation must be a non-negative finite number, got {0}")]
    InvalidVariation(f64),

    #[error("risk_threshold={threshold} is outside attendance bounds [{low}, {high}]")]
    ThresholdOutOfBounds { threshold: f64, low: f64, high: f64 },
}

/// Everything that can end a run with an ErrorRecord.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Predict(#[from] PredictError),
}
