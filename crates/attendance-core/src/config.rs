//! Predictor configuration: bounds, threshold and rounding.

use crate::error::ConfigError;

pub const DEFAULT_MESSAGE: &str = "Prediction based on current trends.";

/// Knobs for the mock predictor.
///
/// v1: values are fixed in code (no env / file loading).
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Half-width of the random variation added to current attendance.
    pub variation: f64,

    /// Prediction is clamped into this closed range.
    pub attendance_bounds: (f64, f64),

    /// Confidence is drawn from this closed range.
    pub confidence_bounds: (f64, f64),

    /// Predictions strictly below this are `High` risk.
    pub risk_threshold: f64,

    /// Decimal places kept in `predictedAttendance` and `confidence`.
    pub decimals: u32,

    pub message: String,
}

impl PredictorConfig {
    /// Default config for v1: ±5 variation, [0, 100] clamp, [0.8, 0.99] confidence,
    /// threshold 75, two decimals.
    pub fn default_v1() -> Self {
        Self {
            variation: 5.0,
            attendance_bounds: (0.0, 100.0),
            confidence_bounds: (0.8, 0.99),
            risk_threshold: 75.0,
            decimals: 2,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.variation.is_finite() || self.variation < 0.0 {
            return Err(ConfigError::InvalidVariation(self.variation));
        }
        check_bounds("attendance_bounds", self.attendance_bounds)?;
        check_bounds("confidence_bounds", self.confidence_bounds)?;

        let (low, high) = self.attendance_bounds;
        if !(low..=high).contains(&self.risk_threshold) {
            return Err(ConfigError::ThresholdOutOfBounds {
                threshold: self.risk_threshold,
                low,
                high,
            });
        }
        Ok(())
    }

    /// Round half away from zero to `decimals` places.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        (value * factor).round() / factor
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

fn check_bounds(name: &'static str, (low, high): (f64, f64)) -> Result<(), ConfigError> {
    // NaN fails the comparison too
    if !(low <= high) {
        return Err(ConfigError::InvertedBounds { name, low, high });
    }
    Ok(())
}
