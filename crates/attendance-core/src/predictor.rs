//! Predictor: mock attendance prediction with bounded random variation.
//!
//! There is no trained model here. The prediction is the current attendance
//! nudged by a uniform draw, clamped into range, plus a random confidence.

use tracing::debug;

use crate::config::PredictorConfig;
use crate::domain::{InputRecord, OutputRecord, RiskLevel};
use crate::error::{ConfigError, PredictError};
use crate::ports::RandomSource;

/// Predictor は InputRecord から OutputRecord を作る
///
/// 乱数源 `R` は外から渡す（テストでは FixedRandom / SeededRandom）。
#[derive(Debug, Clone)]
pub struct Predictor<R> {
    config: PredictorConfig,
    rng: R,
}

impl<R: RandomSource> Predictor<R> {
    pub fn new(config: PredictorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Predictor with [`PredictorConfig::default_v1`].
    pub fn with_defaults(rng: R) -> Self {
        Self {
            config: PredictorConfig::default_v1(),
            rng,
        }
    }

    /// Compute one prediction.
    ///
    /// Draw order is fixed: variation first, then confidence. Risk is
    /// classified on the rounded prediction so `riskLevel` always agrees with
    /// the `predictedAttendance` the caller sees.
    pub fn predict(&mut self, input: &InputRecord) -> Result<OutputRecord, PredictError> {
        let current = input.attendance_or_default();
        if !current.is_finite() {
            return Err(PredictError::NonFiniteAttendance(current));
        }

        let cfg = &self.config;
        let variation = self.rng.uniform(-cfg.variation, cfg.variation);
        let (low, high) = cfg.attendance_bounds;
        let raw = current + variation;
        if !raw.is_finite() {
            return Err(PredictError::NonFiniteAttendance(raw));
        }
        let prediction = raw.clamp(low, high);

        let (conf_low, conf_high) = cfg.confidence_bounds;
        let confidence = self.rng.uniform(conf_low, conf_high);

        let predicted_attendance = cfg.round(prediction);
        let confidence = cfg.round(confidence);
        let risk_level = RiskLevel::classify(predicted_attendance, cfg.risk_threshold);

        debug!(
            current,
            variation,
            predicted_attendance,
            confidence,
            ?risk_level,
            "prediction computed"
        );

        Ok(OutputRecord {
            student_id: input.student_id.clone(),
            predicted_attendance,
            confidence,
            risk_level,
            message: cfg.message.clone(),
        })
    }
}
