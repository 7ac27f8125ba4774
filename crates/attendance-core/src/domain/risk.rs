//! RiskLevel - 予測値からの二値分類

use serde::Serialize;

/// Coarse risk classification derived from the predicted attendance.
///
/// Serialized as `"High"` / `"Low"` to match what callers already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    /// `High` iff `predicted < threshold`. There is no gap between the two.
    pub fn classify(predicted: f64, threshold: f64) -> Self {
        if predicted < threshold {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}
