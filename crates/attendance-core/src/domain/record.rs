//! Input/output records exchanged over stdin/stdout.
//!
//! Field names are camelCase on the wire (`studentId`, `currentAttendance`, ...)
//! because the calling service builds and parses them that way.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::RiskLevel;

/// Decoded request payload.
///
/// - `student_id`: opaque, any JSON value (big integers keep their digits).
///   Absent decodes as `Value::Null`.
/// - `current_attendance`: absent means "no data" and is treated as 0 by the
///   predictor. An explicit `null` or any non-number is rejected while decoding.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    #[serde(default)]
    pub student_id: Value,

    #[serde(default, deserialize_with = "present_number")]
    pub current_attendance: Option<f64>,
}

/// Only called when the key exists, so `null` reaches `f64` and fails there.
fn present_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

impl InputRecord {
    pub fn new(student_id: impl Into<Value>, current_attendance: Option<f64>) -> Self {
        Self {
            student_id: student_id.into(),
            current_attendance,
        }
    }

    /// Attendance with the default-to-zero rule applied.
    pub fn attendance_or_default(&self) -> f64 {
        self.current_attendance.unwrap_or(0.0)
    }
}

/// Mock prediction returned on success.
///
/// Field order here is the order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub student_id: Value,
    pub predicted_attendance: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub message: String,
}

/// Single-field error payload: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// What ends up on stdout: either a prediction or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Prediction(OutputRecord),
    Error(ErrorRecord),
}

impl From<OutputRecord> for Response {
    fn from(record: OutputRecord) -> Self {
        Response::Prediction(record)
    }
}

impl From<ErrorRecord> for Response {
    fn from(record: ErrorRecord) -> Self {
        Response::Error(record)
    }
}
