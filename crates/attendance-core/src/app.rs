//! App - stdin から stdout までの 1 回きりのパイプライン
//!
//! read -> decode -> predict -> encode -> write.
//! 失敗はすべて `{"error": ...}` として stdout に書き、RunStatus::Failure を返す。
//! exit code への変換は呼び出し側（CLI）の責務。

use std::io::{self, Read, Write};

use tracing::{debug, warn};

use crate::codec::{decode_input, encode_response};
use crate::domain::{ErrorRecord, OutputRecord, Response};
use crate::error::AppError;
use crate::ports::RandomSource;
use crate::predictor::Predictor;

/// Outcome of a run, mapped to a process exit code by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
        }
    }
}

/// Read all of `input`, predict, and write one JSON line to `output`.
///
/// Every error becomes an ErrorRecord with `RunStatus::Failure`, whether it
/// came from reading, decoding or the prediction itself. Only a failure to
/// write the response is returned as `Err`.
pub fn run<R, W, S>(input: R, mut output: W, predictor: &mut Predictor<S>) -> io::Result<RunStatus>
where
    R: Read,
    W: Write,
    S: RandomSource,
{
    let (response, status) = match respond(input, predictor) {
        Ok(record) => (Response::from(record), RunStatus::Success),
        Err(err) => {
            warn!(error = %err, "request rejected");
            (Response::from(ErrorRecord::new(err.to_string())), RunStatus::Failure)
        }
    };

    encode_response(&mut output, &response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(status)
}

fn respond<R: Read, S: RandomSource>(
    mut input: R,
    predictor: &mut Predictor<S>,
) -> Result<OutputRecord, AppError> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    debug!(bytes = raw.len(), "input read");

    let record = decode_input(&raw)?;
    Ok(predictor.predict(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedRandom, ThreadRandom};
    use serde_json::{Value, json};

    fn run_str<S: RandomSource>(input: &str, predictor: &mut Predictor<S>) -> (Value, RunStatus) {
        let mut out = Vec::new();
        let status = run(input.as_bytes(), &mut out, predictor).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        (serde_json::from_str(&text).unwrap(), status)
    }

    #[test]
    fn empty_stdin_reports_no_input() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str("", &mut p);
        assert_eq!(v, json!({"error": "No input data provided"}));
        assert_eq!(status, RunStatus::Failure);
        assert_eq!(status.exit_code(), 1);
    }

    #[test]
    fn invalid_json_reports_decode_error() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str("not json", &mut p);
        assert_eq!(status, RunStatus::Failure);
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj["error"].as_str().unwrap().contains("expected"));
    }

    #[test]
    fn non_numeric_attendance_is_a_failure() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str(r#"{"studentId": "S3", "currentAttendance": "abc"}"#, &mut p);
        assert_eq!(status, RunStatus::Failure);
        assert!(v["error"].is_string());
    }

    #[test]
    fn null_attendance_is_a_failure_not_zero() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str(r#"{"studentId": "S", "currentAttendance": null}"#, &mut p);
        assert_eq!(status, RunStatus::Failure);
        assert_eq!(v.as_object().map(|o| o.len()), Some(1));
        assert!(v["error"].as_str().unwrap().contains("null"));
    }

    #[test]
    fn big_integer_student_id_is_echoed_byte_for_byte() {
        let mut p = Predictor::with_defaults(FixedRandom::new([0.5, 0.0]));
        let mut out = Vec::new();
        let input = r#"{"studentId": 123456789012345678901234567890, "currentAttendance": 80}"#;
        let status = run(input.as_bytes(), &mut out, &mut p).unwrap();
        assert_eq!(status, RunStatus::Success);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"studentId\": 123456789012345678901234567890, \"predictedAttendance\": 80.0, \
             \"confidence\": 0.8, \"riskLevel\": \"Low\", \
             \"message\": \"Prediction based on current trends.\"}\n"
        );
    }

    #[test]
    fn full_attendance_round_trip() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str(r#"{"studentId": "S1", "currentAttendance": 100}"#, &mut p);
        assert_eq!(status, RunStatus::Success);
        assert_eq!(status.exit_code(), 0);
        assert_eq!(v["studentId"], "S1");
        let predicted = v["predictedAttendance"].as_f64().unwrap();
        assert!((95.0..=100.0).contains(&predicted));
        assert_eq!(v["message"], "Prediction based on current trends.");
    }

    #[test]
    fn missing_attendance_is_high_risk() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let (v, status) = run_str(r#"{"studentId": "S2"}"#, &mut p);
        assert_eq!(status, RunStatus::Success);
        let predicted = v["predictedAttendance"].as_f64().unwrap();
        assert!((0.0..=5.0).contains(&predicted));
        assert_eq!(v["riskLevel"], "High");
    }

    #[test]
    fn exact_output_with_fixed_source() {
        let mut p = Predictor::with_defaults(FixedRandom::new([0.0, 1.0]));
        let (v, _) = run_str(r#"{"currentAttendance": 82.5}"#, &mut p);
        assert_eq!(
            v,
            json!({
                "studentId": null,
                "predictedAttendance": 77.5,
                "confidence": 0.99,
                "riskLevel": "Low",
                "message": "Prediction based on current trends."
            })
        );
    }

    #[test]
    fn read_failure_becomes_error_record() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("pipe closed"))
            }
        }

        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let mut out = Vec::new();
        let status = run(Broken, &mut out, &mut p).unwrap();
        assert_eq!(status, RunStatus::Failure);
        let v: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["error"], "pipe closed");
    }

    #[test]
    fn invalid_utf8_is_a_failure() {
        let mut p = Predictor::with_defaults(ThreadRandom::new());
        let mut out = Vec::new();
        let status = run(&[0xff, 0xfe, 0x7b][..], &mut out, &mut p).unwrap();
        assert_eq!(status, RunStatus::Failure);
        let v: Value = serde_json::from_slice(&out).unwrap();
        assert!(v["error"].is_string());
    }
}
