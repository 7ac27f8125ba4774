//! attendance-core
//!
//! Building blocks for the one-shot attendance predictor.
//!
//! # モジュール構成
//! - **domain**: 入出力レコード（InputRecord, OutputRecord, ErrorRecord, Response, RiskLevel）
//! - **ports**: 抽象化レイヤー（RandomSource と ThreadRandom / SeededRandom / FixedRandom）
//! - **config**: PredictorConfig（変動幅、閾値、丸め桁数など）
//! - **predictor**: Predictor 本体（InputRecord -> OutputRecord）
//! - **codec**: stdin 文字列のデコードと stdout 用 JSON のエンコード
//! - **app**: stdin -> Predictor -> stdout の 1 回きりのパイプライン
//! - **error**: エラー型

pub mod app;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod predictor;

pub use self::app::{RunStatus, run};
pub use self::config::PredictorConfig;
pub use self::predictor::Predictor;
