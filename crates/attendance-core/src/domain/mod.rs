//! Domain model (input/output records, risk classification).

pub mod record;
pub mod risk;

pub use record::{ErrorRecord, InputRecord, OutputRecord, Response};
pub use risk::RiskLevel;
