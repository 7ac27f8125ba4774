//! Ports - 抽象化レイヤー
//!
//! 予測はランダム性に依存するため、乱数源を trait として外から注入します。
//! テストでは FixedRandom / SeededRandom に差し替えて値を固定できます。

pub mod random;

pub use self::random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
