//! RandomSource port - 乱数の抽象化
//!
//! # 実装
//! - **ThreadRandom**: `rand::thread_rng()`（本番用、シードなし）
//! - **SeededRandom**: `StdRng::seed_from_u64`（再現可能な出力）
//! - **FixedRandom**: 事前に決めた値を返す（テスト用）

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// RandomSource は閉区間 `[low, high]` の一様乱数を提供
///
/// # テスト容易性
/// - trait により乱数源を差し替え可能
/// - テストでは FixedRandom を使って出力を厳密に検証する
pub trait RandomSource {
    /// Uniform draw from the closed interval `[low, high]`.
    ///
    /// When `low >= high` the interval is degenerate and `low` is returned.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

fn draw<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low >= high {
        return low;
    }
    rng.gen_range(low..=high)
}

/// Process-local thread RNG. Output is not reproducible.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        draw(&mut self.rng, low, high)
    }
}

/// Seeded RNG: the same seed always yields the same sequence of draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        draw(&mut self.rng, low, high)
    }
}

/// FixedRandom は事前に積んだ単位値 `t ∈ [0, 1]` を順に返す
///
/// 各 draw は `low + t * (high - low)` に写像されます。
/// キューが尽きたら最後の値を繰り返します（空で作った場合は 0.5）。
#[derive(Debug, Clone)]
pub struct FixedRandom {
    queue: VecDeque<f64>,
    last: f64,
}

impl FixedRandom {
    pub fn new(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: units.into_iter().map(|t| t.clamp(0.0, 1.0)).collect(),
            last: 0.5,
        }
    }

    /// Every draw lands on the same relative position of its interval.
    pub fn constant(unit: f64) -> Self {
        Self::new([unit])
    }

    fn next_unit(&mut self) -> f64 {
        if let Some(t) = self.queue.pop_front() {
            self.last = t;
        }
        self.last
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let t = self.next_unit();
        if low >= high {
            return low;
        }
        low + t * (high - low)
    }
}
