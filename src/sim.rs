//! Seeded synthetic order flow for the driver binary and benchmarks.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::types::{Order, Qty, Side, Tick};

/// Parameters for the synthetic order stream.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Number of orders to generate
    pub count: usize,
    /// Center of the price distribution, in ticks
    pub base_price: Tick,
    /// Maximum price delta either way, in ticks
    pub price_range: Tick,
    /// Maximum quantity per order
    pub max_qty: Qty,
    /// RNG seed; the stream is a pure function of this config
    pub seed: u64,
    /// Probability that an order is a buy
    pub buy_ratio: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            count: 100_000,
            base_price: 10_000, // 100.00
            price_range: 50,    // +/- 0.50
            max_qty: 100,
            seed: 1,
            buy_ratio: 0.5,
        }
    }
}

/// Drive `on_order` with a deterministic stream of random limit orders.
///
/// Prices are clamped to stay positive; ids run 1..=count in arrival order.
pub fn run_simulation(cfg: &SimConfig, mut on_order: impl FnMut(Order)) {
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let max_qty = cfg.max_qty.max(1);
    let range = cfg.price_range.max(0);

    for i in 0..cfg.count {
        let delta = rng.gen_range(-range..=range);
        let order = Order {
            id: (i + 1) as u64,
            side: if rng.gen_bool(cfg.buy_ratio) {
                Side::Buy
            } else {
                Side::Sell
            },
            price: (cfg.base_price + delta).max(1),
            qty: rng.gen_range(1..=max_qty),
            ts_ns: now_ns(),
        };
        on_order(order);
    }
}

/// Nanoseconds since the first call in this process.
///
/// Monotone; used only for the `ts_ns` diagnostic tag, never for priority.
pub fn now_ns() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}
