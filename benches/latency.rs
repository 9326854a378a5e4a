//! Criterion benchmarks for the submit/cancel hot path.
//!
//! Axes measured:
//! - a submit that rests without crossing
//! - a taker sweeping a ladder of resting offers, by ladder depth
//! - cancel plus resubmit of a mid-book order, by book size
//! - sustained simulated order flow

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use lob_engine::sim::{run_simulation, SimConfig};
use lob_engine::{MatchingEngine, Order, Qty, Side, Tick, Trade};

/// Submit an order that always rests: bids rotated across a band of
/// prices far below any ask.
fn bench_submit_rest(c: &mut Criterion) {
    let mut engine = MatchingEngine::with_capacity(1 << 20);
    let mut trades: Vec<Trade> = Vec::with_capacity(8);
    let mut id = 0u64;

    c.bench_function("submit_rest", |b| {
        b.iter(|| {
            id += 1;
            trades.clear();
            let price = 5_000 + (id % 16) as Tick;
            black_box(engine.submit(Order::new(id, Side::Buy, price, 10), &mut trades))
        })
    });
}

/// One taker consumes an entire ladder of offers in a single submit.
/// The ladder is rebuilt outside the measurement via `iter_batched`.
fn bench_submit_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_sweep");

    for ladder in [4usize, 32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(ladder), &ladder, |b, &ladder| {
            b.iter_batched(
                || {
                    let mut engine = MatchingEngine::with_capacity(ladder + 1);
                    let mut trades: Vec<Trade> = Vec::with_capacity(ladder + 1);
                    for i in 0..ladder as u64 {
                        trades.clear();
                        engine
                            .submit(
                                Order::new(i + 1, Side::Sell, 10_000 + i as Tick, 5),
                                &mut trades,
                            )
                            .unwrap();
                    }
                    trades.clear();
                    (engine, trades)
                },
                |(mut engine, mut trades)| {
                    let taker = Order::new(
                        u64::MAX,
                        Side::Buy,
                        10_000 + ladder as Tick,
                        5 * ladder as Qty,
                    );
                    black_box(engine.submit(taker, &mut trades).unwrap())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Cancel a mid-book order and put it straight back, exercising the
/// handle lookup, the intrusive unlink, and the level re-entry.
fn bench_cancel_resubmit(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel_resubmit");

    for book_size in [256u64, 4_096] {
        group.bench_with_input(
            BenchmarkId::from_parameter(book_size),
            &book_size,
            |b, &book_size| {
                let mut engine = MatchingEngine::with_capacity(book_size as usize);
                let mut trades: Vec<Trade> = Vec::with_capacity(8);

                // A one-sided book: every bid at its own price, nothing crosses.
                for i in 0..book_size {
                    trades.clear();
                    engine
                        .submit(Order::new(i + 1, Side::Buy, 1_000 + i as Tick, 20), &mut trades)
                        .unwrap();
                }

                let target = Order::new(book_size / 2, Side::Buy, 1_000 + (book_size / 2 - 1) as Tick, 20);

                b.iter(|| {
                    let found = engine.cancel(target.id);
                    trades.clear();
                    engine.submit(target, &mut trades).unwrap();
                    black_box(found)
                })
            },
        );
    }

    group.finish();
}

/// Sustained flow from the simulator: crossing and resting orders mixed,
/// measured in batches with per-element throughput.
fn bench_simulated_flow(c: &mut Criterion) {
    const BATCH: usize = 2_048;

    let mut group = c.benchmark_group("simulated_flow");
    group.throughput(criterion::Throughput::Elements(BATCH as u64));

    group.bench_function("batch", |b| {
        // One fixed stream, generated once; the engine is drained between
        // batches so each pass replays the identical work.
        let mut orders: Vec<Order> = Vec::with_capacity(BATCH);
        let cfg = SimConfig {
            count: BATCH,
            seed: 0x5A17,
            ..SimConfig::default()
        };
        run_simulation(&cfg, |order| orders.push(order));

        let mut engine = MatchingEngine::with_capacity(BATCH);
        let mut trades: Vec<Trade> = Vec::with_capacity(64);

        b.iter(|| {
            for order in &orders {
                trades.clear();
                let _ = black_box(engine.submit(*order, &mut trades));
            }
            engine.clear();
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_submit_rest,
    bench_submit_sweep,
    bench_cancel_resubmit,
    bench_simulated_flow,
);

criterion_main!(benches);
