//! Text front end: run a synthetic order stream or read orders from stdin,
//! time every submit, and report throughput, latency, and book state.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use lob_engine::latency::LatencyStats;
use lob_engine::sim::{now_ns, run_simulation, SimConfig};
use lob_engine::{MatchingEngine, Order, Qty, Side, Tick, Trade};

#[derive(Parser, Debug)]
#[command(name = "lob", about = "Limit order book matching engine driver")]
struct Args {
    /// Number of simulated orders to run through the engine
    #[arg(long, default_value_t = 100_000)]
    simulate: usize,

    /// Read orders from stdin as `SIDE PRICE QTY` lines instead of simulating
    #[arg(long, conflicts_with = "simulate")]
    stdin: bool,

    /// Base price for the simulator, in human units (e.g. 100.00)
    #[arg(long, default_value = "100.00", value_parser = parse_price)]
    base: Tick,

    /// Maximum price delta for the simulator, in human units
    #[arg(long, default_value = "0.50", value_parser = parse_price)]
    range: Tick,

    /// Maximum quantity per simulated order
    #[arg(long, default_value_t = 100)]
    max_qty: Qty,

    /// Probability that a simulated order is a buy (0-1)
    #[arg(long, default_value_t = 0.5)]
    buy_ratio: f64,

    /// RNG seed for the simulator
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Retain every trade in memory (implied by --dump-data)
    #[arg(long)]
    keep_trades: bool,

    /// Print the top of the book after the run
    #[arg(long)]
    print_book: bool,

    /// Number of levels per side for --print-book
    #[arg(long, default_value_t = 10)]
    book_depth: usize,

    /// Write trades.csv, latency.csv and book.csv into this directory
    #[arg(long, value_name = "DIR")]
    dump_data: Option<PathBuf>,
}

/// Parse a human price ("100.00") into integer ticks (cents), exactly.
fn parse_price(text: &str) -> Result<Tick, String> {
    let price: Decimal = text
        .parse()
        .map_err(|e| format!("invalid price {text:?}: {e}"))?;
    (price * Decimal::from(100))
        .round()
        .to_i64()
        .ok_or_else(|| format!("price {text:?} out of tick range"))
}

/// Parse a `SIDE PRICE QTY` line into an order with the given id.
fn parse_order_line(line: &str, id: u64) -> Option<Order> {
    let mut parts = line.split_whitespace();
    let side = match parts.next()? {
        "B" | "BUY" | "Buy" | "buy" => Side::Buy,
        "S" | "SELL" | "Sell" | "sell" => Side::Sell,
        _ => return None,
    };
    let price = parse_price(parts.next()?).ok()?;
    let qty: Qty = parts.next()?.parse().ok()?;
    Some(Order {
        id,
        side,
        price,
        qty,
        ts_ns: now_ns(),
    })
}

struct Run {
    engine: MatchingEngine,
    latency: LatencyStats,
    trades: Vec<Trade>,
    keep_trades: bool,
    processed: usize,
    rejected: usize,
}

impl Run {
    fn feed(&mut self, order: Order) {
        let start = Instant::now();
        let result = self.engine.submit(order, &mut self.trades);
        self.latency.record(start.elapsed().as_nanos() as u64);

        if result.is_err() {
            self.rejected += 1;
        }
        self.processed += 1;
        if !self.keep_trades {
            self.trades.clear();
        }
    }
}

fn print_book(engine: &MatchingEngine, depth: usize) {
    // Sentinel 0 for an empty side, matching the CSV/text conventions.
    let bid = engine.best_bid().unwrap_or(0);
    let ask = engine.best_ask().unwrap_or(0);
    println!("Top of book: bid={bid} ask={ask}");

    println!("BIDS (price/qty)");
    for (price, qty) in engine.depth(Side::Buy, depth) {
        println!("  {price} / {qty}");
    }
    println!("ASKS (price/qty)");
    for (price, qty) in engine.depth(Side::Sell, depth) {
        println!("  {price} / {qty}");
    }
}

fn dump_data(dir: &Path, run: &Run) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut f = File::create(dir.join("trades.csv"))?;
    writeln!(f, "trade_idx,taker_id,maker_id,price,qty")?;
    for (i, t) in run.trades.iter().enumerate() {
        writeln!(f, "{i},{},{},{},{}", t.taker_id, t.maker_id, t.price, t.qty)?;
    }

    let mut f = File::create(dir.join("latency.csv"))?;
    run.latency.dump_csv(&mut f)?;

    let mut f = File::create(dir.join("book.csv"))?;
    writeln!(f, "side,price,total_qty")?;
    for (price, qty) in run.engine.depth(Side::Buy, usize::MAX) {
        writeln!(f, "BID,{price},{qty}")?;
    }
    for (price, qty) in run.engine.depth(Side::Sell, usize::MAX) {
        writeln!(f, "ASK,{price},{qty}")?;
    }

    println!("Data dumped to {}", dir.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let capacity = if args.stdin { 4096 } else { args.simulate.max(1) };
    let mut run = Run {
        engine: MatchingEngine::with_capacity(capacity),
        latency: LatencyStats::new(),
        trades: Vec::with_capacity(64),
        keep_trades: args.keep_trades || args.dump_data.is_some(),
        processed: 0,
        rejected: 0,
    };

    let started = Instant::now();

    if args.stdin {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("failed to read stdin: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let order = match parse_order_line(&line, run.processed as u64 + 1) {
                Some(order) => order,
                None => {
                    eprintln!("invalid order line: {line}");
                    return ExitCode::FAILURE;
                }
            };
            run.feed(order);
        }
    } else {
        let cfg = SimConfig {
            count: args.simulate,
            base_price: args.base,
            price_range: args.range,
            max_qty: args.max_qty,
            seed: args.seed,
            buy_ratio: args.buy_ratio,
        };
        info!(count = cfg.count, seed = cfg.seed, "running simulation");
        run_simulation(&cfg, |order| run.feed(order));
    }

    let elapsed = started.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        run.processed as f64 / elapsed
    } else {
        0.0
    };

    info!(
        processed = run.processed,
        rejected = run.rejected,
        resting = run.engine.order_count(),
        "run complete"
    );
    println!(
        "Processed {} orders in {elapsed:.3}s ({} msg/s)",
        run.processed,
        rate as u64
    );
    match run.latency.report() {
        Some(report) => println!("{report}"),
        None => println!("Latency: no samples"),
    }

    if args.print_book {
        print_book(&run.engine, args.book_depth);
    }

    if let Some(dir) = &args.dump_data {
        if let Err(e) = dump_data(dir, &run) {
            eprintln!("failed to dump data: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
