//! # lob-engine
//!
//! A single-symbol, single-threaded limit order book and matching engine
//! with strict price-time priority.
//!
//! ## Design Principles
//!
//! - **Single-Writer**: one thread owns the engine exclusively (no locks)
//! - **O(1) Hot Path**: append, cancel, and match-step are constant time;
//!   only touching a fresh price level pays the ordered-map O(log L)
//! - **Pooled Orders**: resting orders live in a block-growing pool and
//!   carry their own FIFO links, so steady state allocates nothing
//! - **Deterministic**: identical input sequences produce bit-identical
//!   trades and end state
//!
//! ## Architecture
//!
//! ```text
//! [Caller] --Order--> [MatchingEngine] --Trades--> [caller's sink]
//!                           |
//!                  [OrderBook]  [Pool]
//!                   bids/asks    order slots
//! ```

pub mod engine;
pub mod latency;
pub mod order_book;
pub mod pool;
pub mod price_level;
pub mod queue;
pub mod sim;
pub mod types;

// Re-exports for convenience
pub use engine::{MatchingEngine, Reject, SubmitOutcome};
pub use order_book::{OrderBook, OrderHandle};
pub use pool::{OrderNode, Pool, SlotIndex, BLOCK_SLOTS, NULL_INDEX};
pub use price_level::PriceLevel;
pub use queue::OrderQueue;
pub use types::{Order, OrderId, Qty, Side, Tick, Trade};
