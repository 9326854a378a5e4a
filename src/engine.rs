//! Matching engine - the facade that validates, matches, and posts.
//!
//! One engine owns one pool and one book, processes calls strictly in
//! order, and never blocks. The caller supplies the trade sink and decides
//! whether to drain or accumulate it between submits.

use thiserror::Error;

use crate::order_book::OrderBook;
use crate::pool::Pool;
use crate::types::{Order, OrderId, Qty, Side, Tick, Trade};

/// Why a submit was refused.
///
/// These are caller contract violations; the book and pool are untouched
/// whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Reject {
    /// An order with this id is currently resting
    #[error("order id {0} is already resting")]
    DuplicateId(OrderId),
    /// Prices must be positive ticks
    #[error("price {0} is not positive")]
    InvalidPrice(Tick),
    /// Quantities must be positive
    #[error("quantity {0} is not positive")]
    InvalidQty(Qty),
}

/// Where a submitted order ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fully executed against resting liquidity; nothing rested
    Filled,
    /// Residual posted to the book with this remaining quantity
    Rested(Qty),
}

/// Single-symbol matching engine: pool + book + the submit/cancel surface.
pub struct MatchingEngine {
    pool: Pool,
    book: OrderBook,
}

impl MatchingEngine {
    /// Create an engine with one pool block reserved.
    pub fn new() -> Self {
        Self {
            pool: Pool::new(),
            book: OrderBook::new(),
        }
    }

    /// Create an engine pre-sized for roughly `orders` resting orders.
    pub fn with_capacity(orders: usize) -> Self {
        Self {
            pool: Pool::with_capacity(orders),
            book: OrderBook::with_order_capacity(orders),
        }
    }

    /// Validate, match against the opposite side, and post any residual.
    ///
    /// Trades for this order are appended to `trades` in execution order.
    /// A fully filled taker never becomes a maker; a rejected order leaves
    /// no mark on the book.
    pub fn submit(&mut self, mut order: Order, trades: &mut Vec<Trade>) -> Result<SubmitOutcome, Reject> {
        if order.price <= 0 {
            return Err(Reject::InvalidPrice(order.price));
        }
        if order.qty <= 0 {
            return Err(Reject::InvalidQty(order.qty));
        }
        if self.book.contains(order.id) {
            return Err(Reject::DuplicateId(order.id));
        }

        self.book.match_order(&mut self.pool, &mut order, trades);

        if order.qty > 0 {
            self.book.insert(&mut self.pool, order);
            Ok(SubmitOutcome::Rested(order.qty))
        } else {
            Ok(SubmitOutcome::Filled)
        }
    }

    /// Remove a resting order.
    ///
    /// # Returns
    /// `true` when the id was resting; cancelling an unknown id is a no-op.
    pub fn cancel(&mut self, id: OrderId) -> bool {
        self.book.cancel(&mut self.pool, id).is_some()
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Best (highest) bid price
    #[inline]
    pub fn best_bid(&self) -> Option<Tick> {
        self.book.best_bid()
    }

    /// Best (lowest) ask price
    #[inline]
    pub fn best_ask(&self) -> Option<Tick> {
        self.book.best_ask()
    }

    /// Spread between best ask and best bid
    #[inline]
    pub fn spread(&self) -> Option<Tick> {
        self.book.spread()
    }

    /// Total resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.book.order_count()
    }

    /// Aggregate quantity and order count at one level
    #[inline]
    pub fn depth_at(&self, side: Side, price: Tick) -> (Qty, u32) {
        self.book.depth_at(side, price)
    }

    /// Per-level depth on one side, best first
    #[inline]
    pub fn depth(&self, side: Side, limit: usize) -> Vec<(Tick, Qty)> {
        self.book.depth(side, limit)
    }

    /// The underlying book, for read-only inspection
    #[inline]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// The underlying pool, for accounting inspection
    #[inline]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Drop all resting orders, keeping the pool's reserve.
    pub fn clear(&mut self) {
        self.book.clear(&mut self.pool);
    }

    /// Hash of the observable end state (for determinism testing).
    pub fn state_hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.book.best_bid().hash(&mut hasher);
        self.book.best_ask().hash(&mut hasher);
        self.book.order_count().hash(&mut hasher);
        self.pool.allocated().hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
