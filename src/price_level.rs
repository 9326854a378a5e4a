//! Price level - the resting orders at one price on one side.
//!
//! A level is an intrusive FIFO plus a cached aggregate quantity. The
//! aggregate is adjusted by exactly one delta on every mutation, never
//! recomputed by walking the queue.

use crate::pool::{Pool, SlotIndex};
use crate::queue::OrderQueue;
use crate::types::Qty;

/// Orders resting at a single price, in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriceLevel {
    /// FIFO of slots at this price (head = oldest = first to match)
    pub queue: OrderQueue,
    /// Cached sum of remaining quantity across queued orders
    pub total_qty: Qty,
}

impl PriceLevel {
    /// Create an empty level
    #[inline]
    pub const fn new() -> Self {
        Self {
            queue: OrderQueue::new(),
            total_qty: 0,
        }
    }

    /// Returns true if no orders rest at this level
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of resting orders at this level
    #[inline]
    pub const fn order_count(&self) -> u32 {
        self.queue.len()
    }

    /// Index of the highest-priority resting order, if any
    #[inline]
    pub const fn front(&self) -> Option<SlotIndex> {
        self.queue.front()
    }

    /// Append a resting order and grow the aggregate by its quantity.
    ///
    /// # Complexity
    /// O(1)
    #[inline]
    pub fn push_back(&mut self, pool: &mut Pool, idx: SlotIndex) {
        let qty = pool.node(idx).order.qty;
        debug_assert!(qty > 0);
        self.queue.push_tail(pool, idx);
        self.total_qty += qty;
    }

    /// Detach the head order, shrinking the aggregate by its remaining
    /// quantity. The slot is not released; the caller decides that.
    ///
    /// # Complexity
    /// O(1)
    #[inline]
    pub fn pop_front(&mut self, pool: &mut Pool) -> Option<SlotIndex> {
        let idx = self.queue.pop_head(pool)?;
        self.total_qty -= pool.node(idx).order.qty;
        Some(idx)
    }

    /// Detach an arbitrary resting order (cancellation path).
    ///
    /// # Returns
    /// `true` if the level is now empty. The slot is not released.
    ///
    /// # Complexity
    /// O(1)
    #[inline]
    pub fn remove(&mut self, pool: &mut Pool, idx: SlotIndex) -> bool {
        self.total_qty -= pool.node(idx).order.qty;
        self.queue.remove(pool, idx);
        self.is_empty()
    }

    /// Shrink the aggregate after a partial fill of a queued order.
    ///
    /// Call after reducing the order's own `qty` in place.
    #[inline]
    pub fn subtract_qty(&mut self, qty: Qty) {
        debug_assert!(self.total_qty >= qty);
        self.total_qty -= qty;
    }
}
