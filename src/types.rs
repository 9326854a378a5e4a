//! Core domain types: ticks, identifiers, orders, and trades.

use std::fmt;

/// Price in integer ticks. The engine never interprets ticks as a currency
/// unit; converting between ticks and human prices is the host's concern.
pub type Tick = i64;

/// Order quantity. Signed so quantity arithmetic in the match loop stays in
/// one domain; valid input is always positive.
pub type Qty = i64;

/// Client-assigned order identifier. Nonzero in valid input.
pub type OrderId = u64;

/// Which side of the book an order belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    /// Buy side (bids)
    Buy = 0,
    /// Sell side (asks)
    Sell = 1,
}

impl Side {
    /// Returns the opposite side
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        })
    }
}

/// A limit order, both in transit (taker) and at rest (maker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    /// Client-assigned identifier
    pub id: OrderId,
    /// Order side
    pub side: Side,
    /// Limit price in ticks; positive in valid input
    pub price: Tick,
    /// Remaining quantity; decreases monotonically to zero while matching
    pub qty: Qty,
    /// Arrival tag in nanoseconds. Diagnostics only; priority is decided by
    /// queue position, never by this field.
    pub ts_ns: u64,
}

impl Order {
    /// Create an order with a zero arrival tag.
    #[inline]
    pub const fn new(id: OrderId, side: Side, price: Tick, qty: Qty) -> Self {
        Self {
            id,
            side,
            price,
            qty,
            ts_ns: 0,
        }
    }
}

/// A single execution between a taker and a resting maker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trade {
    /// The aggressing (incoming) order
    pub taker_id: OrderId,
    /// The resting (matched) order
    pub maker_id: OrderId,
    /// Execution price: always the maker's resting price
    pub price: Tick,
    /// Quantity filled in this execution; always positive
    pub qty: Qty,
}
