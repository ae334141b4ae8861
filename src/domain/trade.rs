//! Trade record types.
//!
//! This module provides the core value types describing a single stock
//! trade:
//!
//! - [`Direction`] - Whether a trade is incoming (sell) or outgoing (buy)
//! - [`TradeRecord`] - One immutable trade entry
//!
//! # Examples
//!
//! Building a record and filtering by direction:
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use daybook::domain::{Direction, TradeRecord};
//!
//! let record = TradeRecord::new(
//!     Direction::Outgoing,
//!     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     dec!(100.00),
//!     "AAA",
//! );
//!
//! assert!(record.is_outgoing());
//! assert!(!record.is_incoming());
//! ```

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a trade relative to the book being processed.
///
/// Upstream feeds carry single-letter order type codes: `S` (sell) maps to
/// [`Direction::Incoming`] and `B` (buy) maps to [`Direction::Outgoing`].
/// The core itself only ever compares directions for equality; the code
/// mapping exists for the ingestion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Sell-side trade flowing into the book.
    Incoming,
    /// Buy-side trade flowing out of the book.
    Outgoing,
}

impl Direction {
    /// Maps an upstream order type code (`S` or `B`) to a direction.
    ///
    /// Returns `None` for any other code; rejecting it is the ingestion
    /// layer's decision, not this core's.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'S' => Some(Self::Incoming),
            'B' => Some(Self::Outgoing),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incoming => write!(f, "incoming"),
            Self::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// One stock trade entry.
///
/// Immutable once constructed; all fields are required. Two records are
/// equal only when all four fields match, and that full value equality is
/// what the ranker uses to collapse duplicates.
///
/// Amounts are exact decimals ([`rust_decimal::Decimal`]); they are
/// non-negative by upstream convention but this core does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Incoming (sell) or outgoing (buy).
    pub direction: Direction,
    /// The date this trade's value is attributed to.
    pub settlement_date: NaiveDate,
    /// Total traded amount, exact decimal.
    pub trade_amount: Decimal,
    /// Opaque entity identifier or instrument symbol.
    pub entity: String,
}

impl TradeRecord {
    /// Creates a new trade record.
    pub fn new(
        direction: Direction,
        settlement_date: NaiveDate,
        trade_amount: Decimal,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            settlement_date,
            trade_amount,
            entity: entity.into(),
        }
    }

    /// Returns true if this is a sell-side (incoming) trade.
    #[must_use]
    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }

    /// Returns true if this is a buy-side (outgoing) trade.
    #[must_use]
    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }
}
