//! Per-settlement-date amount aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Direction, TradeRecord};

/// Sums traded amounts per settlement date for one direction.
///
/// Records not matching `direction` are ignored. The returned map contains
/// exactly the distinct settlement dates seen among matching records; a
/// date with no matching trades is absent, never present with zero.
///
/// Summation is an exact [`Decimal`] fold from [`Decimal::ZERO`], so the
/// result is independent of input order.
#[must_use]
pub fn day_amounts(records: &[TradeRecord], direction: Direction) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for record in records.iter().filter(|r| r.direction == direction) {
        let total = totals.entry(record.settlement_date).or_insert(Decimal::ZERO);
        *total += record.trade_amount;
    }

    totals
}
