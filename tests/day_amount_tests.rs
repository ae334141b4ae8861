//! Integration tests for per-date amount aggregation.

mod support;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use daybook::report::TradeProcessor;
use support::trade::{buy, date, example_batch, sell};

#[test]
fn test_example_batch_totals() {
    let processor = TradeProcessor::default();
    let day = date(2024, 1, 2);

    let outgoing = processor.outgoing_day_amounts(&example_batch()).unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[&day], dec!(400.00));

    let incoming = processor.incoming_day_amounts(&example_batch()).unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[&day], dec!(50.00));
}

#[test]
fn test_totals_split_across_settlement_dates() {
    let d1 = date(2024, 3, 1);
    let d2 = date(2024, 3, 4);
    let records = vec![
        buy(d1, dec!(10.10), "AAA"),
        buy(d1, dec!(20.20), "BBB"),
        buy(d2, dec!(5.05), "AAA"),
        sell(d1, dec!(999.99), "CCC"),
    ];

    let totals = TradeProcessor::default()
        .outgoing_day_amounts(&records)
        .unwrap();

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&d1], dec!(30.30));
    assert_eq!(totals[&d2], dec!(5.05));
}

#[test]
fn test_dates_without_matches_are_absent() {
    let records = vec![sell(date(2024, 3, 1), dec!(50), "CCC")];

    let totals = TradeProcessor::default()
        .outgoing_day_amounts(&records)
        .unwrap();

    assert!(totals.is_empty());
    assert_eq!(totals.get(&date(2024, 3, 1)), None);
}

#[test]
fn test_sum_is_exact_over_many_small_amounts() {
    let day = date(2024, 6, 3);
    // One cent, a hundred thousand times; float summation would drift.
    let records: Vec<_> = (0..100_000).map(|_| buy(day, dec!(0.01), "AAA")).collect();

    let totals = TradeProcessor::default()
        .outgoing_day_amounts(&records)
        .unwrap();

    assert_eq!(totals[&day], dec!(1000.00));
}

#[test]
fn test_zero_amount_trades_still_count_toward_their_date() {
    let day = date(2024, 6, 3);
    let records = vec![buy(day, Decimal::ZERO, "AAA")];

    let totals = TradeProcessor::default()
        .outgoing_day_amounts(&records)
        .unwrap();

    assert_eq!(totals[&day], Decimal::ZERO);
}
