use chrono::NaiveDate;
use rust_decimal::Decimal;

use daybook::domain::{Direction, TradeRecord};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn buy(date: NaiveDate, amount: Decimal, entity: &str) -> TradeRecord {
    TradeRecord::new(Direction::Outgoing, date, amount, entity)
}

pub fn sell(date: NaiveDate, amount: Decimal, entity: &str) -> TradeRecord {
    TradeRecord::new(Direction::Incoming, date, amount, entity)
}

/// The worked batch used across suites: two buys and one sell settling on
/// the same day.
pub fn example_batch() -> Vec<TradeRecord> {
    let day = date(2024, 1, 2);
    vec![
        buy(day, Decimal::new(10000, 2), "AAA"),
        buy(day, Decimal::new(30000, 2), "BBB"),
        sell(day, Decimal::new(5000, 2), "CCC"),
    ]
}
