//! Daybook - per-settlement-date trade aggregation and ranking.
//!
//! This crate takes a batch of stock trade records and computes, for
//! incoming (sell) and outgoing (buy) trades separately:
//!
//! - the total traded amount per settlement date, summed with exact
//!   decimal arithmetic;
//! - a per-date ranking of distinct trades by traded amount, descending.
//!
//! All operations are pure functions of their input batch: no I/O, no
//! shared state, no validation. Parsing, validation, and persistence
//! belong to the calling layers; failures from those layers flow through
//! the shared [`error::TradeProcessingError`] channel.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Trade records, aggregation, and the ranking pipeline
//! - [`error`] - The shared trade-processing error type
//! - [`logging`] - Tracing subscriber setup for host applications
//! - [`report`] - [`report::TradeProcessor`], the public operation surface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use daybook::domain::{Direction, TradeRecord};
//! use daybook::report::TradeProcessor;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let records = vec![
//!     TradeRecord::new(Direction::Outgoing, day, dec!(100.00), "AAA"),
//!     TradeRecord::new(Direction::Outgoing, day, dec!(300.00), "BBB"),
//!     TradeRecord::new(Direction::Incoming, day, dec!(50.00), "CCC"),
//! ];
//!
//! let processor = TradeProcessor::default();
//! let totals = processor.outgoing_day_amounts(&records)?;
//! assert_eq!(totals[&day], dec!(400.00));
//!
//! let rankings = processor.outgoing_day_rankings(&records)?;
//! assert_eq!(rankings[0].entity, "BBB");
//! assert_eq!(rankings[0].rank, 1);
//! # Ok::<(), daybook::error::TradeProcessingError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;

pub use error::{Result, TradeProcessingError};
pub use report::TradeProcessor;
