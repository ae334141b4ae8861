//! Public trade-processing operations.
//!
//! [`TradeProcessor`] is the surface the ingestion/reporting layer calls:
//! four operations, each a pure function of its input records. Every
//! operation returns [`crate::error::Result`] so validation failures from
//! upstream stages flow through one channel, even though the computations
//! here never fail on well-formed input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{day_amounts, day_rankings, Direction, RankerConfig, RankingResult, TradeRecord};
use crate::error::Result;

/// Computes per-settlement-date amounts and rankings from trade batches.
///
/// Stateless apart from its ranker configuration; invocations share
/// nothing and may be repeated freely.
#[derive(Debug, Clone, Default)]
pub struct TradeProcessor {
    ranker: RankerConfig,
}

impl TradeProcessor {
    /// Creates a processor with the given ranker configuration.
    #[must_use]
    pub fn new(ranker: RankerConfig) -> Self {
        Self { ranker }
    }

    /// Total traded amount per settlement date for incoming (sell) trades.
    pub fn incoming_day_amounts(
        &self,
        records: &[TradeRecord],
    ) -> Result<BTreeMap<NaiveDate, Decimal>> {
        self.day_amounts(records, Direction::Incoming)
    }

    /// Total traded amount per settlement date for outgoing (buy) trades.
    pub fn outgoing_day_amounts(
        &self,
        records: &[TradeRecord],
    ) -> Result<BTreeMap<NaiveDate, Decimal>> {
        self.day_amounts(records, Direction::Outgoing)
    }

    /// Per-date ranking of distinct incoming (sell) trades by amount.
    pub fn incoming_day_rankings(&self, records: &[TradeRecord]) -> Result<Vec<RankingResult>> {
        self.day_rankings(records, Direction::Incoming)
    }

    /// Per-date ranking of distinct outgoing (buy) trades by amount.
    pub fn outgoing_day_rankings(&self, records: &[TradeRecord]) -> Result<Vec<RankingResult>> {
        self.day_rankings(records, Direction::Outgoing)
    }

    fn day_amounts(
        &self,
        records: &[TradeRecord],
        direction: Direction,
    ) -> Result<BTreeMap<NaiveDate, Decimal>> {
        let totals = day_amounts(records, direction);
        debug!(
            %direction,
            records = records.len(),
            dates = totals.len(),
            "computed day amounts"
        );
        Ok(totals)
    }

    fn day_rankings(
        &self,
        records: &[TradeRecord],
        direction: Direction,
    ) -> Result<Vec<RankingResult>> {
        let rankings = day_rankings(records, direction, &self.ranker);
        debug!(
            %direction,
            records = records.len(),
            ranked = rankings.len(),
            "computed day rankings"
        );
        Ok(rankings)
    }
}
