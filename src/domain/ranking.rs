//! Per-settlement-date trade ranking.
//!
//! Ranks the distinct trades of each settlement date by traded amount,
//! descending, one direction at a time. Records that are fully equal by
//! value (direction, date, amount, entity) collapse into a single ranked
//! entry before sorting; that collapsing is part of the contract, not a
//! storage accident.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Direction, TradeRecord};

/// How trades with equal amounts are ordered within a date group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal amounts are ordered by entity identifier, ascending. Output
    /// is fully deterministic.
    Entity,
    /// Equal amounts keep whatever order the deduplication set yields.
    /// Reproduces the reference behavior, which is not stable across
    /// runs.
    Unspecified,
}

/// Configuration for the day ranker.
#[derive(Debug, Clone, Deserialize)]
pub struct RankerConfig {
    /// Tie-break rule for equal amounts.
    #[serde(default = "default_tie_break")]
    pub tie_break: TieBreak,
}

fn default_tie_break() -> TieBreak {
    TieBreak::Entity
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            tie_break: default_tie_break(),
        }
    }
}

/// One entity's position among same-date, same-direction trades.
///
/// Created only by [`day_rankings`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingResult {
    /// 1-based rank, contiguous within a (date, direction) group.
    pub rank: u32,
    /// Entity identifier copied from the source record.
    pub entity: String,
    /// Settlement date of the group.
    pub date: NaiveDate,
}

impl RankingResult {
    /// Creates a new ranking entry.
    pub fn new(rank: u32, entity: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            rank,
            entity: entity.into(),
            date,
        }
    }
}

/// Ranks trades of one direction per settlement date.
///
/// Pipeline: filter by `direction`, group by settlement date, collapse
/// fully equal records, sort each group by amount descending (ties per
/// `config.tie_break`), then assign ranks 1..k per group. Groups are
/// emitted in date-ascending order; only the within-date rank order is
/// contractual.
///
/// Empty input, or input with no matching records, yields an empty vec.
#[must_use]
pub fn day_rankings(
    records: &[TradeRecord],
    direction: Direction,
    config: &RankerConfig,
) -> Vec<RankingResult> {
    let mut groups: BTreeMap<NaiveDate, HashSet<&TradeRecord>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.direction == direction) {
        groups
            .entry(record.settlement_date)
            .or_default()
            .insert(record);
    }

    let mut results = Vec::new();

    for (date, group) in groups {
        let mut distinct: Vec<&TradeRecord> = group.into_iter().collect();
        distinct.sort_by(|a, b| match config.tie_break {
            TieBreak::Entity => b
                .trade_amount
                .cmp(&a.trade_amount)
                .then_with(|| a.entity.cmp(&b.entity)),
            TieBreak::Unspecified => b.trade_amount.cmp(&a.trade_amount),
        });

        results.extend(
            distinct
                .iter()
                .zip(1u32..)
                .map(|(record, rank)| RankingResult::new(rank, record.entity.clone(), date)),
        );
    }

    results
}
