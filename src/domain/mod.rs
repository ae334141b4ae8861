//! Pure trade-processing domain logic.

mod aggregate;
mod ranking;
mod trade;

// Core domain types
pub use trade::{Direction, TradeRecord};

// Ranking types and pipeline
pub use ranking::{day_rankings, RankerConfig, RankingResult, TieBreak};

// Aggregation
pub use aggregate::day_amounts;
