use thiserror::Error;

/// The single failure channel shared by every trade-processing operation.
///
/// The aggregation and ranking algorithms never construct one of these for
/// well-formed input; the variants exist so that upstream stages which do
/// validate records (parsers, feed adapters) compose with this core
/// through one error type. Callers must still treat every operation as
/// fallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeProcessingError {
    /// A record failed upstream validation.
    #[error("invalid trade record for entity '{entity}': {reason}")]
    InvalidRecord { entity: String, reason: String },

    /// A traded amount could not be parsed as an exact decimal.
    #[error("malformed trade amount '{value}'")]
    MalformedAmount { value: String },

    /// An order type code did not map to a trade direction.
    #[error("unknown direction code '{code}', expected 'B' or 'S'")]
    UnknownDirectionCode { code: char },
}

pub type Result<T> = std::result::Result<T, TradeProcessingError>;
