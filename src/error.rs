use crate::models::currency::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// The errors money operations can fail with. All of these signal a
/// contract violation at the call site and propagate to the caller as-is.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A builder was asked to build without all of its required fields
    #[error("builder failed: {0}")]
    BuilderFailed(String),
    /// An operation that requires matching currencies was given two
    /// different ones
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// The currency the operation required
        expected: Currency,
        /// The currency it was given
        got: Currency,
    },
    /// An amount that must be non-negative was not
    #[error("invalid money amount: {0}")]
    InvalidAmount(Decimal),
    /// A currency code failed to parse
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    /// An exchange was requested for a currency pair with no listed rate
    #[error("unsupported exchange: {from} -> {to}")]
    UnsupportedCurrency {
        /// The currency being exchanged out of
        from: Currency,
        /// The currency being exchanged into
        to: Currency,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
