//! A small core for working with money across multiple currencies: strict
//! currency-matched arithmetic, fixed-rate exchange with per-currency
//! rounding, and a mileage-deduction policy applied to the mileage-bearing
//! currency.
//!
//! Everything here is purely computational. Values are immutable, every
//! operation hands back a new value, and contract violations surface as
//! [`Error`][0] at the call site.
//!
//! [0]: error/enum.Error.html

pub mod error;
#[macro_use]
mod util;
pub mod models;
pub mod system;

pub use crate::{
    models::{
        currency::Currency,
        exchange::{ExchangeRates, Exchangeable},
        money::Money,
    },
    system::{
        bank::{Bank, MileagePolicy},
        exchange_fee::ExchangeFee,
    },
};
