//! The exchange fee module converts money between won and dollars at the
//! system's fixed rates. It is the narrow, policy-checked front over the
//! general [exchange table][0]: each conversion names the exact source
//! currency it accepts.
//!
//! [0]: ../../models/exchange/struct.ExchangeRates.html

use crate::{
    error::{Error, Result},
    models::{
        currency::Currency,
        exchange::{ExchangeRates, Exchangeable},
        money::Money,
    },
};

/// A stateless converter between won and dollars.
///
/// Conversions round half-up to the target currency's rounding step:
/// dollars to the nearest cent, won to the nearest 10.
pub struct ExchangeFee {
    rates: ExchangeRates,
}

impl ExchangeFee {
    /// Create a converter quoting the standard rates.
    pub fn new() -> Self {
        Self {
            rates: ExchangeRates::default(),
        }
    }

    /// Create a converter quoting the given rates instead.
    pub fn with_rates(rates: ExchangeRates) -> Self {
        Self { rates }
    }

    /// Convert won into dollars at 1,000 won to the dollar, rounded
    /// half-up to the nearest cent.
    pub fn exchange_to_dollar(&self, money: &Money) -> Result<Money> {
        self.check_source(money, Currency::Won, Currency::Dollar)?;
        money.exchange(Currency::Dollar, &self.rates)
    }

    /// Convert dollars into won at the same fixed rate, rounded half-up
    /// to the nearest 10 won.
    pub fn exchange_to_won(&self, money: &Money) -> Result<Money> {
        self.check_source(money, Currency::Dollar, Currency::Won)?;
        money.exchange(Currency::Won, &self.rates)
    }

    fn check_source(&self, money: &Money, expected: Currency, to: Currency) -> Result<()> {
        if money.currency() != &expected {
            Err(Error::UnsupportedCurrency {
                from: money.currency().clone(),
                to,
            })?;
        }
        Ok(())
    }
}
