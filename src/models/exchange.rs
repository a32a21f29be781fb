//! Exchange converts money between currencies using a table of rates keyed
//! by the (source, target) currency pair. Converted amounts are rounded
//! half-up to the target currency's smallest exchangeable unit, while
//! plain arithmetic elsewhere stays exact.

use crate::{
    error::{Error, Result},
    models::{currency::Currency, money::Money},
    util::number,
};
use rust_decimal::prelude::*;
use std::collections::HashMap;

/// A lookup table of exchange rates. A rate is the multiplier applied to an
/// amount in the source currency to quote it in the target currency, so
/// the (DOLLAR, WON) entry of the standard table is 1000.
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeRates {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl ExchangeRates {
    /// An empty rate table. Every exchange against it fails until rates
    /// are listed.
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// List (or override) the rate for a currency pair.
    pub fn with_rate<T: Into<Decimal>>(mut self, from: Currency, to: Currency, rate: T) -> Self {
        self.rates.insert((from, to), rate.into());
        self
    }

    /// Look up the rate for a currency pair.
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.rates.get(&(from.clone(), to.clone())).cloned()
    }
}

impl Default for ExchangeRates {
    /// The standard rate table: 1 dollar trades for 1,000 won or 10,000
    /// meso, and the remaining pairs follow from those.
    fn default() -> Self {
        Self::new()
            .with_rate(Currency::Won, Currency::Dollar, num!(0.001))
            .with_rate(Currency::Dollar, Currency::Won, num!(1000))
            .with_rate(Currency::Dollar, Currency::Meso, num!(10000))
            .with_rate(Currency::Meso, Currency::Dollar, num!(0.0001))
            .with_rate(Currency::Won, Currency::Meso, num!(10))
            .with_rate(Currency::Meso, Currency::Won, num!(0.1))
    }
}

/// The capability of converting a value into another currency.
pub trait Exchangeable {
    /// Convert this value into the target currency at the listed rate,
    /// rounded to the target currency's rounding step.
    fn exchange(&self, to: Currency, rates: &ExchangeRates) -> Result<Money>;
}

impl Exchangeable for Money {
    fn exchange(&self, to: Currency, rates: &ExchangeRates) -> Result<Money> {
        if self.currency() == &to {
            return Ok(self.clone());
        }
        let rate = rates
            .rate(self.currency(), &to)
            .ok_or_else(|| Error::UnsupportedCurrency {
                from: self.currency().clone(),
                to: to.clone(),
            })?;
        let converted = self.amount().clone() * rate;
        Money::new(number::round_to_step(converted, to.rounding_step()), to)
    }
}
