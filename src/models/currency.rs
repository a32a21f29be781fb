//! The currency module holds the closed set of monetary units the system
//! supports. Adding a currency means adding a variant here and listing its
//! rates in the [exchange table][0].
//!
//! [0]: ../exchange/struct.ExchangeRates.html

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A monetary unit. Currencies compare by identity, so money in won can
/// never silently mix with money in dollars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Currency {
    /// Korean won
    Won,
    /// US dollar
    Dollar,
    /// Meso, the mileage-bearing currency
    Meso,
}

impl Currency {
    /// Every currency the system currently supports.
    pub fn all() -> &'static [Currency] {
        &[Currency::Won, Currency::Dollar, Currency::Meso]
    }

    /// The canonical code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Won => "WON",
            Currency::Dollar => "DOLLAR",
            Currency::Meso => "MESO",
        }
    }

    /// The smallest unit an exchanged amount is rounded to when converted
    /// into this currency: won trades in tens, dollars in cents, meso in
    /// whole units.
    pub fn rounding_step(&self) -> Decimal {
        match self {
            Currency::Won => num!(10),
            Currency::Dollar => num!(0.01),
            Currency::Meso => num!(1),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "WON" => Ok(Currency::Won),
            "DOLLAR" => Ok(Currency::Dollar),
            "MESO" => Ok(Currency::Meso),
            _ => Err(Error::UnknownCurrency(s.into())),
        }
    }
}
