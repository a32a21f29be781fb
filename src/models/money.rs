//! Money pairs a decimal amount with the currency it is denominated in and
//! enforces the two rules everything else builds on: amounts never go
//! negative, and arithmetic never crosses currencies.

use crate::{
    error::{Error, Result},
    models::currency::Currency,
};
use getset::Getters;
use rust_decimal::prelude::*;

/// An immutable amount of money in a specific currency.
///
/// Every operation hands back a new `Money` rather than mutating in place.
/// Equality compares the numeric amount and the currency, so `5.0 DOLLAR`
/// and `5.00 DOLLAR` are the same money.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[getset(get = "pub")]
pub struct Money {
    /// How much of `currency` this is
    amount: Decimal,
    /// The currency the amount is denominated in
    currency: Currency,
}

impl Money {
    /// Create money. The amount must not be negative.
    pub fn new<T: Into<Decimal>>(amount: T, currency: Currency) -> Result<Self> {
        let amount = amount.into();
        if amount < Decimal::zero() {
            Err(Error::InvalidAmount(amount))?;
        }
        Ok(Self { amount, currency })
    }

    /// Create money denominated in won.
    pub fn won<T: Into<Decimal>>(amount: T) -> Result<Self> {
        Self::new(amount, Currency::Won)
    }

    /// Create money denominated in dollars.
    pub fn dollar<T: Into<Decimal>>(amount: T) -> Result<Self> {
        Self::new(amount, Currency::Dollar)
    }

    /// Create money denominated in meso.
    pub fn meso<T: Into<Decimal>>(amount: T) -> Result<Self> {
        Self::new(amount, Currency::Meso)
    }

    /// A zero amount of the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::zero(),
            currency,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add another amount of the same currency to this one.
    pub fn add(&self, other: &Money) -> Result<Money> {
        self.check_currency(other)?;
        Money::new(self.amount.clone() + other.amount.clone(), self.currency.clone())
    }

    /// Subtract another amount of the same currency from this one. The
    /// subtrahend must not exceed this amount.
    pub fn subtract(&self, other: &Money) -> Result<Money> {
        self.check_currency(other)?;
        if other.amount > self.amount {
            Err(Error::InvalidAmount(self.amount.clone() - other.amount.clone()))?;
        }
        Money::new(self.amount.clone() - other.amount.clone(), self.currency.clone())
    }

    fn check_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            Err(Error::CurrencyMismatch {
                expected: self.currency.clone(),
                got: other.currency.clone(),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use rust_decimal_macros::*;

    #[test]
    fn adds_won() {
        let sum = make_won(dec!(1000)).add(&make_won(dec!(1000))).unwrap();
        assert_eq!(sum.amount(), &dec!(2000));
        assert_eq!(sum.currency(), &Currency::Won);
    }

    #[test]
    fn adds_dollars() {
        let sum = make_dollar(dec!(5)).add(&make_dollar(dec!(5))).unwrap();
        assert_eq!(sum.amount(), &dec!(10));
        assert_eq!(sum.currency(), &Currency::Dollar);
    }

    #[test]
    fn preserves_scale_through_arithmetic() {
        let sum = make_dollar(dec!(5.25)).add(&make_dollar(dec!(5.25))).unwrap();
        assert_eq!(sum.amount(), &dec!(10.50));
        assert_eq!(sum.amount().scale(), 2);
    }

    #[test]
    fn equal_when_amount_and_currency_match() {
        assert_eq!(make_dollar(dec!(2000)), make_dollar(dec!(2000)));
        assert_eq!(make_dollar(dec!(5.0)), make_dollar(dec!(5.00)));
        assert_ne!(make_won(dec!(2000)), make_dollar(dec!(2000)));
        assert_ne!(make_won(dec!(2000)), make_won(dec!(1000)));
    }

    #[test]
    fn rejects_negative_amounts() {
        let res = Money::won(dec!(-1));
        assert_eq!(res, Err(Error::InvalidAmount(dec!(-1))));
    }

    #[test]
    fn cannot_add_across_currencies() {
        let res = make_dollar(dec!(5)).add(&make_won(dec!(5000)));
        assert_eq!(
            res,
            Err(Error::CurrencyMismatch {
                expected: Currency::Dollar,
                got: Currency::Won,
            })
        );
    }

    #[test]
    fn subtracts_dollars() {
        let result = make_dollar(dec!(5)).subtract(&make_dollar(dec!(4))).unwrap();
        assert_eq!(result, make_dollar(dec!(1)));
    }

    #[test]
    fn cannot_subtract_below_zero() {
        let res = make_dollar(dec!(5)).subtract(&make_dollar(dec!(6)));
        assert_eq!(res, Err(Error::InvalidAmount(dec!(-1))));
    }

    #[test]
    fn cannot_subtract_across_currencies() {
        let res = make_dollar(dec!(5)).subtract(&make_won(dec!(5000)));
        assert_eq!(
            res,
            Err(Error::CurrencyMismatch {
                expected: Currency::Dollar,
                got: Currency::Won,
            })
        );
    }

    #[test]
    fn zero_amounts() {
        let zero = Money::zero(Currency::Meso);
        assert!(zero.is_zero());
        assert_eq!(zero.currency(), &Currency::Meso);
        assert!(!make_meso(dec!(1)).is_zero());
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_and_back() {
        let money = make_dollar(dec!(5.25));
        let json = serde_json::to_string(&money).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
