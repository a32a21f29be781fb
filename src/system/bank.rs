//! The bank applies the mileage-deduction policy: balances in the
//! mileage-bearing currency lose a fixed amount per elapsed billing
//! period once they reach the policy threshold.

use crate::{
    error::{Error, Result},
    models::{currency::Currency, money::Money},
    util,
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;

/// The constants the mileage deduction runs on. These are business
/// configuration, not invariants: the standard policy deducts 1,000 meso
/// per period from balances of at least 10,000 meso.
#[derive(Clone, Debug, PartialEq, getset::Getters, derive_builder::Builder)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct MileagePolicy {
    /// The currency the policy applies to
    currency: Currency,
    /// Balances below this amount are left alone
    #[builder(default = "crate::num!(10000)")]
    threshold: Decimal,
    /// How much each elapsed period deducts
    #[builder(default = "crate::num!(1000)")]
    deduction_per_period: Decimal,
}

impl MileagePolicy {
    pub fn builder() -> MileagePolicyBuilder {
        MileagePolicyBuilder::default()
    }
}

impl Default for MileagePolicy {
    /// The standard meso policy.
    fn default() -> Self {
        Self {
            currency: Currency::Meso,
            threshold: num!(10000),
            deduction_per_period: num!(1000),
        }
    }
}

/// Applies a [`MileagePolicy`] to money.
pub struct Bank {
    mileage: MileagePolicy,
}

impl Bank {
    /// Create a bank running the standard meso policy.
    pub fn new() -> Self {
        Self {
            mileage: MileagePolicy::default(),
        }
    }

    /// Create a bank running the given policy instead.
    pub fn with_policy(policy: MileagePolicy) -> Self {
        Self { mileage: policy }
    }

    /// Deduct mileage for the given number of elapsed billing periods.
    ///
    /// The threshold is checked once, against the starting amount: a
    /// balance at or above it loses `deduction_per_period * periods` in
    /// one subtraction, and a balance below it comes back unchanged. A
    /// deduction larger than the balance fails the same way any negative
    /// subtraction does.
    pub fn subtract_mileage(&self, money: &Money, periods: u32) -> Result<Money> {
        let policy = &self.mileage;
        if money.currency() != policy.currency() {
            Err(Error::CurrencyMismatch {
                expected: policy.currency().clone(),
                got: money.currency().clone(),
            })?;
        }
        if money.amount() < policy.threshold() {
            return Ok(money.clone());
        }
        let deduction = Money::new(
            policy.deduction_per_period().clone() * Decimal::from(periods),
            policy.currency().clone(),
        )?;
        money.subtract(&deduction)
    }

    /// Deduct mileage for the whole billing periods elapsed between two
    /// points in time. A partial final period does not count.
    pub fn subtract_mileage_between(
        &self,
        money: &Money,
        from: &DateTime<Utc>,
        to: &DateTime<Utc>,
    ) -> Result<Money> {
        self.subtract_mileage(money, util::time::months_between(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use chrono::TimeZone;
    use rust_decimal_macros::*;

    #[test]
    fn deducts_per_elapsed_period() {
        let bank = Bank::new();
        let meso = make_meso(dec!(10000));
        assert_eq!(bank.subtract_mileage(&meso, 1).unwrap().amount(), &dec!(9000));
        assert_eq!(bank.subtract_mileage(&meso, 2).unwrap().amount(), &dec!(8000));
        assert_eq!(bank.subtract_mileage(&meso, 3).unwrap().amount(), &dec!(7000));
    }

    #[test]
    fn leaves_balances_under_the_threshold_alone() {
        let bank = Bank::new();
        let meso = make_meso(dec!(9999));
        assert_eq!(bank.subtract_mileage(&meso, 1).unwrap(), meso);
        assert_eq!(bank.subtract_mileage(&meso, 12).unwrap(), meso);
    }

    #[test]
    fn only_deducts_from_the_mileage_currency() {
        let bank = Bank::new();
        let res = bank.subtract_mileage(&make_won(dec!(10000)), 1);
        assert_eq!(
            res,
            Err(Error::CurrencyMismatch {
                expected: Currency::Meso,
                got: Currency::Won,
            })
        );
    }

    #[test]
    fn deduction_cannot_exceed_the_balance() {
        let bank = Bank::new();
        let res = bank.subtract_mileage(&make_meso(dec!(10000)), 11);
        assert_eq!(res, Err(Error::InvalidAmount(dec!(-1000))));
    }

    #[test]
    fn honors_a_custom_policy() {
        let policy = MileagePolicy::builder()
            .currency(Currency::Won)
            .threshold(dec!(5000))
            .deduction_per_period(dec!(500))
            .build()
            .map_err(Error::BuilderFailed)
            .unwrap();
        let bank = Bank::with_policy(policy);
        assert_eq!(bank.subtract_mileage(&make_won(dec!(5000)), 2).unwrap().amount(), &dec!(4000));
        assert_eq!(bank.subtract_mileage(&make_won(dec!(4999)), 2).unwrap().amount(), &dec!(4999));
    }

    #[test]
    fn policy_builder_requires_a_currency() {
        let res = MileagePolicy::builder().threshold(dec!(100)).build().map_err(Error::BuilderFailed);
        assert!(matches!(res, Err(Error::BuilderFailed(_))));
    }

    #[test]
    fn derives_periods_from_elapsed_months() {
        let bank = Bank::new();
        let meso = make_meso(dec!(10000));
        let from = Utc.with_ymd_and_hms(2020, 1, 15, 9, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2020, 4, 15, 9, 0, 0).unwrap();
        assert_eq!(bank.subtract_mileage_between(&meso, &from, &to).unwrap().amount(), &dec!(7000));
        let partial = Utc.with_ymd_and_hms(2020, 4, 14, 9, 0, 0).unwrap();
        assert_eq!(bank.subtract_mileage_between(&meso, &from, &partial).unwrap().amount(), &dec!(8000));
    }
}
