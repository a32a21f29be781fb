use money_core::{
    error::Result,
    Bank, Currency, ExchangeFee, ExchangeRates, Exchangeable, Money,
};
use rust_decimal_macros::dec;

fn example() -> Result<()> {
    // pool some dollar savings together
    let savings = Money::dollar(dec!(3.25))?.add(&Money::dollar(dec!(2))?)?;

    // trade them for won at the standard window rate, then back again
    let fee = ExchangeFee::new();
    let won = fee.exchange_to_won(&savings)?;
    let back = fee.exchange_to_dollar(&won)?;
    println!(
        "{} {} -> {} {} -> {} {}",
        savings.amount(),
        savings.currency(),
        won.amount(),
        won.currency(),
        back.amount(),
        back.currency()
    );

    // meso is quoted against the dollar in the standard table
    let meso = savings.exchange(Currency::Meso, &ExchangeRates::default())?;
    println!("{} DOLLAR buys {} MESO", savings.amount(), meso.amount());

    // three billing periods of mileage deductions against a meso balance
    let bank = Bank::new();
    let balance = Money::meso(dec!(12000))?;
    let after = bank.subtract_mileage(&balance, 3)?;
    println!(
        "{} MESO after three periods of mileage: {} MESO",
        balance.amount(),
        after.amount()
    );
    Ok(())
}

fn main() {
    example().unwrap();
}
