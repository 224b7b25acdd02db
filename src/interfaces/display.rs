//! Currency rendering for people. The machine itself only ever deals in whole
//! minor units; pounds and pence exist only here.

use crate::domain::money::Money;
use crate::domain::tally::CoinTally;
use crate::error::VendingError;
use rust_decimal::Decimal;

const MINOR_UNITS_SCALE: u32 = 2;

/// Converts minor units to a decimal amount of major units (150 -> 1.50).
pub fn to_decimal(amount: Money) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(amount.minor_units()), MINOR_UNITS_SCALE)
}

/// Formats an amount as pounds sterling, e.g. `£1.50`.
pub fn format_money(amount: Money) -> String {
    format!("£{}", to_decimal(amount))
}

/// Lists coins largest first, e.g. `1 x ONE_POUND, 2 x TEN_PENCE`.
pub fn describe_coins(coins: &CoinTally) -> String {
    if coins.is_empty() {
        return "no coins".to_string();
    }
    coins
        .iter()
        .rev()
        .map(|(denomination, count)| format!("{count} x {denomination}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The message shown to the customer for a failed operation.
pub fn customer_message(error: &VendingError) -> String {
    match error {
        VendingError::InsufficientChange { shortfall, .. } => format!(
            "You have not entered enough change to buy that product, please insert {} more to purchase your product.",
            format_money(*shortfall)
        ),
        VendingError::ChangeUnavailable { owed, .. } => format!(
            "Sorry, this machine cannot give {} in change. Please insert the exact amount.",
            format_money(*owed)
        ),
        VendingError::OutOfStock { message, .. } => message.clone(),
        VendingError::ChangeRejected { .. } => "We do not accept that coin.".to_string(),
        VendingError::PoweredOff => "The machine is switched off.".to_string(),
        other => other.to_string(),
    }
}
