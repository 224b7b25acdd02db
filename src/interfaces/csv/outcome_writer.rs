use crate::application::service::Outcome;
use crate::domain::action::Action;
use crate::domain::money::Money;
use crate::error::{Result, VendingError};
use crate::interfaces::display::{customer_message, describe_coins, format_money};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    step: usize,
    action: &'a str,
    argument: String,
    outcome: &'a str,
    balance: String,
    detail: String,
}

/// Writes one CSV row per processed action.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Records the result of `action`, with the balance as it stands afterwards.
    pub fn write(
        &mut self,
        step: usize,
        action: &Action,
        result: &Result<Outcome>,
        balance: Money,
    ) -> Result<()> {
        let (outcome, detail) = match result {
            Ok(outcome) => ("ok", describe_outcome(outcome)),
            Err(e) => ("rejected", customer_message(e)),
        };
        self.writer.serialize(OutcomeRow {
            step,
            action: action.name(),
            argument: action.argument(),
            outcome,
            balance: format_money(balance),
            detail,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(VendingError::from)
    }
}

fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::PoweredOn => "powered on".to_string(),
        Outcome::PoweredOff => "powered off".to_string(),
        Outcome::Inserted(balance) => format!("balance {}", format_money(*balance)),
        Outcome::Refunded(coins) => format!(
            "refunded {} ({})",
            format_money(coins.total()),
            describe_coins(coins)
        ),
        Outcome::Vended(vend) => format!(
            "vended {}; change {} ({})",
            vend.product,
            format_money(vend.change.total()),
            describe_coins(&vend.change)
        ),
        Outcome::Reset => "machine reset".to_string(),
    }
}
