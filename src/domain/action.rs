use super::denomination::Denomination;
use super::product::ProductCode;
use crate::error::VendingError;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    PowerOn,
    PowerOff,
    Insert,
    Purchase,
    Refund,
    Reset,
}

/// One row of an action script, as read from CSV.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ActionRecord {
    pub action: ActionType,
    pub argument: Option<String>,
}

/// Something a customer or operator does to the machine.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    PowerOn,
    PowerOff,
    Insert(Denomination),
    Purchase(ProductCode),
    Refund,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::PowerOn => "power_on",
            Action::PowerOff => "power_off",
            Action::Insert(_) => "insert",
            Action::Purchase(_) => "purchase",
            Action::Refund => "refund",
            Action::Reset => "reset",
        }
    }

    pub fn argument(&self) -> String {
        match self {
            Action::Insert(denomination) => denomination.to_string(),
            Action::Purchase(code) => code.to_string(),
            _ => String::new(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Insert(_) | Action::Purchase(_) => {
                write!(f, "{} {}", self.name(), self.argument())
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl TryFrom<ActionRecord> for Action {
    type Error = VendingError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let argument = record
            .argument
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        match (record.action, argument) {
            (ActionType::Insert, Some(arg)) => Ok(Action::Insert(arg.parse()?)),
            (ActionType::Purchase, Some(arg)) => Ok(Action::Purchase(ProductCode::new(arg))),
            (ActionType::Insert, None) => Err(VendingError::InvalidAction(
                "insert requires a denomination".to_string(),
            )),
            (ActionType::Purchase, None) => Err(VendingError::InvalidAction(
                "purchase requires a product code".to_string(),
            )),
            (ActionType::PowerOn, _) => Ok(Action::PowerOn),
            (ActionType::PowerOff, _) => Ok(Action::PowerOff),
            (ActionType::Refund, _) => Ok(Action::Refund),
            (ActionType::Reset, _) => Ok(Action::Reset),
        }
    }
}
