use super::money::Money;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every coin the machine knows about, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Denomination {
    OnePence,
    TwoPence,
    FivePence,
    TenPence,
    TwentyPence,
    FiftyPence,
    OnePound,
    TwoPound,
}

impl Denomination {
    pub const ALL: [Denomination; 8] = [
        Denomination::OnePence,
        Denomination::TwoPence,
        Denomination::FivePence,
        Denomination::TenPence,
        Denomination::TwentyPence,
        Denomination::FiftyPence,
        Denomination::OnePound,
        Denomination::TwoPound,
    ];

    /// Worth of a single coin in minor units.
    pub const fn value(self) -> Money {
        Money::new(match self {
            Denomination::OnePence => 1,
            Denomination::TwoPence => 2,
            Denomination::FivePence => 5,
            Denomination::TenPence => 10,
            Denomination::TwentyPence => 20,
            Denomination::FiftyPence => 50,
            Denomination::OnePound => 100,
            Denomination::TwoPound => 200,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Denomination::OnePence => "ONE_PENCE",
            Denomination::TwoPence => "TWO_PENCE",
            Denomination::FivePence => "FIVE_PENCE",
            Denomination::TenPence => "TEN_PENCE",
            Denomination::TwentyPence => "TWENTY_PENCE",
            Denomination::FiftyPence => "FIFTY_PENCE",
            Denomination::OnePound => "ONE_POUND",
            Denomination::TwoPound => "TWO_POUND",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Denomination::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VendingError::InvalidAction(format!("unknown denomination '{wanted}'")))
    }
}

/// The denominations a machine takes as payment, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AcceptedSet(Vec<Denomination>);

impl AcceptedSet {
    pub fn new(denominations: impl IntoIterator<Item = Denomination>) -> Result<Self> {
        let mut accepted = Vec::new();
        for denomination in denominations {
            if accepted.contains(&denomination) {
                return Err(VendingError::DuplicateDenomination(denomination));
            }
            accepted.push(denomination);
        }
        if accepted.is_empty() {
            return Err(VendingError::EmptyAcceptedSet);
        }
        Ok(Self(accepted))
    }

    pub fn contains(&self, denomination: Denomination) -> bool {
        is_accepted(denomination, self)
    }

    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Denomination] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AcceptedSet {
    fn default() -> Self {
        Self(vec![
            Denomination::TenPence,
            Denomination::TwentyPence,
            Denomination::FiftyPence,
            Denomination::OnePound,
        ])
    }
}

pub fn is_accepted(denomination: Denomination, accepted: &AcceptedSet) -> bool {
    accepted.0.contains(&denomination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_unique_and_ascending() {
        let values: Vec<u64> = Denomination::ALL
            .iter()
            .map(|d| d.value().minor_units())
            .collect();
        assert_eq!(values, vec![1, 2, 5, 10, 20, 50, 100, 200]);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("TEN_PENCE".parse::<Denomination>().unwrap(), Denomination::TenPence);
        assert_eq!(" one_pound ".parse::<Denomination>().unwrap(), Denomination::OnePound);
        assert!(matches!(
            "THREE_PENCE".parse::<Denomination>(),
            Err(VendingError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_default_accepted_set() {
        let accepted = AcceptedSet::default();
        assert!(accepted.contains(Denomination::TenPence));
        assert!(accepted.contains(Denomination::OnePound));
        assert!(!accepted.contains(Denomination::OnePence));
        assert!(!accepted.contains(Denomination::TwoPound));
        assert_eq!(accepted.len(), 4);
    }

    #[test]
    fn test_accepted_set_rejects_duplicates() {
        let result = AcceptedSet::new([Denomination::TenPence, Denomination::TenPence]);
        assert!(matches!(
            result,
            Err(VendingError::DuplicateDenomination(Denomination::TenPence))
        ));
    }

    #[test]
    fn test_accepted_set_rejects_empty() {
        assert!(matches!(
            AcceptedSet::new(Vec::<Denomination>::new()),
            Err(VendingError::EmptyAcceptedSet)
        ));
    }

    #[test]
    fn test_accepted_set_keeps_declared_order() {
        let accepted =
            AcceptedSet::new([Denomination::OnePound, Denomination::FivePence]).unwrap();
        assert_eq!(
            accepted.as_slice(),
            &[Denomination::OnePound, Denomination::FivePence]
        );
    }

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&Denomination::TwentyPence).unwrap();
        assert_eq!(json, "\"TWENTY_PENCE\"");
    }
}
