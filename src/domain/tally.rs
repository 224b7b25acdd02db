use super::denomination::Denomination;
use super::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A count of coins per denomination.
///
/// Used both for the coins inserted during the current transaction and for the
/// change stock the machine can pay out. Denominations with a zero count are
/// never stored, so an empty tally has no entries at all. Counts saturate at
/// `u32::MAX` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinTally(BTreeMap<Denomination, u32>);

impl CoinTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally holding `count` coins of each of the given denominations.
    pub fn uniform(denominations: impl IntoIterator<Item = Denomination>, count: u32) -> Self {
        let mut tally = Self::new();
        for denomination in denominations {
            tally.add_many(denomination, count);
        }
        tally
    }

    pub fn add(&mut self, denomination: Denomination) {
        self.add_many(denomination, 1);
    }

    pub fn add_many(&mut self, denomination: Denomination, count: u32) {
        if count > 0 {
            let held = self.0.entry(denomination).or_insert(0);
            *held = held.saturating_add(count);
        }
    }

    /// Takes `count` coins out. Returns false and leaves the tally untouched when
    /// there are not enough of them.
    pub fn remove_many(&mut self, denomination: Denomination, count: u32) -> bool {
        let held = self.count(denomination);
        if held < count {
            return false;
        }
        if held == count {
            self.0.remove(&denomination);
        } else if count > 0 {
            self.0.insert(denomination, held - count);
        }
        true
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Sum of count × value over every denomination.
    pub fn total(&self) -> Money {
        self.iter().map(|(d, count)| d.value() * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Adds every coin of `other` to this tally.
    pub fn absorb(&mut self, other: &CoinTally) {
        for (denomination, count) in other.iter() {
            self.add_many(denomination, count);
        }
    }

    /// Removes every coin of `other`, or nothing at all if any denomination is short.
    pub fn withdraw(&mut self, other: &CoinTally) -> bool {
        if other.iter().any(|(d, count)| self.count(d) < count) {
            return false;
        }
        for (denomination, count) in other.iter() {
            self.remove_many(denomination, count);
        }
        true
    }

    /// Entries in ascending denomination order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Denomination, u32)> + '_ {
        self.0.iter().map(|(d, count)| (*d, *count))
    }
}

impl FromIterator<(Denomination, u32)> for CoinTally {
    fn from_iter<I: IntoIterator<Item = (Denomination, u32)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (denomination, count) in iter {
            tally.add_many(denomination, count);
        }
        tally
    }
}
