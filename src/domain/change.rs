use super::denomination::Denomination;
use super::money::Money;
use super::tally::CoinTally;

/// Picks coins from `pool` that add up to exactly `owed`.
///
/// Greedy, largest denomination first, never taking more coins of a kind than
/// the pool holds. Deterministic for a given pool. Returns `None` when the walk
/// cannot land on the exact amount; with a limited pool that can happen even
/// though some other combination would have worked (owing 60 from one 50 and
/// three 20s, for instance).
pub fn select_change(owed: Money, pool: &CoinTally) -> Option<CoinTally> {
    let mut remaining = owed.minor_units();
    let mut change = CoinTally::new();

    for denomination in Denomination::ALL.iter().rev().copied() {
        if remaining == 0 {
            break;
        }
        let value = denomination.value().minor_units();
        let wanted = remaining / value;
        let available = u64::from(pool.count(denomination));
        let taken = wanted.min(available);
        if taken > 0 {
            // taken <= pool count, which is a u32
            let taken = taken as u32;
            change.add_many(denomination, taken);
            remaining -= value * u64::from(taken);
        }
    }

    (remaining == 0).then_some(change)
}
