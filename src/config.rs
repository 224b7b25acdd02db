//! Machine configuration.

use crate::domain::denomination::AcceptedSet;
use crate::domain::tally::CoinTally;

/// Number of coins of each accepted denomination a machine starts with.
pub const DEFAULT_FLOAT: u32 = 5;

/// Everything a machine needs at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineConfig {
    /// Denominations accepted as payment.
    pub accepted: AcceptedSet,
    /// Change stock loaded into the machine.
    pub float: CoinTally,
    /// Initial power state.
    pub powered_on: bool,
    /// When set, coins paid for a vend join the change stock.
    /// Otherwise they drop into the cash box and are never paid back out.
    pub absorb_payments: bool,
}

impl MachineConfig {
    pub fn new(accepted: AcceptedSet, float_per_denomination: u32) -> Self {
        let float = CoinTally::uniform(accepted.iter(), float_per_denomination);
        Self {
            accepted,
            float,
            powered_on: true,
            absorb_payments: true,
        }
    }

    pub fn powered_on(mut self, powered_on: bool) -> Self {
        self.powered_on = powered_on;
        self
    }

    pub fn absorb_payments(mut self, absorb: bool) -> Self {
        self.absorb_payments = absorb;
        self
    }

    pub fn with_float(mut self, float: CoinTally) -> Self {
        self.float = float;
        self
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new(AcceptedSet::default(), DEFAULT_FLOAT)
    }
}
