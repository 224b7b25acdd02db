use super::change::select_change;
use super::denomination::{AcceptedSet, Denomination, is_accepted};
use super::money::Money;
use super::product::Product;
use super::tally::CoinTally;
use crate::config::MachineConfig;
use crate::error::{Result, VendingError};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Receipt for a completed purchase.
///
/// Handing one back is how the machine tells the product source to take exactly
/// one unit of `product` out of stock; the machine never touches a product itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vend {
    pub product: String,
    pub cost: Money,
    pub paid: Money,
    pub change: CoinTally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    /// No coins inserted.
    Idle,
    /// Coins inserted, no purchase completed yet.
    Accumulating,
}

/// A purchase that passed every check but has not been applied yet.
///
/// Only [`VendingMachine::prepare`] builds one, from the state it was handed
/// back to in [`VendingMachine::settle`]. Anything that happens to the machine in
/// between makes it stale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Settlement {
    vend: Vend,
    available: CoinTally,
}

impl Settlement {
    pub fn vend(&self) -> &Vend {
        &self.vend
    }
}

/// Read-only snapshot of the machine for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineStatus {
    pub powered_on: bool,
    pub state: TransactionState,
    pub balance: Money,
    pub accepted: AcceptedSet,
    pub inserted: CoinTally,
    pub available: CoinTally,
}

/// Transaction state of a single coin-operated machine.
///
/// The machine is idle while nothing is inserted and accumulating once a coin
/// has gone in. Refund, reset and a completed purchase bring it back to idle.
/// Customer operations (insert, refund, purchase) fail with
/// [`VendingError::PoweredOff`] while the power is off; reset and the power
/// switch are operator operations and work in any state.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    accepted: AcceptedSet,
    inserted: CoinTally,
    available: CoinTally,
    powered_on: bool,
    absorb_payments: bool,
}

impl VendingMachine {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            accepted: config.accepted,
            inserted: CoinTally::new(),
            available: config.float,
            powered_on: config.powered_on,
            absorb_payments: config.absorb_payments,
        }
    }

    pub fn accepted_change(&self) -> &AcceptedSet {
        &self.accepted
    }

    /// Change stock the machine could pay out.
    pub fn change_available(&self) -> &CoinTally {
        &self.available
    }

    /// Coins inserted during the current transaction.
    pub fn change_inserted(&self) -> &CoinTally {
        &self.inserted
    }

    pub fn balance(&self) -> Money {
        self.inserted.total()
    }

    pub fn state(&self) -> TransactionState {
        if self.inserted.is_empty() {
            TransactionState::Idle
        } else {
            TransactionState::Accumulating
        }
    }

    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    pub fn power_on(&mut self) {
        self.powered_on = true;
        info!("Machine powered on");
    }

    pub fn power_off(&mut self) {
        self.powered_on = false;
        info!(balance = %self.balance(), "Machine powered off");
    }

    pub fn accepts(&self, denomination: Denomination) -> bool {
        is_accepted(denomination, &self.accepted)
    }

    /// Adds one coin to the current transaction and returns the new balance.
    pub fn insert_change(&mut self, denomination: Denomination) -> Result<Money> {
        self.ensure_powered()?;
        if !self.accepts(denomination) {
            warn!(%denomination, "Coin rejected");
            return Err(VendingError::ChangeRejected { denomination });
        }
        self.inserted.add(denomination);
        let balance = self.balance();
        debug!(%denomination, %balance, "Coin accepted");
        Ok(balance)
    }

    /// Hands back every inserted coin. The balance afterwards is always zero.
    ///
    /// Callers that need to know which coins went back should read
    /// [`change_inserted`](Self::change_inserted) first.
    pub fn refund_change(&mut self) -> Result<Money> {
        self.ensure_powered()?;
        debug!(refunded = %self.balance(), "Refunding inserted change");
        self.inserted.clear();
        Ok(self.balance())
    }

    /// Empties both the inserted coins and the change stock.
    pub fn reset(&mut self) {
        info!(
            balance = %self.balance(),
            stock = %self.available.total(),
            "Machine reset"
        );
        self.inserted.clear();
        self.available.clear();
    }

    /// Buys one unit of `product` with the inserted coins.
    ///
    /// Checks run in a fixed order: power, stock, funds, then whether exact change
    /// can be paid. Any failure leaves the machine exactly as it was. On success
    /// the inserted coins are banked (into the change stock when absorbing), the
    /// change is paid out of the stock and the transaction is closed.
    pub fn purchase(&mut self, product: &Product) -> Result<Vend> {
        let settlement = self.prepare(product)?;
        Ok(self.settle(settlement))
    }

    /// Runs every purchase check and works out the change without touching the
    /// machine. Pass the result to [`settle`](Self::settle) to commit it.
    pub fn prepare(&self, product: &Product) -> Result<Settlement> {
        self.ensure_powered()?;

        if product.is_out_of_stock() {
            warn!(product = %product.name, "Product out of stock");
            return Err(VendingError::out_of_stock());
        }

        let paid = self.balance();
        let Some(owed) = paid.checked_sub(product.cost) else {
            let shortfall = paid.shortfall_to(product.cost);
            warn!(product = %product.name, %shortfall, "Insufficient change");
            return Err(VendingError::insufficient_change(shortfall));
        };

        let mut pool = self.available.clone();
        if self.absorb_payments {
            pool.absorb(&self.inserted);
        }
        let Some(change) = select_change(owed, &pool) else {
            warn!(product = %product.name, %owed, "Cannot make exact change");
            return Err(VendingError::change_unavailable(owed));
        };

        // `change` was drawn from `pool`, so the withdrawal cannot come up short
        let mut available = if self.absorb_payments {
            pool
        } else {
            self.available.clone()
        };
        available.withdraw(&change);

        Ok(Settlement {
            vend: Vend {
                product: product.name.clone(),
                cost: product.cost,
                paid,
                change,
            },
            available,
        })
    }

    /// Commits a purchase worked out by [`prepare`](Self::prepare): the change
    /// stock takes its new value and the transaction is closed.
    pub fn settle(&mut self, settlement: Settlement) -> Vend {
        let Settlement { vend, available } = settlement;
        self.available = available;
        self.inserted.clear();
        info!(product = %vend.product, paid = %vend.paid, change = %vend.change.total(), "Vend complete");
        vend
    }

    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            powered_on: self.powered_on,
            state: self.state(),
            balance: self.balance(),
            accepted: self.accepted.clone(),
            inserted: self.inserted.clone(),
            available: self.available.clone(),
        }
    }

    pub(crate) fn ensure_powered(&self) -> Result<()> {
        if self.powered_on {
            Ok(())
        } else {
            warn!("Operation refused while powered off");
            Err(VendingError::PoweredOff)
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}
