use crate::config::MachineConfig;
use crate::domain::action::Action;
use crate::domain::denomination::Denomination;
use crate::domain::machine::{MachineStatus, Vend, VendingMachine};
use crate::domain::money::Money;
use crate::domain::ports::ProductStoreBox;
use crate::domain::product::{Product, ProductCode};
use crate::domain::tally::CoinTally;
use crate::error::{Result, VendingError};
use serde::Serialize;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::warn;

/// What an [`Action`] did to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PoweredOn,
    PoweredOff,
    /// A coin was accepted; carries the new balance.
    Inserted(Money),
    /// The listed coins went back to the customer.
    Refunded(CoinTally),
    Vended(Vend),
    Reset,
}

/// Final state written out after a script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    #[serde(flatten)]
    pub machine: MachineStatus,
    pub products: BTreeMap<ProductCode, Product>,
}

/// Front door to one physical machine.
///
/// `MachineService` owns the machine behind a single mutex, so an insert,
/// purchase or refund always runs against a consistent balance even when
/// several callers share the service. It also wires successful vends to the
/// product store, which owns stock levels.
pub struct MachineService {
    machine: Mutex<VendingMachine>,
    products: ProductStoreBox,
}

impl MachineService {
    /// Creates a new `MachineService`.
    ///
    /// # Arguments
    ///
    /// * `config` - Accepted coins, float and power policy for the machine.
    /// * `products` - The store the machine sells from.
    pub fn new(config: MachineConfig, products: ProductStoreBox) -> Self {
        Self {
            machine: Mutex::new(VendingMachine::new(config)),
            products,
        }
    }

    pub async fn insert(&self, denomination: Denomination) -> Result<Money> {
        self.machine.lock().await.insert_change(denomination)
    }

    /// Refunds the current transaction and returns the coins handed back.
    pub async fn refund(&self) -> Result<CoinTally> {
        let mut machine = self.machine.lock().await;
        let returned = machine.change_inserted().clone();
        machine.refund_change()?;
        Ok(returned)
    }

    /// Buys the product stored under `code`.
    ///
    /// A powered-off machine refuses before the store is asked anything. The
    /// machine then checks the payment and works out the change, the store takes
    /// one unit out of stock, and only then is the payment settled. If the store
    /// fails the customer keeps their coins. All of it happens under the machine
    /// lock.
    pub async fn purchase(&self, code: &ProductCode) -> Result<Vend> {
        let mut machine = self.machine.lock().await;
        machine.ensure_powered()?;
        let product = self
            .products
            .get(code)
            .await?
            .ok_or_else(|| VendingError::UnknownProduct(code.clone()))?;

        let settlement = machine.prepare(&product)?;
        if let Err(e) = self.products.take_one(code).await {
            warn!(%code, error = %e, "Stock could not be updated, payment left in place");
            return Err(e);
        }
        Ok(machine.settle(settlement))
    }

    pub async fn reset(&self) {
        self.machine.lock().await.reset();
    }

    pub async fn power_on(&self) {
        self.machine.lock().await.power_on();
    }

    pub async fn power_off(&self) {
        self.machine.lock().await.power_off();
    }

    pub async fn balance(&self) -> Money {
        self.machine.lock().await.balance()
    }

    pub async fn status(&self) -> MachineStatus {
        self.machine.lock().await.status()
    }

    pub async fn products(&self) -> Result<Vec<(ProductCode, Product)>> {
        self.products.all().await
    }

    /// Applies a scripted action.
    pub async fn execute(&self, action: Action) -> Result<Outcome> {
        match action {
            Action::PowerOn => {
                self.power_on().await;
                Ok(Outcome::PoweredOn)
            }
            Action::PowerOff => {
                self.power_off().await;
                Ok(Outcome::PoweredOff)
            }
            Action::Insert(denomination) => self.insert(denomination).await.map(Outcome::Inserted),
            Action::Purchase(code) => self.purchase(&code).await.map(Outcome::Vended),
            Action::Refund => self.refund().await.map(Outcome::Refunded),
            Action::Reset => {
                self.reset().await;
                Ok(Outcome::Reset)
            }
        }
    }

    /// Machine status together with the stock level of every product.
    pub async fn report(&self) -> Result<StatusReport> {
        let machine = self.status().await;
        let products = self.products().await?.into_iter().collect();
        Ok(StatusReport { machine, products })
    }
}
