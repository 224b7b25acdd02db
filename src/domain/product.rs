use super::money::Money;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection code shown on the machine's keypad (e.g. `A`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A snapshot of a product as the product source currently sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub cost: Money,
    pub quantity_available: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, cost: Money, quantity_available: u32) -> Result<Self> {
        if cost.is_zero() {
            return Err(VendingError::InvalidProduct(
                "Cost must be positive".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            cost,
            quantity_available,
        })
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity_available == 0
    }
}

/// The catalog a freshly installed machine ships with.
pub fn default_catalog() -> Result<Vec<(ProductCode, Product)>> {
    [
        ("A", "A nice product", 60, 10),
        ("B", "A berry nice product", 100, 4),
        ("C", "A cherry berry nice product", 170, 1),
    ]
    .into_iter()
    .map(|(code, name, cost, quantity)| {
        Ok((ProductCode::new(code), Product::new(name, Money::new(cost), quantity)?))
    })
    .collect()
}
