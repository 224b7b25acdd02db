use super::product::{Product, ProductCode};
use crate::error::Result;
use async_trait::async_trait;

/// Source of product snapshots and owner of their stock levels.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn store(&self, code: ProductCode, product: Product) -> Result<()>;
    async fn get(&self, code: &ProductCode) -> Result<Option<Product>>;
    /// Takes exactly one unit out of stock and returns the updated snapshot.
    async fn take_one(&self, code: &ProductCode) -> Result<Product>;
    /// Every product, ordered by code.
    async fn all(&self) -> Result<Vec<(ProductCode, Product)>>;
}

pub type ProductStoreBox = Box<dyn ProductStore>;
