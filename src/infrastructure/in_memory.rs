use crate::domain::ports::ProductStore;
use crate::domain::product::{Product, ProductCode};
use crate::error::{Result, VendingError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory product catalog.
///
/// Uses `Arc<RwLock<BTreeMap<ProductCode, Product>>>` so clones share the same
/// stock and listings come back in code order.
#[derive(Default, Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<BTreeMap<ProductCode, Product>>>,
}

impl InMemoryProductStore {
    /// Creates a new, empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with `products`.
    pub fn with_products(products: impl IntoIterator<Item = (ProductCode, Product)>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products.into_iter().collect())),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn store(&self, code: ProductCode, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(code, product);
        Ok(())
    }

    async fn get(&self, code: &ProductCode) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(code).cloned())
    }

    async fn take_one(&self, code: &ProductCode) -> Result<Product> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(code)
            .ok_or_else(|| VendingError::UnknownProduct(code.clone()))?;
        if product.is_out_of_stock() {
            return Err(VendingError::out_of_stock());
        }
        product.quantity_available -= 1;
        Ok(product.clone())
    }

    async fn all(&self) -> Result<Vec<(ProductCode, Product)>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .map(|(code, product)| (code.clone(), product.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::product::default_catalog;

    #[tokio::test]
    async fn test_in_memory_product_store() {
        let store = InMemoryProductStore::new();
        let product = Product::new("Crisps", Money::new(80), 2).unwrap();

        store.store("D".into(), product.clone()).await.unwrap();
        let retrieved = store.get(&"D".into()).await.unwrap().unwrap();
        assert_eq!(retrieved, product);

        assert!(store.get(&"Z".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_take_one_decrements_until_empty() {
        let store = InMemoryProductStore::with_products(default_catalog().unwrap());
        let code = ProductCode::new("C");

        let after = store.take_one(&code).await.unwrap();
        assert_eq!(after.quantity_available, 0);
        assert!(matches!(
            store.take_one(&code).await,
            Err(VendingError::OutOfStock { .. })
        ));
        assert!(store.get(&code).await.unwrap().unwrap().is_out_of_stock());
    }

    #[tokio::test]
    async fn test_take_one_unknown_product() {
        let store = InMemoryProductStore::new();
        assert!(matches!(
            store.take_one(&"Q".into()).await,
            Err(VendingError::UnknownProduct(_))
        ));
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_code() {
        let store = InMemoryProductStore::new();
        for code in ["C", "A", "B"] {
            let product = Product::new(code, Money::new(10), 1).unwrap();
            store.store(code.into(), product).await.unwrap();
        }
        let codes: Vec<String> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|(code, _)| code.to_string())
            .collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_clones_share_stock() {
        let store = InMemoryProductStore::with_products(default_catalog().unwrap());
        let other = store.clone();
        other.take_one(&"A".into()).await.unwrap();
        let a = store.get(&"A".into()).await.unwrap().unwrap();
        assert_eq!(a.quantity_available, 9);
    }
}
