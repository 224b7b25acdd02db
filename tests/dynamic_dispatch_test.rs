use vending_machine::domain::money::Money;
use vending_machine::domain::ports::ProductStoreBox;
use vending_machine::domain::product::{Product, ProductCode, default_catalog};
use vending_machine::infrastructure::in_memory::InMemoryProductStore;

#[tokio::test]
async fn test_store_as_trait_object() {
    let store: ProductStoreBox = Box::new(InMemoryProductStore::with_products(default_catalog().unwrap()));

    let product = Product::new("Mints", Money::new(45), 8).unwrap();

    // Verify Send + Sync by spawning a task
    let handle = tokio::spawn(async move {
        store.store(ProductCode::new("M"), product).await.unwrap();
        store.take_one(&ProductCode::new("M")).await.unwrap();
        store.all().await.unwrap()
    });

    let all = handle.await.unwrap();
    assert_eq!(all.len(), 4);
    let (_, mints) = all.iter().find(|(code, _)| code.as_str() == "M").unwrap();
    assert_eq!(mints.quantity_available, 7);
}
