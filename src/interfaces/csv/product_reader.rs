use crate::domain::money::Money;
use crate::domain::product::{Product, ProductCode};
use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ProductRecord {
    code: String,
    name: String,
    cost: u64,
    quantity: u32,
}

/// Reads a product catalog (`code, name, cost, quantity`) from CSV.
///
/// Costs are whole minor units.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn products(self) -> impl Iterator<Item = Result<(ProductCode, Product)>> {
        self.reader.into_deserialize().map(|result| {
            let record: ProductRecord = result.map_err(VendingError::from)?;
            if record.code.trim().is_empty() {
                return Err(VendingError::InvalidProduct(format!(
                    "'{}' has no code",
                    record.name
                )));
            }
            let product = Product::new(record.name, Money::new(record.cost), record.quantity)?;
            Ok((ProductCode::new(record.code), product))
        })
    }
}
