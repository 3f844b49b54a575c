use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId};

/// A unit of inventory: identity, display name, unit price, stock on hand.
///
/// Construction always goes through [`Product::new`], so a `Product` that
/// exists satisfies every invariant: non-blank name, finite non-negative
/// price, non-negative stock. Deserialization funnels through the same
/// validation, so invalid persisted records never enter the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price,
            stock,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Replace the stock level. Callers have already validated `stock >= 0`.
    pub(crate) fn apply_stock(&mut self, stock: i64) {
        debug_assert!(stock >= 0);
        self.stock = stock;
    }
}

/// Raw persisted shape of a product, validated on the way in.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.id, record.name, record.price, record.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn new_trims_name() {
        let product = Product::new(id("P1"), "  Widget  ", 9.99, 10).unwrap();
        assert_eq!(product.name(), "Widget");
    }

    #[test]
    fn new_rejects_invalid_values() {
        assert!(Product::new(id("P1"), "   ", 1.0, 1).is_err());
        assert!(Product::new(id("P1"), "Widget", -0.01, 1).is_err());
        assert!(Product::new(id("P1"), "Widget", f64::NAN, 1).is_err());
        assert!(Product::new(id("P1"), "Widget", 1.0, -1).is_err());
    }

    #[test]
    fn serde_round_trips_losslessly() {
        let product = Product::new(id("P1"), "Widget", 9.99, 10).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn deserialize_rejects_invariant_violations() {
        let negative_stock = r#"{"id":"P1","name":"Widget","price":9.99,"stock":-3}"#;
        assert!(serde_json::from_str::<Product>(negative_stock).is_err());

        let blank_name = r#"{"id":"P1","name":"  ","price":9.99,"stock":3}"#;
        assert!(serde_json::from_str::<Product>(blank_name).is_err());
    }
}
