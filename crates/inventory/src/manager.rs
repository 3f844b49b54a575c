use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::{Product, Transaction, receipt};

/// Owns the in-memory product collection and the append-only transaction log.
///
/// The manager is the sole mutator of inventory state between load and save.
/// Every operation validates before mutating: either the whole operation
/// succeeds and state changes, or it fails and state is unchanged. There are
/// no partial updates.
#[derive(Debug, Default)]
pub struct InventoryManager {
    products: BTreeMap<ProductId, Product>,
    transactions: Vec<Transaction>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager from previously persisted products.
    ///
    /// Products are keyed by their own id; the transaction log starts empty
    /// (transactions belong to the process lifetime, not the snapshot).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id().clone(), product))
            .collect();
        Self {
            products,
            transactions: Vec::new(),
        }
    }

    /// Create a product and insert it into the collection.
    ///
    /// Fails with [`DomainError::Validation`] when the id is blank or already
    /// taken, the name is blank, the price is negative or non-finite, or the
    /// stock is negative. On failure the collection is unchanged.
    pub fn add_product(
        &mut self,
        id: &str,
        name: &str,
        price: f64,
        stock: i64,
    ) -> DomainResult<&Product> {
        let id = ProductId::new(id)?;
        let product = Product::new(id.clone(), name, price, stock)?;
        match self.products.entry(id) {
            Entry::Occupied(entry) => Err(DomainError::validation(format!(
                "product id already exists: {}",
                entry.key()
            ))),
            Entry::Vacant(entry) => Ok(entry.insert(product)),
        }
    }

    /// Adjust stock by `delta` units: negative sells, positive restocks.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and with
    /// [`DomainError::InsufficientStock`] when a sale exceeds the available
    /// stock (the sale is rejected, never clamped). On success the stock is
    /// updated, a [`Transaction`] is appended, and the new level is returned.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> DomainResult<i64> {
        let id = ProductId::new(id)?;
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(id.clone()))?;

        if delta == 0 {
            return Err(DomainError::validation("stock delta cannot be zero"));
        }

        let new_stock = product
            .stock()
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock adjustment overflows"))?;
        if new_stock < 0 {
            return Err(DomainError::insufficient_stock(
                delta.saturating_abs(),
                product.stock(),
            ));
        }

        product.apply_stock(new_stock);
        self.transactions
            .push(Transaction::new(id, delta, new_stock, Utc::now()));
        Ok(new_stock)
    }

    /// Render the receipt for a recorded transaction.
    ///
    /// Fails with [`DomainError::NotFound`] if the referenced product is no
    /// longer in the collection.
    pub fn generate_receipt(&self, transaction: &Transaction) -> DomainResult<String> {
        let product = self
            .products
            .get(transaction.product_id())
            .ok_or_else(|| DomainError::not_found(transaction.product_id().clone()))?;
        Ok(receipt::render(product, transaction))
    }

    /// Look up a product by raw id. A blank id matches nothing.
    pub fn get(&self, id: &str) -> Option<&Product> {
        let id = ProductId::new(id).ok()?;
        self.products.get(&id)
    }

    /// Lazy, restartable iteration over all products, ordered by id.
    pub fn list_products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Read-only view of the append-only transaction log.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
