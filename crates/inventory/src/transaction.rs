use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, TransactionId};

/// A recorded stock adjustment: a sale (negative delta) or a restock
/// (positive delta), with the stock level that resulted from it.
///
/// Transactions are append-only. Once created they are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    product_id: ProductId,
    delta: i64,
    resulting_stock: i64,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        product_id: ProductId,
        delta: i64,
        resulting_stock: i64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            product_id,
            delta,
            resulting_stock,
            occurred_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn resulting_stock(&self) -> i64 {
        self.resulting_stock
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Units moved, regardless of direction.
    pub fn units(&self) -> i64 {
        self.delta.saturating_abs()
    }

    pub fn is_sale(&self) -> bool {
        self.delta < 0
    }
}
