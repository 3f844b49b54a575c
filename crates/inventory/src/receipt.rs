//! Receipt rendering for recorded transactions.

use crate::{Product, Transaction};

const RULE: &str = "==============================";
const THIN_RULE: &str = "------------------------------";

/// Render a human-readable receipt for one transaction.
///
/// Pure function of its inputs; the timestamp comes from the transaction
/// itself, so the output is deterministic.
pub fn render(product: &Product, transaction: &Transaction) -> String {
    let units = transaction.units();
    let total = product.price() * units as f64;

    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\n      PURCHASE RECEIPT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Date        : {}\n",
        transaction.occurred_at().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Product ID  : {}\n", product.id()));
    out.push_str(&format!("Name        : {}\n", product.name()));
    out.push_str(&format!("Quantity    : {units}\n"));
    out.push_str(&format!("Unit price  : {:.2}\n", product.price()));
    out.push_str(THIN_RULE);
    out.push('\n');
    out.push_str(&format!("TOTAL       : {total:.2}\n"));
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Thank you for your purchase.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_core::ProductId;

    #[test]
    fn render_is_deterministic_and_totals_correctly() {
        let product = Product::new(ProductId::new("P1").unwrap(), "Widget", 9.99, 7).unwrap();
        let occurred_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let transaction = Transaction::new(product.id().clone(), -3, 4, occurred_at);

        let receipt = render(&product, &transaction);

        assert!(receipt.contains("Date        : 2024-03-01 12:30:00 UTC"));
        assert!(receipt.contains("Product ID  : P1"));
        assert!(receipt.contains("Name        : Widget"));
        assert!(receipt.contains("Quantity    : 3"));
        assert!(receipt.contains("Unit price  : 9.99"));
        assert!(receipt.contains("TOTAL       : 29.97"));

        // Same inputs, same output.
        assert_eq!(receipt, render(&product, &transaction));
    }

    #[test]
    fn render_handles_restocks() {
        let product = Product::new(ProductId::new("P2").unwrap(), "Gadget", 2.50, 12).unwrap();
        let occurred_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let transaction = Transaction::new(product.id().clone(), 5, 12, occurred_at);

        let receipt = render(&product, &transaction);
        assert!(receipt.contains("Quantity    : 5"));
        assert!(receipt.contains("TOTAL       : 12.50"));
    }
}
