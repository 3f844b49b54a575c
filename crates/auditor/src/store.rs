//! Read-only access to the audited product table.

use sqlx::SqlitePool;

use crate::error::AuditError;

/// Schema contract with the system that owns the table: table `productos`,
/// columns `nombre` (TEXT) and `stock` (INTEGER). Only these two columns are
/// guaranteed, so the ordering clause uses them and nothing else; report
/// output must be deterministic per run.
pub const LOW_STOCK_QUERY: &str =
    "SELECT nombre, stock FROM productos WHERE stock <= ? ORDER BY nombre, stock";

/// One matching row of the audited table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LowStockRow {
    #[sqlx(rename = "nombre")]
    pub name: String,
    pub stock: i64,
}

/// Fetch every product whose stock is at or below `threshold`.
///
/// Negative stock (data corruption upstream) satisfies the predicate and is
/// reported like any other low-stock row.
pub async fn fetch_low_stock(
    pool: &SqlitePool,
    threshold: i64,
) -> Result<Vec<LowStockRow>, AuditError> {
    let rows = sqlx::query_as::<_, LowStockRow>(LOW_STOCK_QUERY)
        .bind(threshold)
        .fetch_all(pool)
        .await?;

    tracing::debug!(threshold, matches = rows.len(), "queried product table");
    Ok(rows)
}
