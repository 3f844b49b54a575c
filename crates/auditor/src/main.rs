use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use stockroom_auditor::{append_report, fetch_low_stock, render_report, resolve_threshold};

/// Audit log destination; one report block is appended per run.
const AUDIT_LOG: &str = "logs/auditoria_stock.txt";

/// Audited database, overridable via `STOCKROOM_AUDIT_DB`.
const DEFAULT_DB: &str = "data/inventario.db";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let threshold = resolve_threshold(std::env::args().nth(1).as_deref());
    let db_path =
        std::env::var("STOCKROOM_AUDIT_DB").unwrap_or_else(|_| DEFAULT_DB.to_string());

    // Read-only open: the auditor never writes to the product table, and a
    // missing database is a hard error rather than an implicitly created
    // empty one.
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .read_only(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("failed to open product database at {db_path}"))?;

    let rows = fetch_low_stock(&pool, threshold)
        .await
        .context("failed to query the product table")?;
    pool.close().await;

    let report = render_report(&rows, threshold, Utc::now());
    print!("{report}");

    append_report(Path::new(AUDIT_LOG), &report)
        .with_context(|| format!("failed to append the report to {AUDIT_LOG}"))?;

    Ok(())
}
