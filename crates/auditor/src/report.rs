//! Low-stock report rendering and threshold handling.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::store::LowStockRow;

/// Threshold used when none (or an invalid one) is supplied.
pub const DEFAULT_THRESHOLD: i64 = 5;

const RULE: &str = "==============================";

/// Resolve the threshold from an optional CLI argument.
///
/// Anything that does not parse as an integer falls back to the default
/// instead of aborting; a typo in a scheduled invocation should not kill the
/// run.
pub fn resolve_threshold(arg: Option<&str>) -> i64 {
    let Some(raw) = arg else {
        return DEFAULT_THRESHOLD;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(raw, "invalid threshold argument, using default {DEFAULT_THRESHOLD}");
        DEFAULT_THRESHOLD
    })
}

/// Render one report block: fixed header, timestamp, threshold, then either
/// a line per matching product or an explicit no-matches line.
///
/// Pure function of its inputs; row order is whatever the query produced.
pub fn render_report(rows: &[LowStockRow], threshold: i64, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nLOW STOCK ALERT\n");
    out.push_str(&format!(
        "Timestamp: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!("Threshold: {threshold}\n"));
    out.push_str(RULE);
    out.push('\n');

    if rows.is_empty() {
        out.push_str("No low-stock products.\n");
    } else {
        for row in rows {
            out.push_str(&format!("- {} | stock: {}\n", row.name, row.stock));
        }
    }

    out.push('\n');
    out
}
