//! Writing run metrics to a JSON file.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// One metrics document.
#[derive(Serialize)]
pub struct MetricsEntry<'a, T: Serialize> {
    pub timestamp: String,
    pub command: &'a str,
    pub metrics: &'a T,
}

/// Write `metrics` for `command` to `path` as pretty-printed JSON.
pub fn emit_metrics<T: Serialize>(path: &Path, command: &str, metrics: &T) -> anyhow::Result<()> {
    let entry = MetricsEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        command,
        metrics,
    };
    let json = serde_json::to_string_pretty(&entry).context("Failed to serialize metrics")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write metrics to {}", path.display()))
}
