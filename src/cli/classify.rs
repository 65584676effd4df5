//! CLI `classify` command: summarize a single chat-log file offline.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CodemindConfig;
use crate::summary::types::RawConversationRecord;
use crate::summary::Classifier;

/// Read one raw record from `file` and print its summary as JSON.
pub fn classify(config: &CodemindConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read chat log: {}", file.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&json).context("failed to parse chat log JSON")?;
    let record = RawConversationRecord::from_json(value)
        .context("chat log is not a JSON object")?;

    let classifier = Classifier::new(config.classifier.clone());
    let summary = classifier.summarize(&record, 0);

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
