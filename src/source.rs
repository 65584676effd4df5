//! Chat-log directory loader.
//!
//! Reads every `*.json` file in the log directory (newest first), keeps the
//! raw records, and builds the project index served next to them. A file that
//! cannot be read or is not a JSON object is logged and skipped; fields of the
//! wrong type inside a log read as missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::summary::types::{ProjectIndexEntry, RawConversationRecord};

/// Status attached to every project in the index.
pub const ACTIVE_STATUS: &str = "Active";

/// Wire payload of `GET /api/projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsPayload {
    #[serde(default)]
    pub projects: Vec<ProjectIndexEntry>,
    /// Raw records; elements that do not match the record shape are skipped by
    /// the consumer.
    #[serde(rename = "projectSummaries", default)]
    pub project_summaries: Vec<serde_json::Value>,
}

/// Load the payload from `dir`. A missing directory is an empty payload.
pub fn load_payload(dir: &Path, unknown_project: &str) -> Result<ProjectsPayload> {
    let mut payload = ProjectsPayload::default();
    for (value, record) in scan_logs(dir)? {
        let project = record.project_name().unwrap_or(unknown_project);
        count_update(&mut payload.projects, project);
        payload.project_summaries.push(value);
    }
    Ok(payload)
}

/// Every chat log in `dir` as a record, newest first.
pub fn load_records(dir: &Path) -> Result<Vec<RawConversationRecord>> {
    Ok(scan_logs(dir)?.into_iter().map(|(_, record)| record).collect())
}

/// Read each log file once, keeping the raw document next to its record.
fn scan_logs(dir: &Path) -> Result<Vec<(serde_json::Value, RawConversationRecord)>> {
    if !dir.exists() {
        tracing::info!(dir = %dir.display(), "chat log directory missing, serving empty payload");
        return Ok(Vec::new());
    }

    let files = list_log_files(dir)?;
    tracing::debug!(count = files.len(), dir = %dir.display(), "found chat log files");

    let mut logs = Vec::with_capacity(files.len());
    for path in files {
        let value = match read_record(&path) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable chat log");
                continue;
            }
        };
        if let Some(record) = RawConversationRecord::from_json(value.clone()) {
            logs.push((value, record));
        }
    }
    Ok(logs)
}

/// `*.json` files in `dir`, sorted by modification time, newest first.
fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list chat log directory {}", dir.display()))?;

    let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") || !path.is_file() {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((modified, path));
    }

    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

fn read_record(path: &Path) -> Result<serde_json::Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).context("invalid JSON in chat log")?;
    anyhow::ensure!(value.is_object(), "chat log is not a JSON object");
    Ok(value)
}

fn count_update(projects: &mut Vec<ProjectIndexEntry>, name: &str) {
    if let Some(entry) = projects.iter_mut().find(|p| p.name == name) {
        entry.updates += 1;
        return;
    }
    projects.push(ProjectIndexEntry {
        name: name.to_string(),
        updates: 1,
        status: Some(ACTIVE_STATUS.to_string()),
        description: None,
    });
}
