//! Single-summary export to Markdown, plain text, or JSON.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::summary::types::{CodeChanges, ProjectSummary, NO_CHANGES_TEXT};

const EXPORTED_BY: &str = "CodeMind";
const EXPORT_VERSION: &str = "1.0";
const FOOTER: &str = "Generated by CodeMind - Development Intelligence";
const MAX_FILENAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[value(name = "md")]
    Markdown,
    #[value(name = "txt")]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// JSON export envelope: the summary fields plus export metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    #[serde(flatten)]
    summary: &'a ProjectSummary,
    exported_at: String,
    exported_by: &'static str,
    version: &'static str,
}

/// Render `summary` in `format`. `now` stamps the JSON export.
pub fn render(summary: &ProjectSummary, format: ExportFormat, now: DateTime<Utc>) -> Result<String> {
    Ok(match format {
        ExportFormat::Markdown => render_markdown(summary),
        ExportFormat::Text => render_text(summary),
        ExportFormat::Json => render_json(summary, now)?,
    })
}

pub fn render_markdown(summary: &ProjectSummary) -> String {
    format!(
        "# {title}

## Project Information
- **Project:** {project}
- **Type:** {kind}
- **Date:** {date}
- **AI Model:** {model}
- **Tags:** {tags}

## Summary
{summary}

## New Features and Capabilities
{functions}

## Bug Fixes
{bug_fixes}

## Impact and Results
{impact}

## Code Changes
```
{code}
```

## Conversation Details
- **Message Count:** {count}
- **Participants:** {participants}

---
*{FOOTER}*
",
        title = summary.title,
        project = summary.project_name,
        kind = summary.summary_type,
        date = format_timestamp(&summary.timestamp),
        model = summary.ai_model,
        tags = summary.tags.join(", "),
        summary = summary.summary,
        functions = bullet_list(&summary.functions, "-", "No specific features identified"),
        bug_fixes = bullet_list(&summary.bug_fixes, "-", "No specific bug fixes identified"),
        impact = summary.impact,
        code = code_block(&summary.code_changes),
        count = summary.message_count,
        participants = summary.participants.join(", "),
    )
}

pub fn render_text(summary: &ProjectSummary) -> String {
    format!(
        "{title}
{underline}

Project: {project}
Type: {kind}
Date: {date}
AI Model: {model}
Tags: {tags}

SUMMARY
-------
{summary}

NEW FEATURES AND CAPABILITIES
-----------------------------
{functions}

BUG FIXES
---------
{bug_fixes}

IMPACT AND RESULTS
------------------
{impact}

CODE CHANGES
------------
{code}

CONVERSATION DETAILS
--------------------
Message Count: {count}
Participants: {participants}

{FOOTER}
",
        title = summary.title,
        underline = "=".repeat(summary.title.chars().count()),
        project = summary.project_name,
        kind = summary.summary_type,
        date = format_timestamp(&summary.timestamp),
        model = summary.ai_model,
        tags = summary.tags.join(", "),
        summary = summary.summary,
        functions = bullet_list(&summary.functions, "•", "No specific features identified"),
        bug_fixes = bullet_list(&summary.bug_fixes, "•", "No specific bug fixes identified"),
        impact = summary.impact,
        code = code_block(&summary.code_changes),
        count = summary.message_count,
        participants = summary.participants.join(", "),
    )
}

pub fn render_json(summary: &ProjectSummary, now: DateTime<Utc>) -> Result<String> {
    let export = JsonExport {
        summary,
        exported_at: now.to_rfc3339(),
        exported_by: EXPORTED_BY,
        version: EXPORT_VERSION,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

fn bullet_list(items: &[String], bullet: &str, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items
        .iter()
        .map(|item| format!("{bullet} {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn code_block(changes: &CodeChanges) -> String {
    match changes {
        CodeChanges::None => NO_CHANGES_TEXT.to_string(),
        CodeChanges::SideBySide(s) => format!("Before:\n{}\n\nAfter:\n{}", s.before, s.after),
    }
}

/// Format an ISO 8601 timestamp as `Mar 1, 10:05 AM`. Unparseable input is
/// returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    const DISPLAY: &str = "%b %-d, %I:%M %p";

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format(DISPLAY).to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(DISPLAY).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Turn a title into a file stem: strip everything but ASCII alphanumerics,
/// whitespace, `-` and `_`, collapse whitespace runs into `-`, lowercase, and
/// cut to 50 characters.
pub fn sanitize_filename(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(c.to_ascii_lowercase());
            in_space = false;
        }
    }

    out.chars().take(MAX_FILENAME_LEN).collect()
}

/// Path the export of `summary` is written to inside `dir`.
pub fn export_path(dir: &Path, summary: &ProjectSummary, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}.{}", sanitize_filename(&summary.title), format.extension()))
}
