//! CLI `export` command: write one summary as Markdown, text, or JSON.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CodemindConfig;
use crate::export::{export_path, render, ExportFormat};

/// Export the summary with `id`. Writes to stdout when `to_stdout` is set,
/// otherwise into `output_dir` (or the configured export directory).
pub async fn export(
    config: &CodemindConfig,
    id: &str,
    format: ExportFormat,
    output_dir: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    let repo = super::load_repository(config).await?;
    let summary = repo
        .get(id)
        .with_context(|| format!("no summary with id {id}"))?;

    let rendered = render(summary, format, chrono::Utc::now())?;

    if to_stdout {
        print!("{rendered}");
        return Ok(());
    }

    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.resolved_output_dir());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export dir: {}", dir.display()))?;

    let path = export_path(&dir, summary, format);
    std::fs::write(&path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;

    eprintln!("Exported {} to {}", summary.id, path.display());
    Ok(())
}
