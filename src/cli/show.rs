//! CLI `show` command: detail view of one summary.

use anyhow::{Context, Result};

use crate::config::CodemindConfig;
use crate::summary::types::CodeChanges;

pub async fn show(config: &CodemindConfig, id: &str) -> Result<()> {
    let mut repo = super::load_repository(config).await?;
    let s = repo
        .select(id)
        .with_context(|| format!("no summary with id {id}"))?;

    println!("{}", s.title);
    println!("{}", "=".repeat(50));
    println!("  Project:        {}", s.project_name);
    println!("  Type:           {}", s.summary_type);
    println!("  Date:           {}", crate::export::format_timestamp(&s.timestamp));
    println!("  AI model:       {}", s.ai_model);
    println!("  Messages:       {}", s.message_count);
    if !s.participants.is_empty() {
        println!("  Participants:   {}", s.participants.join(", "));
    }
    if !s.tags.is_empty() {
        println!("  Tags:           {}", s.tags.join(", "));
    }
    println!();
    println!("Summary:");
    println!("  {}", s.summary);
    println!();
    println!("Impact:");
    println!("  {}", s.impact);

    if !s.functions.is_empty() {
        println!();
        println!("Features:");
        for f in &s.functions {
            println!("  - {f}");
        }
    }
    if !s.bug_fixes.is_empty() {
        println!();
        println!("Bug fixes:");
        for b in &s.bug_fixes {
            println!("  - {b}");
        }
    }

    println!();
    match &s.code_changes {
        CodeChanges::None => println!("{}", crate::summary::types::NO_CHANGES_TEXT),
        CodeChanges::SideBySide(change) => {
            println!("Code changes ({}):", change.tags.join(", "));
            println!("--- before");
            println!("{}", change.before);
            println!("+++ after");
            println!("{}", change.after);
        }
    }

    Ok(())
}
