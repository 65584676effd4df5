//! CLI `list` command: filtered summary list.

use anyhow::Result;

use crate::config::CodemindConfig;
use crate::repository::SummaryFilter;

pub async fn list(config: &CodemindConfig, filter: &SummaryFilter) -> Result<()> {
    let repo = super::load_repository(config).await?;
    let matches = repo.filter(filter);

    println!("{} of {} update(s)\n", matches.len(), repo.summaries().len());

    for s in matches {
        println!("  {}  [{}] {}", s.id, s.summary_type, s.title);
        println!("     {} · {}", s.project_name, crate::export::format_timestamp(&s.timestamp));
        if !s.summary.is_empty() {
            println!("     {}", super::preview(&s.summary, 100));
        }
        if !s.tags.is_empty() {
            println!("     tags: {}", s.tags.join(", "));
        }
        println!();
    }

    Ok(())
}
