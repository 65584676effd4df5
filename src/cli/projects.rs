//! CLI `projects` command: print the project index.

use anyhow::Result;

use crate::config::CodemindConfig;

pub async fn projects(config: &CodemindConfig) -> Result<()> {
    let repo = super::load_repository(config).await?;

    if repo.projects().is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!("{:<32} {:>8}  {}", "Project", "Updates", "Status");
    println!("{}", "=".repeat(52));
    for p in repo.projects() {
        println!(
            "{:<32} {:>8}  {}",
            p.name,
            p.updates,
            p.status.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
