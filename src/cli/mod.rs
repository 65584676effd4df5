pub mod classify;
pub mod export;
pub mod list;
pub mod projects;
pub mod show;

use anyhow::{Context, Result};

use crate::config::CodemindConfig;
use crate::repository::ProjectRepository;
use crate::summary::Classifier;

/// Fetch the configured endpoint and classify everything it returns.
///
/// A load failure is fatal for the command: the error is reported once and
/// the user re-runs it.
pub async fn load_repository(config: &CodemindConfig) -> Result<ProjectRepository> {
    let classifier = Classifier::new(config.classifier.clone());
    let client = reqwest::Client::new();
    ProjectRepository::fetch(&client, &config.source.endpoint, &classifier)
        .await
        .with_context(|| format!("could not load projects from {}", config.source.endpoint))
}

/// Cut `text` to `max` characters, appending `...` when shortened.
pub(crate) fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
