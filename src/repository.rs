//! In-memory project repository.
//!
//! [`ProjectRepository::fetch`] performs the single GET against the projects
//! endpoint, classifies every record on load, and replaces whatever was held
//! before. Filtering and selection run over the loaded collection.

use reqwest::StatusCode;
use thiserror::Error;

use crate::source::ProjectsPayload;
use crate::summary::types::{ProjectIndexEntry, ProjectSummary, RawConversationRecord, SummaryType};
use crate::summary::Classifier;

/// Fatal load failure. There is no retry; reloading is the only recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch project data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to fetch project data: HTTP {0}")]
    Status(StatusCode),

    #[error("project data is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Filters ANDed together by [`ProjectRepository::filter`]. `None` / empty
/// means "all".
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    /// Case-insensitive substring over title, summary, project name and tags.
    pub query: String,
    /// Exact project name.
    pub project: Option<String>,
    /// Exact summary type.
    pub summary_type: Option<SummaryType>,
}

impl SummaryFilter {
    pub fn matches(&self, summary: &ProjectSummary) -> bool {
        self.matches_query(summary)
            && self
                .project
                .as_ref()
                .map_or(true, |p| summary.project_name == *p)
            && self
                .summary_type
                .map_or(true, |t| summary.summary_type == t)
    }

    fn matches_query(&self, summary: &ProjectSummary) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        summary.title.to_lowercase().contains(&query)
            || summary.summary.to_lowercase().contains(&query)
            || summary.project_name.to_lowercase().contains(&query)
            || summary
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectRepository {
    projects: Vec<ProjectIndexEntry>,
    summaries: Vec<ProjectSummary>,
    selected: Option<String>,
}

impl ProjectRepository {
    /// GET `url` and build a repository from the response.
    pub async fn fetch(
        client: &reqwest::Client,
        url: &str,
        classifier: &Classifier,
    ) -> Result<Self, LoadError> {
        tracing::debug!(url, "fetching project data");
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }
        let body = response.text().await?;
        let payload: ProjectsPayload = serde_json::from_str(&body)?;

        let repo = Self::from_payload(payload, classifier);
        tracing::info!(
            projects = repo.projects.len(),
            summaries = repo.summaries.len(),
            "project data loaded"
        );
        Ok(repo)
    }

    /// Re-fetch and replace the held collection wholesale. On error the
    /// current contents are kept.
    pub async fn reload(
        &mut self,
        client: &reqwest::Client,
        url: &str,
        classifier: &Classifier,
    ) -> Result<(), LoadError> {
        *self = Self::fetch(client, url, classifier).await?;
        Ok(())
    }

    /// Classify the raw records of a payload in positional order.
    ///
    /// An element that is not a JSON object is logged and skipped; its
    /// position still counts toward fallback ids of later records. Fields of
    /// the wrong type are treated as missing and defaulted.
    pub fn from_payload(payload: ProjectsPayload, classifier: &Classifier) -> Self {
        let summaries = payload
            .project_summaries
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match RawConversationRecord::from_json(value) {
                Some(record) => Some(classifier.summarize(&record, index)),
                None => {
                    tracing::warn!(index, "skipping record that is not a JSON object");
                    None
                }
            })
            .collect();

        Self {
            projects: payload.projects,
            summaries,
            selected: None,
        }
    }

    pub fn from_parts(projects: Vec<ProjectIndexEntry>, summaries: Vec<ProjectSummary>) -> Self {
        Self {
            projects,
            summaries,
            selected: None,
        }
    }

    /// The raw project index.
    pub fn projects(&self) -> &[ProjectIndexEntry] {
        &self.projects
    }

    pub fn summaries(&self) -> &[ProjectSummary] {
        &self.summaries
    }

    pub fn filter(&self, filter: &SummaryFilter) -> Vec<&ProjectSummary> {
        self.summaries.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectSummary> {
        self.summaries.iter().find(|s| s.id == id)
    }

    /// Distinct project names across summaries, in first-seen order.
    pub fn project_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for s in &self.summaries {
            if !names.contains(&s.project_name.as_str()) {
                names.push(&s.project_name);
            }
        }
        names
    }

    /// Mark the summary with `id` as selected. Unknown ids clear the selection.
    pub fn select(&mut self, id: &str) -> Option<&ProjectSummary> {
        self.selected = self.get(id).map(|s| s.id.clone());
        self.selected()
    }

    pub fn selected(&self) -> Option<&ProjectSummary> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }
}
