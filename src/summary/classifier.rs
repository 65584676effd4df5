//! Record → summary pipeline.
//!
//! [`Classifier`] owns an immutable [`ClassifierConfig`] and turns each
//! [`RawConversationRecord`] into a [`ProjectSummary`]. Summarization never
//! fails: missing fields are defaulted.

use chrono::Utc;

use super::category::{describe_impact, map_type_from_tag};
use super::code::classify_code_change;
use super::text::{extract_sentences, extract_tags};
use super::types::{non_empty, CodeChanges, ProjectSummary, RawConversationRecord, SideBySide};
use crate::config::ClassifierConfig;

#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl Classifier {
    /// Keywords are lowercased once here so matching stays case-insensitive.
    pub fn new(mut config: ClassifierConfig) -> Self {
        for k in config
            .function_keywords
            .iter_mut()
            .chain(config.bug_fix_keywords.iter_mut())
        {
            *k = k.to_lowercase();
        }
        config.function_keywords.retain(|k| !k.is_empty());
        config.bug_fix_keywords.retain(|k| !k.is_empty());
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn extract_functions(&self, record: &RawConversationRecord) -> Vec<String> {
        extract_sentences(
            record.messages(),
            &self.config.function_keywords,
            self.config.max_functions,
        )
    }

    pub fn extract_bug_fixes(&self, record: &RawConversationRecord) -> Vec<String> {
        extract_sentences(
            record.messages(),
            &self.config.bug_fix_keywords,
            self.config.max_bug_fixes,
        )
    }

    pub fn extract_tags(&self, record: &RawConversationRecord) -> Vec<String> {
        extract_tags(record, self.config.max_tags, self.config.max_code_tags)
    }

    pub fn classify_code_change(&self, before: &str, after: &str) -> Vec<String> {
        classify_code_change(before, after, self.config.max_code_tags)
    }

    /// Side-by-side payload, or [`CodeChanges::None`] when the record has no code.
    pub fn format_code_changes(&self, record: &RawConversationRecord) -> CodeChanges {
        let (before, after) = (record.before_code(), record.after_code());
        if before.is_empty() && after.is_empty() {
            return CodeChanges::None;
        }
        CodeChanges::SideBySide(SideBySide {
            before: before.to_string(),
            after: after.to_string(),
            tags: self.classify_code_change(before, after),
        })
    }

    /// Derive the summary of the record at position `index` of its collection.
    ///
    /// `index` only feeds the fallback id and title. The timestamp falls back
    /// to the current time when `created_at` is absent.
    pub fn summarize(&self, record: &RawConversationRecord, index: usize) -> ProjectSummary {
        let position = index + 1;
        let tag = record.tag();

        ProjectSummary {
            id: non_empty(&record.conversation_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("project-{position}")),
            project_name: record
                .project_name()
                .unwrap_or(&self.config.unknown_project)
                .to_string(),
            title: non_empty(&record.title)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Update {position}")),
            summary: non_empty(&record.summary)
                .or_else(|| non_empty(&record.description))
                .unwrap_or("")
                .to_string(),
            summary_type: map_type_from_tag(tag),
            timestamp: non_empty(&record.created_at)
                .map(str::to_string)
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            ai_model: self.config.ai_model.clone(),
            functions: self.extract_functions(record),
            bug_fixes: self.extract_bug_fixes(record),
            tags: self.extract_tags(record),
            code_changes: self.format_code_changes(record),
            impact: describe_impact(tag, record.description()).to_string(),
            message_count: record.message_count.unwrap_or(0),
            participants: record.participants.clone().unwrap_or_default(),
        }
    }

    /// Summarize a whole collection in positional order.
    pub fn summarize_all(&self, records: &[RawConversationRecord]) -> Vec<ProjectSummary> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| self.summarize(r, i))
            .collect()
    }
}
