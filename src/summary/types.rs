//! Conversation record and summary type definitions.
//!
//! [`RawConversationRecord`] is the upstream chat-log shape, [`ProjectSummary`]
//! the display-ready entity derived from it. [`TagCategory`] is the fixed tag
//! vocabulary and [`SummaryType`] the closed set of summary types it maps to.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Shown wherever a summary carries [`CodeChanges::None`].
pub const NO_CHANGES_TEXT: &str = "// No code changes detected";

/// Deserialize an optional field, turning a value of the wrong type into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// One message of a logged conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: None,
            content: Some(content.into()),
            timestamp: None,
        }
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// A conversation entry as written by the chat logger.
///
/// Every field is optional and a field of the wrong type reads as missing:
/// sparse or sloppy records are defaulted during summarization rather than
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConversationRecord {
    #[serde(deserialize_with = "lenient")]
    pub conversation_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub project_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    /// Upstream single-label classification, e.g. `"bug fixed"`.
    #[serde(deserialize_with = "lenient")]
    pub tag: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub before_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub after_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub message_count: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub participants: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub messages: Option<Vec<ChatMessage>>,
}

impl RawConversationRecord {
    /// Read a record from a JSON value. Only non-objects are rejected; every
    /// field that fails to read is left unset.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// The upstream tag, `"other"` when missing.
    pub fn tag(&self) -> &str {
        non_empty(&self.tag).unwrap_or("other")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn before_code(&self) -> &str {
        self.before_code.as_deref().unwrap_or("")
    }

    pub fn after_code(&self) -> &str {
        self.after_code.as_deref().unwrap_or("")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.messages.as_deref().unwrap_or(&[])
    }

    pub fn project_name(&self) -> Option<&str> {
        non_empty(&self.project_name)
    }
}

/// Returns the string when present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// The fixed upstream tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    BugFixed,
    FunctionAdded,
    FunctionModify,
    Question,
    Discussion,
    Other,
}

impl TagCategory {
    pub const ALL: [TagCategory; 6] = [
        Self::BugFixed,
        Self::FunctionAdded,
        Self::FunctionModify,
        Self::Question,
        Self::Discussion,
        Self::Other,
    ];

    /// Exact, case-sensitive lookup. Anything outside the vocabulary is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bug fixed" => Some(Self::BugFixed),
            "function added" => Some(Self::FunctionAdded),
            "function modify" => Some(Self::FunctionModify),
            "question" => Some(Self::Question),
            "discussion" => Some(Self::Discussion),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BugFixed => "bug fixed",
            Self::FunctionAdded => "function added",
            Self::FunctionModify => "function modify",
            Self::Question => "question",
            Self::Discussion => "discussion",
            Self::Other => "other",
        }
    }
}

/// Display category of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryType {
    #[serde(rename = "Feature Development")]
    FeatureDevelopment,
    #[serde(rename = "Security Update")]
    SecurityUpdate,
    Discussion,
    Other,
}

impl SummaryType {
    pub const ALL: [SummaryType; 4] = [
        Self::FeatureDevelopment,
        Self::SecurityUpdate,
        Self::Discussion,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeatureDevelopment => "Feature Development",
            Self::SecurityUpdate => "Security Update",
            Self::Discussion => "Discussion",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for SummaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown summary type: {s}"))
    }
}

/// Side-by-side view of a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideBySide {
    pub before: String,
    pub after: String,
    pub tags: Vec<String>,
}

/// Code-change payload of a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodeChanges {
    /// The record carried neither before nor after code.
    None,
    SideBySide(SideBySide),
}

impl CodeChanges {
    pub fn side_by_side(&self) -> Option<&SideBySide> {
        match self {
            Self::None => None,
            Self::SideBySide(s) => Some(s),
        }
    }
}

/// Display-ready summary derived from one [`RawConversationRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub project_name: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    /// ISO 8601 timestamp, as received or synthesized at summarization time.
    pub timestamp: String,
    pub ai_model: String,
    pub functions: Vec<String>,
    pub bug_fixes: Vec<String>,
    pub tags: Vec<String>,
    pub code_changes: CodeChanges,
    pub impact: String,
    pub message_count: u64,
    pub participants: Vec<String>,
}

/// An entry of the project index served alongside the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIndexEntry {
    pub name: String,
    #[serde(default)]
    pub updates: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
