//! Keyword-driven extraction over conversation text.

use super::code::classify_code_change;
use super::types::{ChatMessage, RawConversationRecord};

/// Description tokens must be longer than this to become tags.
const MIN_KEYWORD_LEN: usize = 3;

fn contains_any(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Collect keyword-bearing sentences from `messages`, in message order and
/// then sentence order, stopping after `limit` sentences.
///
/// Sentences are split on `.` only and trimmed; matching is a case-insensitive
/// substring test against lowercase `keywords`.
pub fn extract_sentences(messages: &[ChatMessage], keywords: &[String], limit: usize) -> Vec<String> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    for message in messages {
        let content = message.content();
        if !contains_any(content, keywords) {
            continue;
        }
        for sentence in content.split('.') {
            let trimmed = sentence.trim();
            if trimmed.is_empty() || !contains_any(sentence, keywords) {
                continue;
            }
            found.push(trimmed.to_string());
            if found.len() == limit {
                return found;
            }
        }
    }

    found
}

/// Build the tag list of a record: the upstream tag, then code-change tags,
/// then description keywords, capped at `max_tags`.
///
/// Deduplication is exact string equality; mixed-case duplicates are kept.
pub fn extract_tags(record: &RawConversationRecord, max_tags: usize, max_code_tags: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    let tag = record.tag();
    if tag != "other" {
        tags.push(tag.replacen(' ', "-", 1));
    }

    let (before, after) = (record.before_code(), record.after_code());
    if !before.is_empty() || !after.is_empty() {
        for code_tag in classify_code_change(before, after, max_code_tags) {
            if !tags.contains(&code_tag) {
                tags.push(code_tag);
            }
        }
    }

    for word in record.description().to_lowercase().split_whitespace() {
        if word.chars().count() > MIN_KEYWORD_LEN && !tags.iter().any(|t| t == word) {
            tags.push(word.to_string());
        }
    }

    tags.truncate(max_tags);
    tags
}
