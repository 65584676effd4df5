#![allow(dead_code)]

use codemind::summary::types::{ChatMessage, RawConversationRecord};
use serde_json::Value;
use std::path::Path;

/// A record with only the tag, code, and description fields set.
pub fn code_record(tag: &str, before: &str, after: &str, description: &str) -> RawConversationRecord {
    RawConversationRecord {
        tag: Some(tag.into()),
        before_code: Some(before.into()),
        after_code: Some(after.into()),
        description: Some(description.into()),
        ..Default::default()
    }
}

/// A record whose messages carry the given contents.
pub fn message_record(contents: &[&str]) -> RawConversationRecord {
    RawConversationRecord {
        messages: Some(contents.iter().map(|c| ChatMessage::new(*c)).collect()),
        ..Default::default()
    }
}

/// A full chat-log document as the logger writes it.
pub fn chat_log(id: &str, project: &str, tag: &str, title: &str) -> Value {
    serde_json::json!({
        "conversation_id": id,
        "project_name": project,
        "tag": tag,
        "title": title,
        "description": format!("{title} details"),
        "summary": format!("Summary of {title}"),
        "before_code": null,
        "after_code": "def handler(request):\n    return 'index.html'",
        "created_at": "2025-03-01T10:00:00",
        "message_count": 2,
        "participants": ["user", "assistant"],
        "messages": [
            {"role": "user", "content": "Please add a handler function."},
            {"role": "assistant", "content": "I added the handler. It fixes the routing bug."}
        ]
    })
}

/// Write `value` as `<name>.json` into `dir`, with a modification time
/// `age_secs` seconds in the past.
pub fn write_log(dir: &Path, name: &str, value: &Value, age_secs: u64) {
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    set_age(&path, age_secs);
}

pub fn set_age(path: &Path, age_secs: u64) {
    let mtime = std::time::SystemTime::now() - std::time::Duration::from_secs(age_secs);
    let file = std::fs::File::options().write(true).open(path).unwrap();
    file.set_modified(mtime).unwrap();
}
