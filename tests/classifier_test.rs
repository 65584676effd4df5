mod helpers;

use codemind::config::ClassifierConfig;
use codemind::summary::types::{CodeChanges, RawConversationRecord, SummaryType};
use codemind::summary::Classifier;
use helpers::{code_record, message_record};

#[test]
fn bug_fix_record_with_modified_function() {
    let record = code_record(
        "bug fixed",
        "def foo():\n  pass",
        "def foo():\n  return 1",
        "fix bug",
    );
    let summary = Classifier::default().summarize(&record, 0);

    assert_eq!(summary.summary_type, SummaryType::SecurityUpdate);
    let change = summary.code_changes.side_by_side().expect("side-by-side payload");
    assert!(change.tags.contains(&"modified".to_string()));
    assert!(change.tags.contains(&"function".to_string()));
    assert!(summary.tags.contains(&"bug-fixed".to_string()));
    assert_eq!(summary.impact, "Improved system stability and user experience");
}

#[test]
fn other_record_without_code_has_no_changes() {
    let record = code_record("other", "", "", "");
    let summary = Classifier::default().summarize(&record, 0);

    assert_eq!(summary.code_changes, CodeChanges::None);
    assert!(!summary.tags.contains(&"other".to_string()));
    assert_eq!(summary.summary_type, SummaryType::Other);
}

#[test]
fn added_function_tags_in_order() {
    let record = code_record("function added", "", "def bar():\n  pass", "");
    let summary = Classifier::default().summarize(&record, 0);

    let change = summary.code_changes.side_by_side().expect("side-by-side payload");
    assert_eq!(change.tags, vec!["added", "new", "function"]);
    assert_eq!(change.before, "");
    assert_eq!(summary.summary_type, SummaryType::FeatureDevelopment);
    assert_eq!(summary.tags, vec!["function-added", "added", "new", "function"]);
}

#[test]
fn bug_fix_sentence_extraction() {
    let record = message_record(&["I fixed a bug in login.", "Added a new feature."]);
    let classifier = Classifier::default();

    assert_eq!(classifier.extract_bug_fixes(&record), vec!["I fixed a bug in login"]);
    assert_eq!(classifier.extract_functions(&record), vec!["Added a new feature"]);
}

#[test]
fn type_is_always_in_the_closed_set() {
    let classifier = Classifier::default();
    for tag in ["bug fixed", "question", "BUG FIXED", "misc", "", "other", "function-added"] {
        let record = RawConversationRecord {
            tag: Some(tag.into()),
            ..Default::default()
        };
        let summary = classifier.summarize(&record, 0);
        assert!(SummaryType::ALL.contains(&summary.summary_type));
    }
}

#[test]
fn tags_bounded_and_unique() {
    let record = code_record(
        "function modify",
        "import os\nclass A:\n  def a(self): pass",
        "import os\nclass A:\n  def alpha(self): pass\n  def beta(self): pass\nopen('views.py')",
        "Rework rework the views module module with several changes across views",
    );
    let summary = Classifier::default().summarize(&record, 0);

    assert!(summary.tags.len() <= 6);
    let mut unique = summary.tags.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), summary.tags.len());

    let change = summary.code_changes.side_by_side().unwrap();
    assert!(change.tags.len() <= 8);
}

#[test]
fn sentence_limits_hold_for_long_conversations() {
    let contents: Vec<String> = (0..40)
        .map(|i| format!("Added function {i}. Fixed bug {i}. Unrelated {i}."))
        .collect();
    let refs: Vec<&str> = contents.iter().map(String::as_str).collect();
    let record = message_record(&refs);
    let summary = Classifier::default().summarize(&record, 0);

    assert_eq!(summary.functions.len(), 5);
    assert_eq!(summary.bug_fixes.len(), 5);
    assert_eq!(summary.functions[0], "Added function 0");
    assert_eq!(summary.functions[1], "Added function 1");
    assert_eq!(summary.bug_fixes[4], "Fixed bug 4");
}

#[test]
fn alternate_keyword_sets_replace_defaults() {
    let classifier = Classifier::new(ClassifierConfig {
        function_keywords: vec!["refactor".into()],
        bug_fix_keywords: vec!["regression".into()],
        max_functions: 1,
        ..Default::default()
    });
    let record = message_record(&[
        "Refactored the parser. Refactored the lexer.",
        "Found a Regression in the build. Added a test.",
    ]);

    assert_eq!(classifier.extract_functions(&record), vec!["Refactored the parser"]);
    assert_eq!(
        classifier.extract_bug_fixes(&record),
        vec!["Found a Regression in the build"]
    );
}

#[test]
fn summarizing_twice_is_identical() {
    let mut record = code_record("question", "SELECT 1", "SELECT 2", "Database tuning notes");
    record.created_at = Some("2025-05-05T12:00:00".into());
    record.conversation_id = Some("conv-42".into());
    let classifier = Classifier::default();

    let first = serde_json::to_vec(&classifier.summarize(&record, 7)).unwrap();
    let second = serde_json::to_vec(&classifier.summarize(&record, 7)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn summarize_all_uses_positional_fallbacks() {
    let records = vec![RawConversationRecord::default(), RawConversationRecord::default()];
    let summaries = Classifier::default().summarize_all(&records);

    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["project-1", "project-2"]);
    assert_eq!(summaries[1].title, "Update 2");
}

#[test]
fn summary_json_uses_camel_case_fields() {
    let record = code_record("bug fixed", "a = 1", "a = 2", "");
    let value = serde_json::to_value(Classifier::default().summarize(&record, 0)).unwrap();

    assert_eq!(value["type"], "Security Update");
    assert_eq!(value["projectName"], "Unknown Project");
    assert!(value["bugFixes"].is_array());
    assert_eq!(value["codeChanges"]["type"], "side_by_side");
    assert_eq!(value["messageCount"], 0);
}
