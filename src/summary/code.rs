//! Code-content heuristics.
//!
//! Each predicate is a plain regex test over the code text; none of them parse
//! anything. [`classify_code_change`] combines them into the ordered tag list
//! attached to a side-by-side code change.

use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def\s+(\w+)\s*\(").expect("valid function pattern"));

static CLASS_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+\w+").expect("valid class pattern"));

static IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"import\s+\w+|from\s+\w+\s+import").expect("valid import pattern")
});

static API: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)api|endpoint|route|request|response").expect("valid api pattern")
});

static DATABASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)database|db|sql|query|table|model").expect("valid database pattern")
});

static UI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ui|component|render|display|button|form|input").expect("valid ui pattern")
});

static FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"['"`]([^'"`]*\.(?:py|js|ts|jsx|tsx|html|css|json|md))['"`]"#)
        .expect("valid file name pattern")
});

/// Names shorter than this are too noisy to tag.
const MIN_NAME_LEN: usize = 3;

pub fn contains_function(code: &str) -> bool {
    FUNCTION_DEF.is_match(code)
}

pub fn contains_class(code: &str) -> bool {
    CLASS_DEF.is_match(code)
}

pub fn contains_import(code: &str) -> bool {
    IMPORT.is_match(code)
}

pub fn contains_api(code: &str) -> bool {
    API.is_match(code)
}

pub fn contains_database(code: &str) -> bool {
    DATABASE.is_match(code)
}

pub fn contains_ui(code: &str) -> bool {
    UI.is_match(code)
}

/// Names of every `def name(` in `code`, in source order.
pub fn extract_function_names(code: &str) -> Vec<String> {
    FUNCTION_DEF
        .captures_iter(code)
        .map(|c| c[1].to_string())
        .collect()
}

/// Quoted file names with a recognized extension, in source order.
pub fn extract_file_names(code: &str) -> Vec<String> {
    FILE_NAME
        .captures_iter(code)
        .map(|c| c[1].to_string())
        .collect()
}

/// Derive change tags from the before/after code of a record.
///
/// Tags are appended in a fixed order, deduplicated keeping the first
/// occurrence, and truncated to `max_tags`. Callers check for the
/// both-empty case themselves; it yields an empty list here.
pub fn classify_code_change(before: &str, after: &str, max_tags: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    match (!before.is_empty(), !after.is_empty()) {
        (true, true) => {
            tags.push("modified".into());

            if contains_function(before) && contains_function(after) {
                tags.push("function".into());
            }
            if contains_class(before) && contains_class(after) {
                tags.push("class".into());
            }
            if contains_import(before) || contains_import(after) {
                tags.push("import".into());
            }
            if contains_api(before) || contains_api(after) {
                tags.push("api".into());
            }
            if contains_database(before) || contains_database(after) {
                tags.push("database".into());
            }
            if contains_ui(before) || contains_ui(after) {
                tags.push("ui".into());
            }

            let names = extract_function_names(after)
                .into_iter()
                .chain(extract_file_names(after));
            for name in names {
                if name.chars().count() >= MIN_NAME_LEN {
                    tags.push(format!("`{name}`"));
                }
            }
        }
        (false, true) => {
            tags.push("added".into());
            tags.push("new".into());
            if contains_function(after) {
                tags.push("function".into());
            }
            if contains_class(after) {
                tags.push("class".into());
            }
        }
        (true, false) => {
            tags.push("removed".into());
            tags.push("deleted".into());
        }
        (false, false) => {}
    }

    dedup_in_order(&mut tags);
    tags.truncate(max_tags);
    tags
}

/// Remove exact duplicates, keeping the first occurrence of each string.
pub(crate) fn dedup_in_order(tags: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_predicate() {
        assert!(contains_function("def foo():\n  pass"));
        assert!(contains_function("async def  handler (req):"));
        assert!(!contains_function("fn foo() {}"));
        assert!(!contains_function("def = 3"));
    }

    #[test]
    fn class_predicate() {
        assert!(contains_class("class User:"));
        assert!(contains_class("export class widget {}"));
        assert!(!contains_class("classification = 1"));
    }

    #[test]
    fn import_predicate_accepts_both_forms() {
        assert!(contains_import("import os"));
        assert!(contains_import("from typing import List"));
        assert!(!contains_import("important = True"));
    }

    #[test]
    fn keyword_predicates_are_case_insensitive() {
        assert!(contains_api("GET /API/users"));
        assert!(contains_api("return Response(200)"));
        assert!(contains_database("SELECT * FROM Table"));
        assert!(contains_database("session.query(User)"));
        assert!(contains_ui("<Button onClick>"));
        assert!(!contains_api("x = 1"));
        assert!(!contains_database("x = 1"));
        assert!(!contains_ui("x = 1"));
    }

    #[test]
    fn names_in_source_order() {
        let code = "def alpha(x):\n    pass\n\ndef beta ():\n    pass";
        assert_eq!(extract_function_names(code), vec!["alpha", "beta"]);
    }

    #[test]
    fn file_names_need_quotes_and_known_extension() {
        let code = r#"open("config.json"); load('app.py'); x = `style.css`; y = "data.bin"; z = main.rs"#;
        assert_eq!(
            extract_file_names(code),
            vec!["config.json", "app.py", "style.css"]
        );
    }

    #[test]
    fn modified_code_with_functions() {
        let tags = classify_code_change("def foo():\n  pass", "def foo():\n  return 1", 8);
        assert_eq!(tags, vec!["modified", "function", "`foo`"]);
    }

    #[test]
    fn function_tag_requires_both_sides() {
        let tags = classify_code_change("x = 1", "def foo():\n  return 1", 8);
        assert!(!tags.contains(&"function".to_string()));
        assert!(tags.contains(&"`foo`".to_string()));
    }

    #[test]
    fn tags_follow_fixed_emission_order() {
        let after = "from app import db\nroute = render('index.html')\ndef handler(): pass";
        let tags = classify_code_change("x = 1", after, 8);
        assert_eq!(
            tags,
            vec!["modified", "import", "api", "database", "ui", "`handler`", "`index.html`"]
        );
    }

    #[test]
    fn import_tag_from_either_side() {
        let tags = classify_code_change("import os", "x = 2", 8);
        assert_eq!(tags, vec!["modified", "import"]);
    }

    #[test]
    fn added_only() {
        let tags = classify_code_change("", "def bar():\n  pass", 8);
        assert_eq!(tags, vec!["added", "new", "function"]);

        let tags = classify_code_change("", "class Bar:\n  pass", 8);
        assert_eq!(tags, vec!["added", "new", "class"]);
    }

    #[test]
    fn removed_only() {
        let tags = classify_code_change("def gone(): pass", "", 8);
        assert_eq!(tags, vec!["removed", "deleted"]);
    }

    #[test]
    fn neither_side_is_empty() {
        assert!(classify_code_change("", "", 8).is_empty());
    }

    #[test]
    fn short_names_are_skipped_and_duplicates_removed() {
        let after = "def go():\n  pass\ndef run():\n  pass\ndef run():\n  pass";
        let tags = classify_code_change("x", after, 8);
        assert_eq!(tags, vec!["modified", "`run`"]);
    }

    #[test]
    fn capped_at_limit() {
        let before = "import os\nclass A: pass\ndef a(): pass\napi db ui";
        let after = "import os\nclass A: pass\ndef first(): pass\ndef second(): pass\n\
                     def third(): pass\nopen('one.py')\napi db ui";
        let tags = classify_code_change(before, after, 8);
        assert_eq!(tags.len(), 8);
        assert_eq!(&tags[..4], &["modified", "function", "class", "import"]);

        let tags = classify_code_change(before, after, 3);
        assert_eq!(tags, vec!["modified", "function", "class"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut tags: Vec<String> = ["a", "b", "a", "c", "b"].iter().map(|s| s.to_string()).collect();
        dedup_in_order(&mut tags);
        assert_eq!(tags, vec!["a", "b", "c"]);
    }
}
