//! Long-form validation of a microblog post.

use pathcheck::presets::{is_object, is_string, matches, max_length, non_empty_array, non_empty_string};
use pathcheck::{all, any, each_element, own_property, validate, Validator};
use pretty_assertions::assert_eq;
use serde_json::json;

fn valid_date() -> Validator {
    Validator::new(|value, ctx| {
        let parts: Vec<u32> = value
            .as_str()
            .unwrap_or_default()
            .split('-')
            .filter_map(|part| part.parse().ok())
            .collect();
        let plausible = matches!(parts.as_slice(), [_, month, day] if (1..=12).contains(month) && (1..=31).contains(day));
        ctx.ensure(plausible, "valid date")
    })
}

fn all_upper_case() -> Validator {
    Validator::new(|value, ctx| {
        let upper = value
            .as_str()
            .is_some_and(|s| s.to_uppercase() == s);
        ctx.ensure(upper, "upper-case string")
    })
}

fn post() -> Validator {
    all(vec![
        is_object(),
        own_property("author", non_empty_string()),
        own_property(
            "date",
            all(vec![
                is_string(),
                matches(r"^\d\d\d\d-\d\d-\d\d$").unwrap(),
                valid_date(),
            ])
            .unwrap(),
        ),
        own_property(
            "tags",
            all(vec![
                non_empty_array(),
                each_element(
                    all(vec![
                        non_empty_string(),
                        any(vec![matches(r"^@[A-Z]+$").unwrap(), all_upper_case()]).unwrap(),
                    ])
                    .unwrap(),
                ),
            ])
            .unwrap(),
        ),
        own_property(
            "text",
            all(vec![non_empty_string(), max_length(140)]).unwrap(),
        ),
    ])
    .unwrap()
}

#[test]
fn test_valid_post() {
    let data = json!({
        "author": "John",
        "date": "2015-01-01",
        "tags": ["TESTING", "@JOAN"],
        "text": "This is a valid post"
    });
    assert!(validate(&data, &post()).unwrap().is_empty());
}

#[test]
fn test_invalid_post() {
    let data = json!({
        "author": "",
        "date": "2015-01-32",
        "text": "This is a valid post"
    });

    assert_eq!(
        serde_json::to_value(validate(&data, &post()).unwrap()).unwrap(),
        json!([
            {"path": ["author"], "found": "", "expected": ["non-empty string"]},
            {"path": ["date"], "found": "2015-01-32", "expected": ["valid date"]},
            {"path": [], "found": data, "expected": ["own property \"tags\""]}
        ])
    );
}

#[test]
fn test_bad_tag_lists_both_alternatives() {
    let data = json!({
        "author": "Joan",
        "date": "2015-02-03",
        "tags": ["ok", "FINE"],
        "text": "x"
    });

    let diagnostics = validate(&data, &post()).unwrap();
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.first().unwrap();
    assert_eq!(diagnostic.path.to_string(), "tags[0]");
    assert_eq!(
        diagnostic.first_expected().to_string(),
        "string matching /^@[A-Z]+$/ or upper-case string"
    );
}

#[test]
fn test_overlong_text() {
    let data = json!({
        "author": "Joan",
        "date": "2015-02-03",
        "tags": ["A"],
        "text": "x".repeat(141)
    });

    let diagnostics = validate(&data, &post()).unwrap();
    assert_eq!(
        diagnostics.first().unwrap().first_expected().to_string(),
        "string of 140 characters or less"
    );
}

#[test]
fn test_report_display() {
    let data = json!({"author": "", "date": "2015-01-01", "tags": [], "text": ""});
    let report = validate(&data, &post()).unwrap().to_string();

    assert!(report.contains("3 diagnostic(s)"));
    assert!(report.contains("author: expected non-empty string"));
    assert!(report.contains("tags: expected non-empty array"));
    assert!(report.contains("text: expected non-empty string"));
}
