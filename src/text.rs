//! Small English-formatting helpers used to build expectation messages.

use serde_json::Value;

/// Quotes a name the way it would appear as a JSON string.
///
/// ```rust
/// use pathcheck::text::quoted;
///
/// assert_eq!(quoted("name"), "\"name\"");
/// assert_eq!(quoted("say \"hi\""), r#""say \"hi\"""#);
/// ```
pub fn quoted(name: &str) -> String {
    Value::String(name.to_string()).to_string()
}

/// Picks the singular or plural noun for `count` items.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Joins items into an English list with a serial comma.
///
/// ```rust
/// use pathcheck::text::conjunction_list;
///
/// assert_eq!(conjunction_list("and", &["a"]), "a");
/// assert_eq!(conjunction_list("or", &["a", "b"]), "a or b");
/// assert_eq!(conjunction_list("and", &["a", "b", "c"]), "a, b, and c");
/// ```
pub fn conjunction_list<S: AsRef<str>>(conjunction: &str, items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), conjunction, second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{}, {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}
