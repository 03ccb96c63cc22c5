//! Ready-made validators for common checks.
//!
//! These cover the usual building blocks of a document validator: JSON type
//! checks, non-emptiness, length limits and regex matching.
//!
//! `non_empty_string` and `non_empty_array` only constrain values of their
//! own type and let everything else through, so they compose with the type
//! checks under [`all`](fn@crate::all).

use regex::Regex;
use serde_json::Value;

use crate::validator::Validator;
use crate::value::type_name;

fn of_type(name: &'static str) -> Validator {
    Validator::new(move |value, ctx| ctx.ensure(type_name(value) == name, name))
}

/// Accepts key-value maps only.
pub fn is_object() -> Validator {
    of_type("object")
}

/// Accepts arrays only.
pub fn is_array() -> Validator {
    of_type("array")
}

/// Accepts strings only.
pub fn is_string() -> Validator {
    of_type("string")
}

/// Accepts numbers only.
pub fn is_number() -> Validator {
    of_type("number")
}

/// Accepts booleans only.
pub fn is_boolean() -> Validator {
    of_type("boolean")
}

/// Accepts null only.
pub fn is_null() -> Validator {
    of_type("null")
}

/// Rejects the empty string.
pub fn non_empty_string() -> Validator {
    Validator::new(|value, ctx| {
        ctx.ensure(value.as_str() != Some(""), "non-empty string")
    })
}

/// Rejects the empty array.
///
/// The message is the same one [`some_element`](fn@crate::some_element) uses,
/// so conjoining the two repeats it in the merged diagnostic.
pub fn non_empty_array() -> Validator {
    Validator::new(|value, ctx| {
        let empty = value.as_array().is_some_and(Vec::is_empty);
        ctx.ensure(!empty, "non-empty array")
    })
}

/// Accepts strings of at most `max` characters and arrays of at most `max`
/// elements. The expectation names the kind of value that was rejected.
pub fn max_length(max: usize) -> Validator {
    Validator::new(move |value, ctx| match value {
        Value::String(s) => ctx.ensure(
            s.chars().count() <= max,
            format!("string of {} characters or less", max),
        ),
        Value::Array(items) => ctx.ensure(
            items.len() <= max,
            format!("array of {} elements or less", max),
        ),
        _ => ctx.expected(format!("string or array of length {} or less", max)),
    })
}

/// Accepts strings matching `pattern`.
///
/// # Errors
///
/// Returns the regex error if `pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use pathcheck::presets::matches;
/// use pathcheck::valid;
/// use serde_json::json;
///
/// let date = matches(r"^\d{4}-\d{2}-\d{2}$").unwrap();
/// assert!(valid(&json!("2015-01-01"), &date).unwrap());
/// assert!(!valid(&json!("yesterday"), &date).unwrap());
/// ```
pub fn matches(pattern: &str) -> Result<Validator, regex::Error> {
    let regex = Regex::new(pattern)?;
    let description = format!("string matching /{}/", pattern);
    Ok(Validator::new(move |value, ctx| {
        let matched = value.as_str().is_some_and(|s| regex.is_match(s));
        ctx.ensure(matched, description.as_str())
    }))
}
