//! Located validation failures.
//!
//! This module provides [`Expectation`] for describing what a validator wanted,
//! [`Diagnostic`] for a single located failure, and [`Diagnostics`] for the
//! ordered result of a validation run.

use std::fmt::{self, Display};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::path::JsonPath;
use crate::text::conjunction_list;

/// A description of what was required at some location.
///
/// Validators usually produce [`Expectation::Text`]. The disjunction
/// combinator produces [`Expectation::Any`], whose alternatives are either
/// single expectations or, when one branch failed on several grounds at once,
/// an [`Expectation::All`] group.
///
/// Serialized shapes:
/// - `Text("array")` → `"array"`
/// - `All([a, b])` → `[a, b]`
/// - `Any([a, b])` → `{"any": [a, b]}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// A plain description, e.g. `own property "name"`.
    Text(String),
    /// All of these were required simultaneously.
    All(Vec<Expectation>),
    /// At least one of these would have sufficed.
    Any(Vec<Expectation>),
}

impl Expectation {
    /// Creates a plain text expectation.
    pub fn text(description: impl Into<String>) -> Self {
        Expectation::Text(description.into())
    }

    /// Creates a disjunction of alternatives.
    pub fn any(alternatives: impl IntoIterator<Item = Expectation>) -> Self {
        Expectation::Any(alternatives.into_iter().collect())
    }

    /// Creates a conjunction group.
    pub fn all(required: impl IntoIterator<Item = Expectation>) -> Self {
        Expectation::All(required.into_iter().collect())
    }
}

impl From<&str> for Expectation {
    fn from(text: &str) -> Self {
        Expectation::Text(text.to_string())
    }
}

impl From<String> for Expectation {
    fn from(text: String) -> Self {
        Expectation::Text(text)
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Text(text) => f.write_str(text),
            Expectation::All(items) => f.write_str(&join(items, "and")),
            Expectation::Any(items) => f.write_str(&join(items, "or")),
        }
    }
}

fn join(items: &[Expectation], conjunction: &str) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    conjunction_list(conjunction, &rendered)
}

impl Serialize for Expectation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expectation::Text(text) => serializer.serialize_str(text),
            Expectation::All(items) => items.serialize(serializer),
            Expectation::Any(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("any", items)?;
                map.end()
            }
        }
    }
}

/// A single located validation failure.
///
/// - **path**: where in the input the failure occurred
/// - **found**: the offending value
/// - **expected**: what was required there; never empty
///
/// When several conjuncts fail at the same path they are merged into one
/// `Diagnostic` whose expectations appear in declaration order.
///
/// # Example
///
/// ```rust
/// use pathcheck::{Diagnostic, JsonPath};
/// use serde_json::json;
///
/// let diagnostic = Diagnostic::new(JsonPath::root(), json!("gun"), "string containing \"a\"")
///     .with_expected("string containing \"b\"");
///
/// assert_eq!(diagnostic.expected_len(), 2);
/// assert_eq!(
///     serde_json::to_value(&diagnostic).unwrap(),
///     json!({
///         "path": [],
///         "found": "gun",
///         "expected": ["string containing \"a\"", "string containing \"b\""]
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The path to the value that failed validation.
    pub path: JsonPath,
    /// The value found at `path`.
    pub found: Value,
    expected: NonEmptyVec<Expectation>,
}

impl Diagnostic {
    /// Creates a diagnostic with a single expectation.
    pub fn new(path: JsonPath, found: Value, expected: impl Into<Expectation>) -> Self {
        Self {
            path,
            found,
            expected: NonEmptyVec::singleton(expected.into()),
        }
    }

    /// Appends another expectation and returns self for chaining.
    pub fn with_expected(self, expected: impl Into<Expectation>) -> Self {
        Self {
            expected: self
                .expected
                .combine(NonEmptyVec::singleton(expected.into())),
            ..self
        }
    }

    /// Merges `other` into this diagnostic, keeping this path and found value
    /// and concatenating expectations in order.
    pub fn merge(self, other: Diagnostic) -> Self {
        Self {
            expected: self.expected.combine(other.expected),
            ..self
        }
    }

    /// Returns the expectations in order.
    pub fn expected(&self) -> impl Iterator<Item = &Expectation> {
        self.expected.iter()
    }

    /// Returns the first expectation.
    pub fn first_expected(&self) -> &Expectation {
        self.expected.head()
    }

    /// Returns the number of expectations. Always at least one.
    pub fn expected_len(&self) -> usize {
        self.expected.len()
    }

    /// Consumes the diagnostic, returning its expectations.
    pub fn into_expected(self) -> Vec<Expectation> {
        self.expected.into_vec()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.expected().map(ToString::to_string).collect();
        write!(
            f,
            "{}: expected {} (found: {})",
            display_path(&self.path),
            conjunction_list("and", &rendered),
            self.found
        )
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let expected: Vec<&Expectation> = self.expected().collect();
        let mut state = serializer.serialize_struct("Diagnostic", 3)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("found", &self.found)?;
        state.serialize_field("expected", &expected)?;
        state.end()
    }
}

/// Renders a path for messages, naming the root explicitly.
pub(crate) fn display_path(path: &JsonPath) -> String {
    if path.is_root() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

/// The ordered result of validating a value.
///
/// An empty `Diagnostics` means the value is valid. Order follows validator
/// declaration and data traversal order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result holding a single diagnostic.
    pub fn single(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }

    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no diagnostics, i.e. the value is valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Returns the first diagnostic, if any.
    pub fn first(&self) -> Option<&Diagnostic> {
        self.0.first()
    }

    /// Returns all diagnostics at the specified path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&Diagnostic> {
        self.0.iter().filter(|d| &d.path == path).collect()
    }

    /// Converts this collection into a `Vec<Diagnostic>`.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }

    /// Converts into a stillwater `Validation`, failing with a non-empty
    /// list when there is at least one diagnostic.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<Diagnostic>> {
        match NonEmptyVec::from_vec(self.0) {
            Some(diagnostics) => Validation::Failure(diagnostics),
            None => Validation::Success(()),
        }
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self(diagnostics)
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Valid");
        }
        writeln!(f, "Validation failed with {} diagnostic(s):", self.len())?;
        for (i, diagnostic) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, diagnostic)?;
        }
        Ok(())
    }
}

// Diagnostics cross thread boundaries when validators are shared; keep them
// Send + Sync if the field types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Diagnostic>();
    assert_sync::<Diagnostic>();
    assert_send::<Diagnostics>();
    assert_sync::<Diagnostics>();
};
