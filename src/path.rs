//! Locations inside nested data.
//!
//! A [`JsonPath`] is an ordered, immutable list of [`PathSegment`]s. Validators
//! never mutate a path: descending into a property or an array element
//! produces a new path with one more segment.

use std::fmt::{self, Display};

use serde::Serialize;

/// One step into a nested value: a map key or an array index.
///
/// Serializes as the bare key or index, so a path becomes `["tags", 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A map key (e.g., `author`)
    Field(String),
    /// An array index (e.g., `[0]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// A path to a value in a nested JSON-like structure.
///
/// Two paths are equal when they have the same segments in the same order.
///
/// # Example
///
/// ```rust
/// use pathcheck::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("posts")
///     .push_index(0)
///     .push_field("author");
///
/// assert_eq!(path.to_string(), "posts[0].author");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for JsonPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Field(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_path_is_empty() {
        let path = JsonPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_mixed_segments_display() {
        let path = JsonPath::root()
            .push_field("tags")
            .push_index(2)
            .push_field("label");
        assert_eq!(path.to_string(), "tags[2].label");
    }

    #[test]
    fn test_leading_index_has_no_dot() {
        let path = JsonPath::root().push_index(0).push_field("a");
        assert_eq!(path.to_string(), "[0].a");
    }

    #[test]
    fn test_push_leaves_base_untouched() {
        let base = JsonPath::root().push_field("items");
        let first = base.push(0usize);
        let second = base.push(1usize);

        assert_eq!(base.len(), 1);
        assert_eq!(first.to_string(), "items[0]");
        assert_eq!(second.to_string(), "items[1]");
    }

    #[test]
    fn test_equality_is_pairwise() {
        let a: JsonPath = vec![PathSegment::from("a"), PathSegment::from(0usize)]
            .into_iter()
            .collect();
        let b = JsonPath::root().push("a").push(0usize);
        let c = JsonPath::root().push(0usize).push("a");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, JsonPath::root().push("a"));
    }

    #[test]
    fn test_serializes_as_key_array() {
        let path = JsonPath::root().push("addresses").push(2usize);
        assert_eq!(serde_json::to_value(&path).unwrap(), json!(["addresses", 2]));
        assert_eq!(serde_json::to_value(JsonPath::root()).unwrap(), json!([]));
    }
}
