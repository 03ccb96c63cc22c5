//! Variadic forms of the list-taking combinators.

/// Conjoins a literal list of validators. See [`all`](fn@crate::all).
///
/// ```rust
/// use pathcheck::presets::{is_string, non_empty_string};
///
/// let validator = pathcheck::all![is_string(), non_empty_string()].unwrap();
/// assert!(pathcheck::valid(&serde_json::json!("x"), &validator).unwrap());
/// ```
#[macro_export]
macro_rules! all {
    ($($validator:expr),+ $(,)?) => {
        $crate::all(::std::vec![$($validator),+])
    };
}

/// Disjoins a literal list of validators. See [`any`](fn@crate::any).
///
/// ```rust
/// use pathcheck::presets::{is_null, is_string};
///
/// let validator = pathcheck::any![is_string(), is_null()].unwrap();
/// assert!(pathcheck::valid(&serde_json::json!(null), &validator).unwrap());
/// ```
#[macro_export]
macro_rules! any {
    ($($validator:expr),+ $(,)?) => {
        $crate::any(::std::vec![$($validator),+])
    };
}

/// Builds a property whitelist from literal names. See
/// [`only_properties`](fn@crate::only_properties).
///
/// ```rust
/// let validator = pathcheck::only_properties!["id", "name"].unwrap();
/// assert!(!pathcheck::valid(&serde_json::json!({"other": 1}), &validator).unwrap());
/// ```
#[macro_export]
macro_rules! only_properties {
    ($($name:expr),+ $(,)?) => {
        $crate::only_properties([$(::std::string::String::from($name)),+])
    };
}
