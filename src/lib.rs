//! # Pathcheck
//!
//! Composable validators for arbitrarily nested JSON-like data, producing
//! diagnostics that say *where* a value failed and *what* was expected.
//!
//! ## Overview
//!
//! A [`Validator`] is a plain function of a value and a [`Context`]. Simple
//! validators check one thing; combinators build bigger ones by descending
//! into properties and array elements ([`own_property`], [`each_element`],
//! ...) or by composing alternatives ([`all`], [`any`]). As validation
//! descends, the current [`JsonPath`] is threaded through so every
//! [`Diagnostic`] is located precisely.
//!
//! Two kinds of problems are kept apart:
//! - **validation failures** are data: the returned [`Diagnostics`]
//! - **contract violations** (a malformed validator graph) are errors:
//!   [`ContractError`]
//!
//! ## Core Types
//!
//! - [`JsonPath`]: location in nested data (e.g., `tags[0]`)
//! - [`Expectation`]: what was required at a location
//! - [`Diagnostic`]: a located failure `{path, found, expected}`
//! - [`Diagnostics`]: the ordered result of a run; empty means valid
//! - [`Validator`], [`Context`], [`Outcome`]: the validator protocol
//!
//! ## Example
//!
//! ```rust
//! use pathcheck::presets::{is_object, non_empty_string};
//! use pathcheck::{all, own_property, validate, valid};
//! use serde_json::json;
//!
//! let post = all(vec![
//!     is_object(),
//!     own_property("author", non_empty_string()),
//! ])
//! .unwrap();
//!
//! assert!(valid(&json!({"author": "John"}), &post).unwrap());
//!
//! let diagnostics = validate(&json!({"author": ""}), &post).unwrap();
//! assert_eq!(
//!     serde_json::to_value(&diagnostics).unwrap(),
//!     json!([{"path": ["author"], "found": "", "expected": ["non-empty string"]}])
//! );
//! ```

pub mod combinators;
pub mod error;
pub mod path;
pub mod presets;
pub mod text;
pub mod validator;
pub mod value;

mod macros;

use serde_json::Value;

pub use combinators::{
    all, and, any, each_element, each_item, only_properties, optional_property, or, own_property,
    some_element, some_item,
};
pub use error::{ContractError, Diagnostic, Diagnostics, Expectation};
pub use path::{JsonPath, PathSegment};
pub use validator::{contextualize, Context, Outcome, Validator, Verdict};

/// Validates `value` with `validator`, returning every diagnostic.
///
/// An empty result means the value is valid.
///
/// # Errors
///
/// Returns a [`ContractError`] if any validator in the graph breaks the
/// validator contract. Data problems never produce an error.
pub fn validate(value: &Value, validator: &Validator) -> Result<Diagnostics, ContractError> {
    contextualize(JsonPath::root(), validator)(value)
}

/// Returns whether `value` passes `validator`.
///
/// Equivalent to `validate(value, validator)?.is_empty()`; the full run is
/// always performed.
///
/// # Errors
///
/// Same as [`validate`].
pub fn valid(value: &Value, validator: &Validator) -> Result<bool, ContractError> {
    Ok(validate(value, validator)?.is_empty())
}
