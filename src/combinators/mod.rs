//! Combinators for building validators out of simpler ones.
//!
//! Structural combinators navigate into the data:
//! - [`own_property`], [`optional_property`], [`only_properties`] for maps
//! - [`each_element`], [`some_element`] for arrays
//!
//! Logical combinators compose validators over the same value:
//! - [`all`]: every validator must pass
//! - [`any`]: at least one validator must pass
//!
//! # Example
//!
//! ```rust
//! use pathcheck::{all, each_element, own_property, validate, Validator};
//! use serde_json::json;
//!
//! let non_empty_string = Validator::new(|value, ctx| {
//!     ctx.ensure(value.as_str().is_some_and(|s| !s.is_empty()), "non-empty string")
//! });
//!
//! let post = all(vec![
//!     own_property("author", non_empty_string.clone()),
//!     own_property("tags", each_element(non_empty_string)),
//! ])
//! .unwrap();
//!
//! let diagnostics = validate(&json!({"author": "", "tags": ["x", ""]}), &post).unwrap();
//! let paths: Vec<String> = diagnostics.iter().map(|d| d.path.to_string()).collect();
//! assert_eq!(paths, vec!["author", "tags[1]"]);
//! ```

mod array;
mod logical;
mod object;

pub use array::{each_element, each_item, some_element, some_item};
pub use logical::{all, and, any, or};
pub use object::{only_properties, optional_property, own_property};
