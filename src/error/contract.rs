//! Programmer errors in how validators are built or what they return.
//!
//! These are distinct from validation failures: a [`ContractError`] means the
//! validator graph itself is malformed, not that the data is invalid. They are
//! never folded into [`Diagnostics`](crate::Diagnostics).

use thiserror::Error;

use crate::error::diagnostic::display_path;
use crate::path::JsonPath;

/// A malformed validator or combinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A conjunction or disjunction was built from an empty list.
    #[error("{combinator} requires at least one validator")]
    NoValidators {
        /// Name of the combinator factory.
        combinator: &'static str,
    },

    /// A property whitelist was built without any names.
    #[error("only_properties requires at least one property name")]
    NoPropertyNames,

    /// A validator returned a bare sequence of expectations with no path.
    #[error("validator at {} returned more than one expectation without a path", display_path(.path))]
    UnscopedExpectations {
        /// Where the offending validator was invoked.
        path: JsonPath,
    },

    /// A validator returned a disjunction with no alternatives.
    #[error("validator at {} returned an empty set of alternatives", display_path(.path))]
    EmptyAlternatives {
        /// Where the offending validator was invoked.
        path: JsonPath,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ContractError::NoValidators { combinator: "all" }.to_string(),
            "all requires at least one validator"
        );
        assert_eq!(
            ContractError::NoPropertyNames.to_string(),
            "only_properties requires at least one property name"
        );
        assert_eq!(
            ContractError::UnscopedExpectations {
                path: JsonPath::root()
            }
            .to_string(),
            "validator at (root) returned more than one expectation without a path"
        );
        assert_eq!(
            ContractError::EmptyAlternatives {
                path: JsonPath::root().push_field("a").push_index(0)
            }
            .to_string(),
            "validator at a[0] returned an empty set of alternatives"
        );
    }
}
