//! Combinators that navigate into array elements.

use tracing::trace;

use crate::error::{ContractError, Diagnostics};
use crate::validator::Validator;
use crate::value::is_array;

/// Builds a validator that applies `validator` to every element.
///
/// Non-array input is rejected with `array`. Diagnostics from all elements are
/// concatenated in index order, each located at `path + index`. An empty array
/// is valid.
///
/// # Example
///
/// ```rust
/// use pathcheck::{each_element, validate, JsonPath, Validator};
/// use serde_json::json;
///
/// let above_three = each_element(Validator::new(|value, ctx| {
///     ctx.ensure(value.as_i64().is_some_and(|n| n > 3), "number greater than 3")
/// }));
///
/// let diagnostics = validate(&json!([3, 4, 1]), &above_three).unwrap();
/// let paths: Vec<String> = diagnostics.iter().map(|d| d.path.to_string()).collect();
/// assert_eq!(paths, vec!["[0]", "[2]"]);
/// ```
pub fn each_element(validator: Validator) -> Validator {
    Validator::new(move |value, ctx| {
        if !is_array(value) {
            return ctx.expected("array");
        }
        let items = value.as_array().into_iter().flatten();
        let diagnostics = items.enumerate().try_fold(
            Diagnostics::new(),
            |mut found, (index, item)| {
                found.extend(ctx.descend(index, &validator, item)?);
                Ok::<_, ContractError>(found)
            },
        )?;
        ctx.delegate(diagnostics)
    })
}

/// Builds a validator that requires `validator` to accept at least one element.
///
/// Non-array or empty input is rejected with `non-empty array`. Elements are
/// scanned in order and the scan stops at the first match. When nothing
/// matches, the expectation is `some ` followed by the first expectation of
/// the last element scanned.
///
/// # Example
///
/// ```rust
/// use pathcheck::{some_element, validate, Expectation, Validator};
/// use serde_json::json;
///
/// let some_big = some_element(Validator::new(|value, ctx| {
///     ctx.ensure(value.as_i64().is_some_and(|n| n > 3), "number greater than 3")
/// }));
///
/// assert!(validate(&json!([1, 2, 6]), &some_big).unwrap().is_empty());
///
/// let diagnostics = validate(&json!([1, 2, 3]), &some_big).unwrap();
/// assert_eq!(
///     diagnostics.first().unwrap().first_expected(),
///     &Expectation::text("some number greater than 3")
/// );
/// ```
pub fn some_element(validator: Validator) -> Validator {
    Validator::new(move |value, ctx| {
        if !is_array(value) {
            return ctx.expected("non-empty array");
        }

        // Stays None for an empty array.
        let mut last_failure = None;
        for (index, item) in value.as_array().into_iter().flatten().enumerate() {
            let diagnostics = ctx.descend(index, &validator, item)?;
            match diagnostics.into_iter().next() {
                None => {
                    trace!(index, "element matched, skipping the rest");
                    return ctx.pass();
                }
                Some(first) => last_failure = Some(first),
            }
        }

        match last_failure {
            Some(diagnostic) => ctx.expected(format!("some {}", diagnostic.first_expected())),
            None => ctx.expected("non-empty array"),
        }
    })
}

/// Older name for [`each_element`].
pub fn each_item(validator: Validator) -> Validator {
    each_element(validator)
}

/// Older name for [`some_element`].
pub fn some_item(validator: Validator) -> Validator {
    some_element(validator)
}
