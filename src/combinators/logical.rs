//! Conjunction and disjunction of validators.
//!
//! - [`all`]: every validator must pass; failures at the same path merge
//! - [`any`]: at least one validator must pass; failures become one
//!   [`Expectation::Any`]

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{ContractError, Diagnostic, Diagnostics, Expectation};
use crate::path::JsonPath;
use crate::validator::Validator;

/// Conjoins validators into one.
///
/// Every validator runs, even after one fails, so all failures are reported
/// in one pass. Diagnostics sharing a path are merged into a single
/// diagnostic whose expectations follow declaration order; distinct paths
/// stay separate, in first-encountered order.
///
/// # Errors
///
/// Returns [`ContractError::NoValidators`] if `validators` is empty.
///
/// # Example
///
/// ```rust
/// use pathcheck::{all, validate, Validator};
/// use serde_json::json;
///
/// let contains = |c: char| Validator::new(move |value, ctx| {
///     let found = value.as_str().is_some_and(|s| s.contains(c));
///     ctx.ensure(found, format!("string containing \"{}\"", c))
/// });
///
/// let both = all(vec![contains('a'), contains('b')]).unwrap();
///
/// let diagnostics = validate(&json!("gun"), &both).unwrap();
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics.first().unwrap().expected_len(), 2);
/// ```
pub fn all<I>(validators: I) -> Result<Validator, ContractError>
where
    I: IntoIterator<Item = Validator>,
{
    let validators = non_empty("all", validators)?;
    Ok(Validator::new(move |value, ctx| {
        let groups = validators
            .iter()
            .try_fold(IndexMap::new(), |groups, validator| {
                let diagnostics = ctx.within(validator, value)?;
                Ok::<_, ContractError>(diagnostics.into_iter().fold(groups, group_by_path))
            })?;
        let merged: Diagnostics = groups
            .into_values()
            .filter_map(|group| group.into_iter().reduce(Diagnostic::merge))
            .collect();
        ctx.delegate(merged)
    }))
}

/// Disjoins validators into one.
///
/// Validators run in order and the first one that passes makes the whole
/// validator pass. If none pass, the result is a single diagnostic at the
/// current path whose expectation is an [`Expectation::Any`] with one entry
/// per collected diagnostic: its expectation when it had exactly one, or an
/// [`Expectation::All`] group when it had several.
///
/// # Errors
///
/// Returns [`ContractError::NoValidators`] if `validators` is empty.
///
/// # Example
///
/// ```rust
/// use pathcheck::{any, validate, Validator};
/// use serde_json::json;
///
/// let contains = |c: char| Validator::new(move |value, ctx| {
///     let found = value.as_str().is_some_and(|s| s.contains(c));
///     ctx.ensure(found, format!("string containing \"{}\"", c))
/// });
///
/// let either = any(vec![contains('a'), contains('b')]).unwrap();
/// assert!(validate(&json!("bird"), &either).unwrap().is_empty());
///
/// let diagnostics = validate(&json!("dog"), &either).unwrap();
/// assert_eq!(
///     diagnostics.first().unwrap().first_expected().to_string(),
///     "string containing \"a\" or string containing \"b\""
/// );
/// ```
pub fn any<I>(validators: I) -> Result<Validator, ContractError>
where
    I: IntoIterator<Item = Validator>,
{
    let validators = non_empty("any", validators)?;
    Ok(Validator::new(move |value, ctx| {
        let mut failures = Vec::new();
        for (position, validator) in validators.iter().enumerate() {
            let diagnostics = ctx.within(validator, value)?;
            if diagnostics.is_empty() {
                trace!(position, "alternative matched");
                return ctx.pass();
            }
            failures.extend(diagnostics);
        }
        ctx.expected(Expectation::any(failures.into_iter().map(alternative)))
    }))
}

/// Alias for [`all`].
pub fn and<I>(validators: I) -> Result<Validator, ContractError>
where
    I: IntoIterator<Item = Validator>,
{
    all(validators)
}

/// Alias for [`any`].
pub fn or<I>(validators: I) -> Result<Validator, ContractError>
where
    I: IntoIterator<Item = Validator>,
{
    any(validators)
}

fn non_empty<I>(combinator: &'static str, validators: I) -> Result<Vec<Validator>, ContractError>
where
    I: IntoIterator<Item = Validator>,
{
    let validators: Vec<Validator> = validators.into_iter().collect();
    if validators.is_empty() {
        debug!(combinator, "combinator built without validators");
        return Err(ContractError::NoValidators { combinator });
    }
    Ok(validators)
}

fn group_by_path(
    mut groups: IndexMap<JsonPath, Vec<Diagnostic>>,
    diagnostic: Diagnostic,
) -> IndexMap<JsonPath, Vec<Diagnostic>> {
    groups
        .entry(diagnostic.path.clone())
        .or_default()
        .push(diagnostic);
    groups
}

// Singletons flatten; a branch that failed on several grounds stays grouped.
fn alternative(diagnostic: Diagnostic) -> Expectation {
    let mut expected = diagnostic.into_expected();
    if expected.len() == 1 {
        expected.swap_remove(0)
    } else {
        Expectation::All(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::own_property;
    use crate::validate;
    use serde_json::json;

    fn expect(text: &'static str) -> Validator {
        Validator::new(move |_, ctx| ctx.expected(text))
    }

    fn pass() -> Validator {
        Validator::new(|_, ctx| ctx.pass())
    }

    #[test]
    fn test_empty_lists_are_contract_violations() {
        assert_eq!(
            all(Vec::<Validator>::new()).unwrap_err(),
            ContractError::NoValidators { combinator: "all" }
        );
        assert_eq!(
            any(Vec::<Validator>::new()).unwrap_err(),
            ContractError::NoValidators { combinator: "any" }
        );
    }

    #[test]
    fn test_all_keeps_distinct_paths_in_first_seen_order() {
        let validator = all(vec![
            own_property("b", expect("x")),
            own_property("a", expect("y")),
            own_property("b", expect("z")),
        ])
        .unwrap();

        let diagnostics = validate(&json!({"a": 1, "b": 2}), &validator).unwrap();
        let summary: Vec<(String, Vec<Expectation>)> = diagnostics
            .into_iter()
            .map(|d| (d.path.to_string(), d.into_expected()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (
                    "b".to_string(),
                    vec![Expectation::text("x"), Expectation::text("z")]
                ),
                ("a".to_string(), vec![Expectation::text("y")]),
            ]
        );
    }

    #[test]
    fn test_all_passes_when_every_conjunct_passes() {
        let validator = all(vec![pass(), pass()]).unwrap();
        assert!(validate(&json!(null), &validator).unwrap().is_empty());
    }

    #[test]
    fn test_any_short_circuits() {
        let broken = Validator::new(|_, ctx| ctx.expected(Expectation::All(Vec::new())));
        // The broken validator is never reached.
        let validator = any(vec![pass(), broken]).unwrap();
        assert!(validate(&json!(1), &validator).unwrap().is_empty());
    }

    #[test]
    fn test_any_keeps_multi_expectation_groups_nested() {
        let conjunction = all(vec![expect("p"), expect("q")]).unwrap();
        let validator = any(vec![expect("o"), conjunction, expect("r")]).unwrap();

        let diagnostics = validate(&json!("v"), &validator).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.first().unwrap().first_expected(),
            &Expectation::any(vec![
                Expectation::text("o"),
                Expectation::all(vec![Expectation::text("p"), Expectation::text("q")]),
                Expectation::text("r"),
            ])
        );
    }

    #[test]
    fn test_any_of_any_nests_disjunction() {
        let inner = any(vec![expect("a"), expect("b")]).unwrap();
        let validator = any(vec![inner, expect("c")]).unwrap();

        let diagnostics = validate(&json!(0), &validator).unwrap();
        assert_eq!(
            serde_json::to_value(diagnostics.first().unwrap().first_expected()).unwrap(),
            json!({"any": [{"any": ["a", "b"]}, "c"]})
        );
    }

    #[test]
    fn test_aliases() {
        let conj = and(vec![expect("a"), expect("b")]).unwrap();
        let disj = or(vec![expect("a"), pass()]).unwrap();
        assert_eq!(validate(&json!(1), &conj).unwrap().len(), 1);
        assert!(validate(&json!(1), &disj).unwrap().is_empty());
    }
}
