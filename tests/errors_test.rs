//! Integration tests for contract violations.

use pathcheck::{
    all, any, each_element, only_properties, own_property, valid, validate, ContractError,
    Expectation, JsonPath, Validator,
};
use serde_json::json;

#[test]
fn test_conjunction_of_zero_validators() {
    let err = all(Vec::<Validator>::new()).unwrap_err();
    assert_eq!(err, ContractError::NoValidators { combinator: "all" });
    assert_eq!(err.to_string(), "all requires at least one validator");
}

#[test]
fn test_disjunction_of_zero_validators() {
    let err = any(std::iter::empty::<Validator>()).unwrap_err();
    assert_eq!(err, ContractError::NoValidators { combinator: "any" });
}

#[test]
fn test_only_properties_without_names() {
    assert_eq!(
        only_properties(Vec::<&str>::new()).unwrap_err(),
        ContractError::NoPropertyNames
    );
}

#[test]
fn test_more_than_one_unscoped_expectation() {
    let validator = Validator::new(|_, ctx| {
        ctx.expected(Expectation::all(vec![
            Expectation::text("a"),
            Expectation::text("b"),
        ]))
    });

    let expected = ContractError::UnscopedExpectations {
        path: JsonPath::root(),
    };
    assert_eq!(validate(&json!({}), &validator).unwrap_err(), expected);
    assert_eq!(valid(&json!({}), &validator).unwrap_err(), expected);
}

#[test]
fn test_violation_deep_in_graph_is_not_a_diagnostic() {
    let broken = Validator::new(|_, ctx| ctx.expected(Expectation::any(Vec::<Expectation>::new())));
    let validator = own_property("items", each_element(all(vec![broken]).unwrap()));

    let err = validate(&json!({"items": [1]}), &validator).unwrap_err();
    assert_eq!(
        err,
        ContractError::EmptyAlternatives {
            path: JsonPath::root().push_field("items").push_index(0)
        }
    );
    assert_eq!(
        err.to_string(),
        "validator at items[0] returned an empty set of alternatives"
    );
}

#[test]
fn test_violation_not_reached_by_data_is_silent() {
    let broken = Validator::new(|_, ctx| ctx.expected(Expectation::all(Vec::<Expectation>::new())));
    let validator = own_property("items", each_element(broken));

    assert!(valid(&json!({"items": []}), &validator).unwrap());
    assert!(validate(&json!({"items": [0]}), &validator).is_err());
}
