//! Combinators that navigate into map properties.

use serde_json::Value;

use crate::error::{ContractError, Diagnostics};
use crate::text::{conjunction_list, plural, quoted};
use crate::validator::{Context, Validator, Verdict};
use crate::value::is_object;

/// Builds a validator that requires an own property `name` and validates its
/// value with `validator`.
///
/// - non-map input → `object with property "name"`
/// - missing property → `own property "name"`
/// - otherwise → diagnostics from `validator` at `path + name`
///
/// # Example
///
/// ```rust
/// use pathcheck::{own_property, validate, JsonPath, Validator};
/// use serde_json::json;
///
/// let has_name = own_property("name", Validator::new(|value, ctx| {
///     ctx.ensure(value == &json!(true), "true")
/// }));
///
/// let diagnostics = validate(&json!({"name": false}), &has_name).unwrap();
/// assert_eq!(diagnostics.first().unwrap().path, JsonPath::root().push_field("name"));
/// ```
pub fn own_property(name: impl Into<String>, validator: Validator) -> Validator {
    let name = name.into();
    Validator::new(move |value, ctx| check_property(&name, &validator, true, value, ctx))
}

/// Builds a validator that validates property `name` with `validator` when it
/// is present. A missing property is valid; non-map input is not.
pub fn optional_property(name: impl Into<String>, validator: Validator) -> Validator {
    let name = name.into();
    Validator::new(move |value, ctx| check_property(&name, &validator, false, value, ctx))
}

fn check_property(
    name: &str,
    validator: &Validator,
    required: bool,
    value: &Value,
    ctx: Context<'_>,
) -> Verdict {
    if !is_object(value) {
        return ctx.expected(format!("object with property {}", quoted(name)));
    }
    match value.get(name) {
        Some(property) => ctx.delegate(ctx.descend(name, validator, property)?),
        None if required => ctx.expected(format!("own property {}", quoted(name))),
        None => ctx.pass(),
    }
}

/// Builds a validator that rejects every property not named in `names`.
///
/// The allowed properties are not required to exist. Each disallowed key
/// yields its own diagnostic at `path + key`, in key order. Non-map input is
/// rejected with a description of the allowed set.
///
/// # Errors
///
/// Returns [`ContractError::NoPropertyNames`] if `names` is empty.
///
/// # Example
///
/// ```rust
/// use pathcheck::{only_properties, validate};
/// use serde_json::json;
///
/// let whitelist = only_properties(["a", "b"]).unwrap();
///
/// let diagnostics = validate(&json!({"a": 1, "b": 2, "c": 3, "d": 4}), &whitelist).unwrap();
/// assert_eq!(diagnostics.len(), 2);
/// assert!(validate(&json!({"a": 1}), &whitelist).unwrap().is_empty());
/// ```
pub fn only_properties<I, S>(names: I) -> Result<Validator, ContractError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = names.into_iter().map(Into::into).collect();
    if allowed.is_empty() {
        return Err(ContractError::NoPropertyNames);
    }

    let quoted_names: Vec<String> = allowed.iter().map(|name| quoted(name)).collect();
    let description = format!(
        "object with only the {} {}",
        plural(allowed.len(), "property", "properties"),
        conjunction_list("and", &quoted_names)
    );

    Ok(Validator::new(move |value, ctx| {
        if !is_object(value) {
            return ctx.expected(description.as_str());
        }
        let diagnostics = value
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(key, _)| !allowed.contains(*key))
            .try_fold(Diagnostics::new(), |mut found, (key, property)| {
                found.extend(ctx.descend(key.as_str(), &no_property(key), property)?);
                Ok::<_, ContractError>(found)
            })?;
        ctx.delegate(diagnostics)
    }))
}

fn no_property(key: &str) -> Validator {
    let message = format!("no property {}", quoted(key));
    Validator::new(move |_, ctx| ctx.expected(message.as_str()))
}
