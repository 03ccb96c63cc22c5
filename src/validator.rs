//! Validators, their context, and the contextualizer.
//!
//! A [`Validator`] is a shared, immutable function from a value and a
//! [`Context`] to a [`Verdict`]. The contextualizer ([`contextualize`]) binds a
//! validator to a path and normalizes its [`Outcome`] into [`Diagnostics`].
//! It is the single place where diagnostics are located: combinators never
//! build a [`Diagnostic`] by hand, they re-enter through the contextualizer
//! with an extended path.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{display_path, ContractError, Diagnostic, Diagnostics, Expectation};
use crate::path::{JsonPath, PathSegment};

/// What a validator concluded about a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value is valid.
    Valid,
    /// The value is invalid for a single reason at the current path.
    Invalid(Expectation),
    /// The validator delegated to sub-validators, which already located their
    /// failures. An empty list means valid.
    Delegated(Diagnostics),
}

/// The return type of every validator.
///
/// `Err` is reserved for contract violations in nested validators; plain
/// validation failures are `Ok(Outcome::Invalid(..))`.
pub type Verdict = Result<Outcome, ContractError>;

type CheckFn = dyn Fn(&Value, Context<'_>) -> Verdict + Send + Sync;

/// A reusable validator.
///
/// Cloning is cheap; clones share the same function. Validators hold no
/// mutable state, so one instance can be used from many threads at once.
///
/// # Example
///
/// ```rust
/// use pathcheck::{validate, Validator};
/// use serde_json::json;
///
/// let is_string = Validator::new(|value, ctx| ctx.ensure(value.is_string(), "string"));
///
/// assert!(validate(&json!(""), &is_string).unwrap().is_empty());
/// assert_eq!(validate(&json!({}), &is_string).unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct Validator {
    check: Arc<CheckFn>,
}

impl Validator {
    /// Wraps a function as a validator.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, Context<'_>) -> Verdict + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Invokes the raw validator function.
    ///
    /// The result is not normalized; use [`contextualize`] or
    /// [`Context::within`] to get located diagnostics.
    pub fn check(&self, value: &Value, ctx: Context<'_>) -> Verdict {
        (self.check)(value, ctx)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// The explicit context handed to a validator on each invocation.
///
/// Carries the current path and offers helpers for building a [`Verdict`].
/// It is `Copy` and passed by value; nothing about it outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    path: &'a JsonPath,
}

impl<'a> Context<'a> {
    /// Creates a context at `path`.
    pub fn new(path: &'a JsonPath) -> Self {
        Self { path }
    }

    /// The location of the value being validated.
    pub fn path(&self) -> &'a JsonPath {
        self.path
    }

    /// Accepts the value.
    pub fn pass(self) -> Verdict {
        Ok(Outcome::Valid)
    }

    /// Rejects the value with a single expectation.
    pub fn expected(self, expectation: impl Into<Expectation>) -> Verdict {
        Ok(Outcome::Invalid(expectation.into()))
    }

    /// Accepts the value if `condition` holds, otherwise rejects it.
    pub fn ensure(self, condition: bool, expectation: impl Into<Expectation>) -> Verdict {
        if condition {
            self.pass()
        } else {
            self.expected(expectation)
        }
    }

    /// Returns already-located diagnostics from sub-validators.
    pub fn delegate(self, diagnostics: Diagnostics) -> Verdict {
        Ok(Outcome::Delegated(diagnostics))
    }

    /// Runs `validator` on `value` at this context's path.
    pub fn within(self, validator: &Validator, value: &Value) -> Result<Diagnostics, ContractError> {
        run(self.path, validator, value)
    }

    /// Runs `validator` on `value` at this path extended by `segment`.
    pub fn descend(
        self,
        segment: impl Into<PathSegment>,
        validator: &Validator,
        value: &Value,
    ) -> Result<Diagnostics, ContractError> {
        run(&self.path.push(segment), validator, value)
    }
}

/// Binds `validator` to `path`, producing a function from a value to its
/// located diagnostics.
///
/// # Normalization
///
/// - `Valid` → no diagnostics
/// - `Invalid(Text | Any)` → one diagnostic at `path` with `found` = the value
/// - `Invalid(All(..))` → [`ContractError::UnscopedExpectations`]
/// - `Invalid(Any([]))` → [`ContractError::EmptyAlternatives`]
/// - `Delegated(d)` → `d`, unchanged
///
/// # Example
///
/// ```rust
/// use pathcheck::{contextualize, JsonPath, Validator};
/// use serde_json::json;
///
/// let positive = Validator::new(|value, ctx| {
///     ctx.ensure(value.as_f64().is_some_and(|n| n > 0.0), "positive number")
/// });
///
/// let at_count = contextualize(JsonPath::root().push_field("count"), &positive);
/// let diagnostics = at_count(&json!(-1)).unwrap();
/// assert_eq!(diagnostics.first().unwrap().path.to_string(), "count");
/// ```
pub fn contextualize(
    path: JsonPath,
    validator: &Validator,
) -> impl Fn(&Value) -> Result<Diagnostics, ContractError> + '_ {
    move |value| run(&path, validator, value)
}

fn run(path: &JsonPath, validator: &Validator, value: &Value) -> Result<Diagnostics, ContractError> {
    trace!(path = %display_path(path), "contextualizing validator");
    match validator.check(value, Context::new(path))? {
        Outcome::Valid => Ok(Diagnostics::new()),
        Outcome::Invalid(Expectation::All(_)) => {
            debug!(path = %display_path(path), "validator returned unscoped expectations");
            Err(ContractError::UnscopedExpectations { path: path.clone() })
        }
        Outcome::Invalid(Expectation::Any(alternatives)) if alternatives.is_empty() => {
            debug!(path = %display_path(path), "validator returned no alternatives");
            Err(ContractError::EmptyAlternatives { path: path.clone() })
        }
        Outcome::Invalid(expectation) => Ok(Diagnostics::single(Diagnostic::new(
            path.clone(),
            value.clone(),
            expectation,
        ))),
        Outcome::Delegated(diagnostics) => Ok(diagnostics),
    }
}
