//! Diagnostics for validation failures and errors for malformed validators.

mod contract;
mod diagnostic;

pub use contract::ContractError;
pub use diagnostic::{Diagnostic, Diagnostics, Expectation};

pub(crate) use diagnostic::display_path;
