//! Cross-document checks that need every document of a run

mod connection_validator;
mod error;
mod extends_resolver;
mod join_validator;
mod reference_validator;
mod registry;
mod role_validator;
mod sql_validator;
mod variable_validator;

#[cfg(test)]
pub(crate) mod test_support;


pub use error::ReferenceError;
pub use reference_validator::{ReferenceInput, ReferenceValidator};
pub use registry::ModelRegistry;
pub use sql_validator::{DISALLOWED_SQL_WORDS, contains_disallowed_sql};
pub use variable_validator::VariableValidator;
