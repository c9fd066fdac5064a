//! Per-document schema validation and cross-document reference checks

mod merger;
pub mod references;
mod schema_validator;
mod schemas;


pub use merger::TableMerger;
pub use schema_validator::{SchemaCompileError, SchemaFailure, SchemaValidator, to_locator};
pub use schemas::SchemaKind;
