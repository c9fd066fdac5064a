use jsonschema::Validator;
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::schemas::{SchemaKind, SchemaRetriever, get_schema};

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

/// Every schema violation found in one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFailure {
    pub file: String,
    pub violations: Vec<String>,
}

impl fmt::Display for SchemaFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema validation failed for: {}", self.file)?;
        for violation in &self.violations {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to compile {kind} schema: {reason}")]
pub struct SchemaCompileError {
    pub kind: SchemaKind,
    pub reason: String,
}

/// Holds one compiled validator per schema kind
///
/// Schemas are compiled once on construction and only read afterwards.
pub struct SchemaValidator {
    validators: HashMap<SchemaKind, Validator>,
}

impl SchemaValidator {
    pub fn new() -> Result<Self, SchemaCompileError> {
        let mut validators = HashMap::new();

        for kind in SchemaKind::ALL {
            let schema = get_schema(kind).map_err(|e| SchemaCompileError {
                kind,
                reason: e.to_string(),
            })?;
            let validator = schema_draft::options()
                .with_retriever(SchemaRetriever)
                .build(&schema)
                .map_err(|e| SchemaCompileError {
                    kind,
                    reason: e.to_string(),
                })?;
            validators.insert(kind, validator);
        }

        Ok(Self { validators })
    }

    /// Validate a parsed document, collecting every violation in one pass
    pub fn validate(
        &self,
        kind: SchemaKind,
        file_name: &str,
        instance: &Value,
    ) -> Result<(), SchemaFailure> {
        let Some(validator) = self.validators.get(&kind) else {
            return Err(SchemaFailure {
                file: file_name.to_string(),
                violations: vec![format!("$: no {kind} schema is available")],
            });
        };

        let violations: Vec<String> = validator
            .iter_errors(instance)
            .flat_map(|error| describe_error(&error))
            .collect();

        if violations.is_empty() {
            debug!("    ✓ {kind} schema validation passed: {file_name}");
            Ok(())
        } else {
            Err(SchemaFailure {
                file: file_name.to_string(),
                violations,
            })
        }
    }
}

/// Render one validator error as `<locator>: <message>` lines
fn describe_error(error: &jsonschema::ValidationError) -> Vec<String> {
    let pointer = error.instance_path.to_string();

    match &error.kind {
        // One line per unexpected property, located at the property itself
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
            .iter()
            .map(|prop| {
                format!(
                    "{}: is not defined in the schema and the schema does not allow additional properties",
                    to_locator(&child_pointer(&pointer, prop))
                )
            })
            .collect(),
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            vec![format!(
                "{}: is missing but it is required",
                to_locator(&child_pointer(&pointer, &name))
            )]
        }
        ValidationErrorKind::Pattern { pattern } => vec![format!(
            "{}: does not match the regex pattern {pattern}",
            to_locator(&pointer)
        )],
        ValidationErrorKind::Enum { options } => vec![format!(
            "{}: does not have a value in the enumeration [{}]",
            to_locator(&pointer),
            format_options(options)
        )],
        _ => vec![format!("{}: {error}", to_locator(&pointer))],
    }
}

fn child_pointer(pointer: &str, name: &str) -> String {
    let escaped = name.replace('~', "~0").replace('/', "~1");
    format!("{pointer}/{escaped}")
}

fn format_options(options: &Value) -> String {
    match options {
        Value::Array(values) => values
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Convert a JSON pointer (`/dbconfigs/1/url`) into a `$`-rooted locator (`$.dbconfigs[1].url`)
pub fn to_locator(pointer: &str) -> String {
    let mut locator = String::from("$");

    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            locator.push('[');
            locator.push_str(&segment);
            locator.push(']');
        } else {
            locator.push('.');
            locator.push_str(&segment);
        }
    }

    locator
}
