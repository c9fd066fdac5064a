//! Error taxonomy for a validation run

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::templating::TemplateError;
use crate::validation::references::ReferenceError;
use crate::validation::{SchemaCompileError, SchemaFailure};

/// Broad category of a failed run, used by callers to pick an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigurationAbsent,
    MalformedDocument,
    SchemaViolation,
    ReferentialViolation,
    Io,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("config path does not exist: {}", .path.display())]
    MissingConfigDir { path: PathBuf },

    #[error("Neither Table nor DB configs found under: {}", .path.display())]
    NoConfigs { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Malformed(#[from] MalformedDocumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] TemplateError),

    #[error("{}", format_schema_failures(.0))]
    Schema(Vec<SchemaFailure>),

    #[error("Failed to build model from {file}: {source}")]
    Model {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    SchemaCompile(#[from] SchemaCompileError),
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingConfigDir { .. } | ConfigError::NoConfigs { .. } => {
                ErrorKind::ConfigurationAbsent
            }
            ConfigError::Malformed(_) | ConfigError::Template(_) | ConfigError::Model { .. } => {
                ErrorKind::MalformedDocument
            }
            ConfigError::Schema(_) => ErrorKind::SchemaViolation,
            ConfigError::Reference(_) => ErrorKind::ReferentialViolation,
            ConfigError::Io { .. } | ConfigError::SchemaCompile(_) => ErrorKind::Io,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn format_schema_failures(failures: &[SchemaFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text dialect a document is written in, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Hjson,
    Json5,
}

impl DocumentFormat {
    /// `.hjson` is Hjson; `.json5` and `.json` are JSON5
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("hjson") => DocumentFormat::Hjson,
            _ => DocumentFormat::Json5,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Hjson => f.write_str("Hjson"),
            DocumentFormat::Json5 => f.write_str("JSON5"),
        }
    }
}

/// A document that does not parse in its dialect
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in {file}: {reason} at {line}:{column}")]
#[diagnostic(help("Keys containing {{}}[],: or whitespace must be quoted"))]
pub struct MalformedDocumentError {
    pub format: DocumentFormat,
    pub file: String,
    pub reason: String,
    pub line: usize,
    pub column: usize,

    #[source_code]
    src: NamedSource<String>,

    #[label("{reason}")]
    span: SourceSpan,
}

impl MalformedDocumentError {
    pub fn from_json5_error(error: json5::Error, source: String, path: &Path) -> Self {
        #[allow(unreachable_patterns)]
        let (msg, location) = match error {
            json5::Error::Message { msg, location } => (msg, location),
            other => (other.to_string(), None),
        };
        let (line, column) = location
            .map(|loc| (loc.line, loc.column))
            .unwrap_or((1, 1));

        Self::new(DocumentFormat::Json5, pest_reason(&msg), line, column, source, path)
    }

    pub fn from_hjson_error(error: deser_hjson::Error, source: String, path: &Path) -> Self {
        #[allow(unreachable_patterns)]
        let (reason, line, column) = match error {
            deser_hjson::Error::Syntax { line, col, code, .. } => {
                (describe_code(&format!("{code:?}")), line, col)
            }
            deser_hjson::Error::Serde { line, col, message } => (message, line, col),
            other => (other.to_string(), 1, 1),
        };

        Self::new(DocumentFormat::Hjson, reason, line, column, source, path)
    }

    fn new(
        format: DocumentFormat,
        reason: String,
        line: usize,
        column: usize,
        source: String,
        path: &Path,
    ) -> Self {
        let offset = crate::error_utils::line_col_to_offset(&source, line, column);

        Self {
            format,
            file: crate::error_utils::file_name(path),
            reason,
            line,
            column,
            src: crate::error_utils::create_named_source(path, source),
            span: SourceSpan::from(offset),
        }
    }
}

/// The `= <message>` line of a rendered pest error, or the whole text
fn pest_reason(msg: &str) -> String {
    msg.lines()
        .rev()
        .find_map(|line| line.trim_start().strip_prefix("= "))
        .unwrap_or(msg)
        .trim()
        .to_string()
}

/// `ExpectedMapColon` -> `expected map colon`
fn describe_code(code: &str) -> String {
    let mut words = String::new();
    for ch in code.chars() {
        if ch.is_uppercase() && !words.is_empty() {
            words.push(' ');
        }
        words.extend(ch.to_lowercase());
    }
    words
}
