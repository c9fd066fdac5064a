//! Template error types with miette integration

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid placeholder syntax in {file}: {reason}")]
pub struct TemplateError {
    pub file: String,

    #[source_code]
    src: NamedSource<String>,

    #[label("{}", self.reason)]
    span: Option<SourceSpan>,

    pub reason: String,

    #[help]
    help: Option<String>,

    #[source]
    source: Option<minijinja::Error>,
}

impl TemplateError {
    /// Create a new template error from a MiniJinja error
    pub fn from_minijinja_error(error: minijinja::Error, source: String, source_path: &Path) -> Self {
        let (span, reason, help) = Self::extract_error_info(&error, &source);
        let src = crate::error_utils::create_named_source(source_path, source);

        Self {
            file: crate::error_utils::file_name(source_path),
            src,
            span,
            reason,
            help,
            source: Some(error),
        }
    }

    fn extract_error_info(
        error: &minijinja::Error,
        source: &str,
    ) -> (Option<SourceSpan>, String, Option<String>) {
        let span = match (error.range(), error.line()) {
            (Some(range), _) => Some(SourceSpan::from(range)),
            // MiniJinja uses 1-based line numbers
            (None, Some(line)) => Some(SourceSpan::from(
                crate::error_utils::line_col_to_offset(source, line, 1),
            )),
            (None, None) => None,
        };

        let detail = error.detail().unwrap_or("invalid syntax");
        let reason = match error.kind() {
            minijinja::ErrorKind::SyntaxError => format!("syntax error: {detail}"),
            minijinja::ErrorKind::UnknownFilter => format!("unknown filter: {detail}"),
            minijinja::ErrorKind::UnknownFunction => format!("unknown function: {detail}"),
            minijinja::ErrorKind::InvalidOperation => format!("invalid operation: {detail}"),
            _ => error.to_string(),
        };

        let help = match error.kind() {
            minijinja::ErrorKind::SyntaxError => Some(
                "Placeholders are written as {{name}}; quote any literal '{{' or '{%' in strings"
                    .to_string(),
            ),
            minijinja::ErrorKind::UnknownFilter | minijinja::ErrorKind::UnknownFunction => Some(
                "Placeholders only support plain variable names from the variables file"
                    .to_string(),
            ),
            _ => None,
        };

        (span, reason, help)
    }
}
