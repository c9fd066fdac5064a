//! Document discovery by category

use std::path::{Path, PathBuf};
use tracing::debug;

use super::file_scanner::FileScanner;
use crate::error::ConfigError;
use crate::validation::SchemaKind;

/// What a configuration document describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Table,
    Security,
    ModelVariable,
    DbVariable,
    DbConfig,
}

impl DocumentKind {
    pub fn schema_kind(self) -> SchemaKind {
        match self {
            DocumentKind::Table => SchemaKind::Table,
            DocumentKind::Security => SchemaKind::Security,
            DocumentKind::ModelVariable | DocumentKind::DbVariable => SchemaKind::Variable,
            DocumentKind::DbConfig => SchemaKind::DbConfig,
        }
    }
}

/// Raw text of one document, before placeholder substitution
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub content: String,
}

impl RawDocument {
    pub fn read(kind: DocumentKind, path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        debug!("  Read {:?} document: {}", kind, path.display());
        Ok(Self {
            kind,
            path,
            content,
        })
    }

    pub fn file_name(&self) -> String {
        crate::error_utils::file_name(&self.path)
    }
}

/// Every document found under a config root
#[derive(Debug, Default)]
pub struct DocumentSet {
    pub tables: Vec<RawDocument>,
    pub security: Option<RawDocument>,
    pub model_variables: Option<RawDocument>,
    pub db_variables: Option<RawDocument>,
    pub db_configs: Vec<RawDocument>,
}

impl DocumentSet {
    /// Discover and read all documents under `root`.
    ///
    /// Layout:
    /// - `models/tables/**` table documents
    /// - `models/security.*` and `models/variables.*`
    /// - `db/sql/**` DB connection documents
    /// - `db/variables.*`
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let models_dir = root.join("models");
        let db_dir = root.join("db");

        let tables = FileScanner::scan_directory_recursive(&models_dir.join("tables"))?
            .into_iter()
            .map(|path| RawDocument::read(DocumentKind::Table, path))
            .collect::<Result<Vec<_>, _>>()?;

        let db_configs = FileScanner::scan_directory_recursive(&db_dir.join("sql"))?
            .into_iter()
            .map(|path| RawDocument::read(DocumentKind::DbConfig, path))
            .collect::<Result<Vec<_>, _>>()?;

        let security = FileScanner::find_single(&models_dir, "security")
            .map(|path| RawDocument::read(DocumentKind::Security, path))
            .transpose()?;
        let model_variables = FileScanner::find_single(&models_dir, "variables")
            .map(|path| RawDocument::read(DocumentKind::ModelVariable, path))
            .transpose()?;
        let db_variables = FileScanner::find_single(&db_dir, "variables")
            .map(|path| RawDocument::read(DocumentKind::DbVariable, path))
            .transpose()?;

        debug!(
            "Discovered {} table documents, {} DB connection documents",
            tables.len(),
            db_configs.len()
        );

        Ok(Self {
            tables,
            security,
            model_variables,
            db_variables,
            db_configs,
        })
    }

    /// True when neither table nor DB connection documents exist
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.db_configs.is_empty()
    }
}
