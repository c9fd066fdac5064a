//! Validation driver: discovers, resolves, validates and loads every document

pub mod documents;
pub mod file_scanner;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use self::documents::{DocumentSet, RawDocument};
use crate::error::{ConfigError, DocumentFormat, MalformedDocumentError};
use crate::models::{DbConfigDocument, SecurityConfig, TableDocument, ValidatedConfig};
use crate::templating::{TemplateEngine, VariableSet};
use crate::validation::references::{ReferenceInput, ReferenceValidator, VariableValidator};
use crate::validation::{SchemaFailure, SchemaValidator};

pub use documents::DocumentKind;

/// A document after placeholder substitution and parsing
struct ParsedDocument<'a> {
    raw: &'a RawDocument,
    value: Value,
}

pub struct ConfigLoader {
    config_dir: PathBuf,
    static_models: BTreeSet<String>,
    template_engine: TemplateEngine,
    schema_validator: SchemaValidator,
}

impl ConfigLoader {
    /// Create a loader for `config_dir`, compiling every schema up front
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            static_models: BTreeSet::new(),
            template_engine: TemplateEngine::new(),
            schema_validator: SchemaValidator::new()?,
        })
    }

    /// Names of models defined outside the config directory that joins may target
    pub fn with_static_models<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.static_models.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate all configuration, returning the validated model.
    ///
    /// Placeholders without a variable are reported before any document is
    /// rendered. Malformed documents abort at once. Schema violations are
    /// collected across every document before failing. Referential checks
    /// run only when all documents are schema-valid and stop at the first
    /// violation.
    pub fn load_all(&self) -> Result<ValidatedConfig, ConfigError> {
        if !self.config_dir.exists() {
            return Err(ConfigError::MissingConfigDir {
                path: self.config_dir.clone(),
            });
        }

        // 1. Discover documents
        debug!("Discovering documents under {}", self.config_dir.display());
        let docs = DocumentSet::discover(&self.config_dir)?;
        if docs.is_empty() {
            return Err(ConfigError::NoConfigs {
                path: self.config_dir.clone(),
            });
        }

        let mut failures = Vec::new();

        // 2. Variables are plain documents with no placeholders of their own
        let variables = self.load_variables(docs.model_variables.as_ref(), &mut failures)?;
        let db_variables = self.load_variables(docs.db_variables.as_ref(), &mut failures)?;

        // 3. Every placeholder needs a variable before anything is rendered
        let mut placeholders = BTreeSet::new();
        for doc in docs.security.iter().chain(&docs.tables) {
            placeholders.extend(self.template_engine.placeholders(&doc.content, &doc.path)?);
        }
        let mut db_placeholders = BTreeSet::new();
        for doc in &docs.db_configs {
            db_placeholders.extend(self.template_engine.placeholders(&doc.content, &doc.path)?);
        }
        VariableValidator::new(&variables).validate_model_placeholders(&placeholders)?;
        VariableValidator::new(&db_variables).validate_db_placeholders(&db_placeholders)?;
        debug!(
            "✓ All {} placeholders have variables",
            placeholders.len() + db_placeholders.len()
        );

        // 4. Model documents, resolved against model variables
        let security = docs
            .security
            .as_ref()
            .map(|doc| self.resolve(doc, &variables, &mut failures))
            .transpose()?;
        let tables = docs
            .tables
            .iter()
            .map(|doc| self.resolve(doc, &variables, &mut failures))
            .collect::<Result<Vec<_>, _>>()?;

        // 5. DB connection documents, resolved against DB variables
        let db_configs = docs
            .db_configs
            .iter()
            .map(|doc| self.resolve(doc, &db_variables, &mut failures))
            .collect::<Result<Vec<_>, _>>()?;

        if !failures.is_empty() {
            return Err(ConfigError::Schema(failures));
        }
        info!("✓ Schema validation passed for all documents");

        // 6. Typed models
        let security: Option<SecurityConfig> = security.map(to_model).transpose()?;
        let mut table_list = Vec::new();
        for parsed in tables {
            let document: TableDocument = to_model(parsed)?;
            table_list.extend(document.tables);
        }
        let mut connections = Vec::new();
        for parsed in db_configs {
            let document: DbConfigDocument = to_model(parsed)?;
            connections.extend(document.dbconfigs);
        }

        // 7. Cross-document checks
        let validator = ReferenceValidator::new(self.static_models.clone());
        let mut resolved = validator.validate_all(ReferenceInput {
            tables: &table_list,
            connections: &connections,
            security: security.as_ref(),
        })?;

        resolved.sort_by(|a, b| a.name.cmp(&b.name));
        connections.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            "✓ Loaded {} tables and {} DB connections from {}",
            resolved.len(),
            connections.len(),
            self.config_dir.display()
        );

        Ok(ValidatedConfig {
            tables: resolved,
            security,
            variables,
            db_variables,
            db_connections: connections,
            placeholders,
        })
    }

    fn load_variables(
        &self,
        doc: Option<&RawDocument>,
        failures: &mut Vec<SchemaFailure>,
    ) -> Result<VariableSet, ConfigError> {
        let Some(doc) = doc else {
            return Ok(VariableSet::new());
        };

        let value = parse_document(&doc.content, &doc.path)?;
        if let Err(failure) =
            self.schema_validator
                .validate(doc.kind.schema_kind(), &doc.file_name(), &value)
        {
            failures.push(failure);
        }

        let variables = VariableSet::from_document(&value);
        debug!(
            "  Loaded {} variables from {}: {}",
            variables.len(),
            doc.path.display(),
            variables.names().collect::<Vec<_>>().join(", ")
        );
        Ok(variables)
    }

    /// Substitute variables, parse and schema-check one document
    fn resolve<'a>(
        &self,
        doc: &'a RawDocument,
        variables: &VariableSet,
        failures: &mut Vec<SchemaFailure>,
    ) -> Result<ParsedDocument<'a>, ConfigError> {
        debug!("  Resolving {}", doc.path.display());

        let rendered = self
            .template_engine
            .render(&doc.content, variables, &doc.path)?;
        let value = parse_document(&rendered, &doc.path)?;

        if let Err(failure) =
            self.schema_validator
                .validate(doc.kind.schema_kind(), &doc.file_name(), &value)
        {
            failures.push(failure);
        }

        Ok(ParsedDocument { raw: doc, value })
    }
}

fn parse_document(content: &str, path: &Path) -> Result<Value, ConfigError> {
    let parsed = match DocumentFormat::from_path(path) {
        DocumentFormat::Hjson => deser_hjson::from_str(content).map_err(|error| {
            MalformedDocumentError::from_hjson_error(error, content.to_string(), path)
        }),
        DocumentFormat::Json5 => json5::from_str(content).map_err(|error| {
            MalformedDocumentError::from_json5_error(error, content.to_string(), path)
        }),
    };
    Ok(parsed?)
}

fn to_model<T: DeserializeOwned>(parsed: ParsedDocument<'_>) -> Result<T, ConfigError> {
    serde_json::from_value(parsed.value).map_err(|source| ConfigError::Model {
        file: parsed.raw.file_name(),
        source,
    })
}
