use jsonschema::{Retrieve, Uri};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// Embed schemas at compile time
const TABLE_SCHEMA: &str = include_str!("../../schemas/v1/table-schema.json");
const SECURITY_SCHEMA: &str = include_str!("../../schemas/v1/security-schema.json");
const VARIABLE_SCHEMA: &str = include_str!("../../schemas/v1/variable-schema.json");
const DBCONFIG_SCHEMA: &str = include_str!("../../schemas/v1/dbconfig-schema.json");
const DEFINITIONS_SCHEMA: &str = include_str!("../../schemas/v1/definitions.json");

/// Which schema governs a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKind {
    Table,
    Security,
    /// Shared by model variables and DB variables
    Variable,
    DbConfig,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Table,
        SchemaKind::Security,
        SchemaKind::Variable,
        SchemaKind::DbConfig,
    ];

    pub fn schema_source(self) -> &'static str {
        match self {
            SchemaKind::Table => TABLE_SCHEMA,
            SchemaKind::Security => SECURITY_SCHEMA,
            SchemaKind::Variable => VARIABLE_SCHEMA,
            SchemaKind::DbConfig => DBCONFIG_SCHEMA,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaKind::Table => "table",
            SchemaKind::Security => "security",
            SchemaKind::Variable => "variable",
            SchemaKind::DbConfig => "db config",
        };
        f.write_str(name)
    }
}

// Custom retriever for embedded schemas
pub struct SchemaRetriever;

impl Retrieve for SchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<String>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        match uri.as_str() {
            "./definitions.json" | "https://modelconf.dev/schemas/v1/definitions.json" => {
                Ok(serde_json::from_str(DEFINITIONS_SCHEMA)?)
            }
            "https://modelconf.dev/schemas/v1/table-schema.json" => {
                Ok(serde_json::from_str(TABLE_SCHEMA)?)
            }
            "https://modelconf.dev/schemas/v1/security-schema.json" => {
                Ok(serde_json::from_str(SECURITY_SCHEMA)?)
            }
            "https://modelconf.dev/schemas/v1/variable-schema.json" => {
                Ok(serde_json::from_str(VARIABLE_SCHEMA)?)
            }
            "https://modelconf.dev/schemas/v1/dbconfig-schema.json" => {
                Ok(serde_json::from_str(DBCONFIG_SCHEMA)?)
            }
            // Handle fragment references by stripping the fragment part
            uri_str if uri_str.contains('#') => {
                let base_uri = uri_str.split('#').next().unwrap_or("");
                self.retrieve(
                    &Uri::from_str(base_uri).map_err(|e| format!("Failed to parse URI: {e}"))?,
                )
            }
            _ => Err(format!("Unknown schema URI: {uri}").into()),
        }
    }
}

pub fn get_schema(kind: SchemaKind) -> Result<Value, serde_json::Error> {
    serde_json::from_str(kind.schema_source())
}
