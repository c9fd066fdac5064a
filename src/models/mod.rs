pub mod db_config;
pub mod display;
pub mod security;
pub mod table;
pub mod validated;

// Re-export commonly used types
pub use db_config::{DbConfigDocument, DbConnection};
pub use security::{RuleType, SecurityConfig, SecurityRule};
pub use table::{
    Cardinality, Dimension, FieldType, Join, JoinKind, JoinType, Measure, Table, TableDocument,
};
pub use validated::ValidatedConfig;
