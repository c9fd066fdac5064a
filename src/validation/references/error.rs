use thiserror::Error;

use super::sql_validator::DISALLOWED_SQL_WORDS;

/// A cross-document consistency violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Duplicate!! Either Table or DB configs found with the same name.")]
    DuplicateName { name: String },

    #[error("Model: {to} is neither included in dynamic models nor in static models")]
    UnknownJoinTarget { table: String, to: String },

    #[error(
        "Join name must be used before '.' in join definition. Found '{found}' instead of '{expected}'"
    )]
    JoinAliasMismatch {
        table: String,
        found: String,
        expected: String,
    },

    #[error("DBConnection name mismatch between table: {table} and tables in its Join Clause.")]
    DbConnectionMismatch { table: String, joined: String },

    #[error(
        "{name} is used as a variable in either table or security config files but is not defined in variables config file."
    )]
    UndefinedVariable { name: String },

    #[error(
        "{name} is used as a variable in db config files but is not defined in db variables config file."
    )]
    UndefinedDbVariable { name: String },

    #[error("Table: {table} extends {parent} which is not included in dynamic models")]
    UnknownParent { table: String, parent: String },

    #[error("Circular extend detected involving table: {table}")]
    CircularExtend { table: String },

    #[error(
        "sql/definition provided in table config contain either ';' or one of these words: [{}] (table: {table})",
        DISALLOWED_SQL_WORDS.join(", ")
    )]
    DisallowedSql { table: String, location: String },

    #[error("ROLE provided in security config contain one of these words: [,]")]
    InvalidRole { role: String },
}
