pub mod engine;
pub mod error;
pub mod variables;

pub use engine::TemplateEngine;
pub use error::TemplateError;
pub use variables::VariableSet;
