pub mod error;
pub mod error_utils;
pub mod graph;
pub mod loader;
pub mod models;
pub mod templating;
pub mod validation;

pub use error::{ConfigError, ErrorKind};
pub use loader::ConfigLoader;
pub use models::ValidatedConfig;
