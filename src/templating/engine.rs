use minijinja::{Environment, UndefinedBehavior};
use std::collections::BTreeSet;
use std::path::Path;

use super::error::TemplateError;
use super::variables::VariableSet;

/// Resolves `{{name}}` placeholders in raw document text
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            env: configured_environment(),
        }
    }

    /// Substitute every placeholder with the string form of its variable.
    ///
    /// Placeholders without a variable render as the empty string; they
    /// are reported by the undefined-variable check once every document
    /// has been loaded.
    pub fn render(
        &self,
        template: &str,
        variables: &VariableSet,
        path: &Path,
    ) -> Result<String, TemplateError> {
        self.env
            .render_str(template, variables)
            .map_err(|error| TemplateError::from_minijinja_error(error, template.to_string(), path))
    }

    /// Names of all placeholders referenced by unresolved text
    pub fn placeholders(&self, template: &str, path: &Path) -> Result<BTreeSet<String>, TemplateError> {
        // Templates compiled from borrowed text need an environment that
        // lives no longer than the text itself.
        let env = configured_environment();
        let compiled = env
            .template_from_str(template)
            .map_err(|error| TemplateError::from_minijinja_error(error, template.to_string(), path))?;

        Ok(compiled.undeclared_variables(false).into_iter().collect())
    }
}

fn configured_environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Lenient);
    env.set_keep_trailing_newline(true);
    env
}
