use std::collections::BTreeSet;

use super::error::ReferenceError;
use crate::templating::VariableSet;

pub struct VariableValidator<'a> {
    variables: &'a VariableSet,
}

impl<'a> VariableValidator<'a> {
    pub fn new(variables: &'a VariableSet) -> Self {
        Self { variables }
    }

    /// Report the first (by name) placeholder of a table or security document with no variable
    pub fn validate_model_placeholders(
        &self,
        placeholders: &BTreeSet<String>,
    ) -> Result<(), ReferenceError> {
        match self.first_undefined(placeholders) {
            Some(name) => Err(ReferenceError::UndefinedVariable { name }),
            None => Ok(()),
        }
    }

    /// Same check for DB connection documents against the DB variables
    pub fn validate_db_placeholders(
        &self,
        placeholders: &BTreeSet<String>,
    ) -> Result<(), ReferenceError> {
        match self.first_undefined(placeholders) {
            Some(name) => Err(ReferenceError::UndefinedDbVariable { name }),
            None => Ok(()),
        }
    }

    fn first_undefined(&self, placeholders: &BTreeSet<String>) -> Option<String> {
        placeholders
            .iter()
            .find(|name| !self.variables.contains(name))
            .cloned()
    }
}
