use super::error::ReferenceError;
use crate::models::SecurityConfig;

pub struct RoleValidator;

impl RoleValidator {
    pub fn new() -> Self {
        Self
    }

    /// Reject roles carrying list punctuation (a list flattened into one string)
    pub fn validate_roles(&self, security: &SecurityConfig) -> Result<(), ReferenceError> {
        match security.malformed_roles().next() {
            Some(role) => Err(ReferenceError::InvalidRole {
                role: role.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for RoleValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_role_list() {
        let security = SecurityConfig {
            roles: vec!["admin".to_string(), "[guest, member]".to_string()],
            rules: vec![],
        };
        let err = RoleValidator::new().validate_roles(&security).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ROLE provided in security config contain one of these words: [,]"
        );
    }

    #[test]
    fn test_plain_roles_pass() {
        let security = SecurityConfig {
            roles: vec!["admin".to_string(), "guest user".to_string()],
            rules: vec![],
        };
        assert!(RoleValidator::new().validate_roles(&security).is_ok());
    }
}
