use serde::{Deserialize, Serialize};

/// Characters that indicate a list was flattened into a single role string
pub const ROLE_FORBIDDEN_CHARS: [char; 3] = ['[', ']', ','];

/// Roles and row-level filter rules for the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub rules: Vec<SecurityRule>,
}

impl SecurityConfig {
    /// Roles that contain list punctuation
    pub fn malformed_roles(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .map(String::as_str)
            .filter(|role| role.contains(ROLE_FORBIDDEN_CHARS))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    pub filter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Filter,
}
