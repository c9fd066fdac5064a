use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A DB connection document: `{ dbconfigs: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfigDocument {
    #[serde(default)]
    pub dbconfigs: Vec<DbConnection>,
}

/// A named JDBC-style database connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbConnection {
    pub name: String,

    /// `jdbc:<driver>:...`
    pub url: String,

    pub driver: String,

    pub user: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,

    /// Driver specific properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub property_map: BTreeMap<String, serde_json::Value>,
}

impl DbConnection {
    /// The driver segment of the URL (`h2` for `jdbc:h2:mem:db`)
    pub fn url_driver(&self) -> Option<&str> {
        let mut parts = self.url.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("jdbc"), Some(driver), Some(_)) if !driver.is_empty() => Some(driver),
            _ => None,
        }
    }
}
