use serde::{Deserialize, Serialize};

/// A table configuration document: `{ tables: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDocument {
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A logical table exposed by the data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub name: String,

    /// Name of the table whose fields this table inherits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Physical table backing this model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Subquery backing this model, used instead of `table`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_connection_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fact: Option<bool>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_access: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_template: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub dimensions: Vec<Dimension>,

    #[serde(default)]
    pub measures: Vec<Measure>,

    #[serde(default)]
    pub joins: Vec<Join>,
}

impl Table {
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn measure(&self, name: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.name == name)
    }

    pub fn join(&self, name: &str) -> Option<&Join> {
        self.joins.iter().find(|j| j.name == name)
    }

    /// Every free-form SQL fragment carried by this table, labelled by where it came from
    pub fn sql_fragments(&self) -> Vec<(String, &str)> {
        let mut fragments = Vec::new();

        if let Some(sql) = &self.sql {
            fragments.push(("sql".to_string(), sql.as_str()));
        }
        for dim in &self.dimensions {
            if let Some(definition) = &dim.definition {
                fragments.push((format!("dimensions.{}", dim.name), definition.as_str()));
            }
        }
        for measure in &self.measures {
            fragments.push((
                format!("measures.{}", measure.name),
                measure.definition.as_str(),
            ));
        }
        for join in &self.joins {
            fragments.push((format!("joins.{}", join.name), join.definition.as_str()));
        }

        fragments
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

/// Column types accepted for dimensions and measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Integer,
    Decimal,
    Money,
    Boolean,
    Coordinate,
    Time,
    EnumOrdinal,
    EnumText,
}

/// A descriptive (groupable) field of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// `Table.field` lookup that provides the allowed values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_access: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    /// Set when this field replaces a field inherited through `extend`
    #[serde(rename = "override", default)]
    pub is_override: bool,
}

/// An aggregable field of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub definition: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_plan_resolver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_access: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(rename = "override", default)]
    pub is_override: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    Left,
    Inner,
    Full,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JoinKind {
    ToOne,
    ToMany,
}

/// A relationship from one table to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    /// Alias under which the target table is addressed in `definition`
    pub name: String,

    pub to: String,

    #[serde(rename = "type")]
    pub join_type: JoinType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<JoinKind>,

    /// e.g. `playerCountry.id = country_id`
    pub definition: String,
}

impl Join {
    /// The alias token that precedes the first `.` in the definition
    pub fn definition_alias(&self) -> &str {
        let Some((head, _)) = self.definition.split_once('.') else {
            return "";
        };
        let head = head.trim_end();
        let start = head
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(head.len());
        &head[start..]
    }
}
