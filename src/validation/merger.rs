use tracing::debug;

use crate::models::{Dimension, Join, Measure, Table};

/// Applies single-level `extend` inheritance between two flat table records
pub struct TableMerger;

impl TableMerger {
    pub fn new() -> Self {
        Self
    }

    /// Merge a resolved parent into its child.
    ///
    /// Inherited fields keep the parent's definition with `override = false`.
    /// A child field with the same name as a parent field replaces it in
    /// place and gets `override = true`; fields only the child declares are
    /// appended with `override = false`.
    pub fn merge(&self, parent: &Table, child: &Table) -> Table {
        debug!("  Merging {} into {}...", parent.name, child.name);

        Table {
            name: child.name.clone(),
            extend: child.extend.clone(),
            schema: child.schema.clone().or_else(|| parent.schema.clone()),
            table: child.table.clone().or_else(|| parent.table.clone()),
            sql: child.sql.clone().or_else(|| parent.sql.clone()),
            db_connection_name: child
                .db_connection_name
                .clone()
                .or_else(|| parent.db_connection_name.clone()),
            is_fact: child.is_fact.or(parent.is_fact),
            hidden: child.hidden,
            description: child.description.clone(),
            category: child.category.clone().or_else(|| parent.category.clone()),
            cardinality: child.cardinality.or(parent.cardinality),
            read_access: child
                .read_access
                .clone()
                .or_else(|| parent.read_access.clone()),
            filter_template: child
                .filter_template
                .clone()
                .or_else(|| parent.filter_template.clone()),
            tags: if child.tags.is_empty() {
                parent.tags.clone()
            } else {
                child.tags.clone()
            },
            dimensions: merge_fields(&parent.dimensions, &child.dimensions),
            measures: merge_fields(&parent.measures, &child.measures),
            joins: merge_joins(&parent.joins, &child.joins),
        }
    }
}

impl Default for TableMerger {
    fn default() -> Self {
        Self::new()
    }
}

/// A dimension or measure that can be overridden by name
trait InheritedField: Clone {
    fn name(&self) -> &str;
    fn set_override(&mut self, is_override: bool);
}

impl InheritedField for Dimension {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_override(&mut self, is_override: bool) {
        self.is_override = is_override;
    }
}

impl InheritedField for Measure {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_override(&mut self, is_override: bool) {
        self.is_override = is_override;
    }
}

fn merge_fields<F: InheritedField>(parent: &[F], child: &[F]) -> Vec<F> {
    let mut merged: Vec<F> = parent
        .iter()
        .cloned()
        .map(|mut field| {
            field.set_override(false);
            field
        })
        .collect();

    for field in child {
        let mut field = field.clone();
        match merged.iter().position(|f| f.name() == field.name()) {
            Some(idx) => {
                field.set_override(true);
                merged[idx] = field;
            }
            None => {
                field.set_override(false);
                merged.push(field);
            }
        }
    }

    merged
}

fn merge_joins(parent: &[Join], child: &[Join]) -> Vec<Join> {
    let mut merged = parent.to_vec();
    for join in child {
        match merged.iter().position(|j| j.name == join.name) {
            Some(idx) => merged[idx] = join.clone(),
            None => merged.push(join.clone()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;
    use crate::validation::references::test_support::{dimension, join, measure, table};

    #[test]
    fn test_override_flags() {
        let mut parent = table("PlayerStats", Some("db1"));
        parent.sql = Some("SELECT * FROM stats".to_string());
        parent.measures = vec![
            measure("highScore", "MAX(score)"),
            measure("lowScore", "MIN(score)"),
        ];
        parent.dimensions = vec![dimension("createdOn", FieldType::Time), dimension("country", FieldType::Text)];

        let mut child = table("PlayerStatsChild", None);
        child.extend = Some("PlayerStats".to_string());
        child.measures = vec![
            measure("highScore", "MAX(high_score)"),
            measure("AvgScore", "AVG(score)"),
        ];
        child.dimensions = vec![dimension("createdOn", FieldType::Time), dimension("updatedMonth", FieldType::Time)];

        let merged = TableMerger::new().merge(&parent, &child);

        assert_eq!(merged.name, "PlayerStatsChild");
        assert_eq!(merged.db_connection_name.as_deref(), Some("db1"));
        assert_eq!(merged.sql.as_deref(), Some("SELECT * FROM stats"));

        let high = merged.measure("highScore").unwrap();
        assert!(high.is_override);
        assert_eq!(high.definition, "MAX(high_score)");
        assert!(!merged.measure("lowScore").unwrap().is_override);
        assert!(!merged.measure("AvgScore").unwrap().is_override);

        assert!(merged.dimension("createdOn").unwrap().is_override);
        assert!(!merged.dimension("updatedMonth").unwrap().is_override);
        assert!(!merged.dimension("country").unwrap().is_override);

        // Parent order is kept, new child fields are appended
        let names: Vec<&str> = merged.measures.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["highScore", "lowScore", "AvgScore"]);
    }

    #[test]
    fn test_joins_merge_by_name() {
        let mut parent = table("Base", None);
        parent.joins = vec![
            join("country", "Country", "country.id = country_id"),
            join("team", "Team", "team.id = team_id"),
        ];
        let mut child = table("Child", None);
        child.joins = vec![join("team", "Team", "team.id = new_team_id")];

        let merged = TableMerger::new().merge(&parent, &child);
        assert_eq!(merged.joins.len(), 2);
        assert_eq!(merged.join("team").unwrap().definition, "team.id = new_team_id");
    }
}
