#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PLAYER_STATS: &str = r#"{
  tables: [
    {
      name: 'PlayerStats',
      schema: '{{schema}}',
      table: 'player_stats',
      dbConnectionName: 'OracleConnection',
      measures: [
        { name: 'highScore', type: 'INTEGER', definition: 'MAX(score)' },
        { name: 'lowScore', type: 'INTEGER', definition: 'MIN(score)' },
      ],
      dimensions: [
        { name: 'createdOn', type: 'TIME', definition: 'created_on' },
      ],
      joins: [
        { name: 'playerCountry', to: 'Country', type: 'left', definition: 'playerCountry.id = country_id' },
      ],
    },
    {
      name: 'PlayerStatsChild',
      extend: 'PlayerStats',
      measures: [
        { name: 'highScore', type: 'INTEGER', definition: 'MAX(high_score)' },
        { name: 'AvgScore', type: 'DECIMAL', definition: 'AVG(score)' },
      ],
      dimensions: [
        { name: 'createdOn', type: 'TIME', definition: 'created_on_utc' },
        { name: 'updatedMonth', type: 'TIME', definition: 'updated_on' },
      ],
    },
  ],
}
"#;

pub const COUNTRY: &str = r#"{
  tables: [
    {
      name: 'Country',
      schema: '{{schema}}',
      table: 'country',
      dbConnectionName: 'OracleConnection',
      dimensions: [{ name: 'isoCode', type: 'TEXT', definition: 'iso_code' }],
    },
  ],
}
"#;

pub const DB_CONFIGS: &str = r#"{
  dbconfigs: [
    {
      name: 'OracleConnection',
      url: 'jdbc:oracle:thin:@localhost:1521:XE',
      driver: 'oracle.jdbc.OracleDriver',
      user: 'scott',
    },
    {
      name: 'MySQLConnection',
      url: 'jdbc:mysql://localhost/db',
      driver: 'com.mysql.jdbc.Driver',
      user: 'guest',
    },
  ],
}
"#;

pub const VARIABLES: &str = "{\n  schema: gamedb\n}\n";

pub const SECURITY: &str = "{\n  roles: [\n    admin\n    guest\n  ]\n}\n";

/// A config directory on disk, removed when dropped
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn valid() -> Self {
        Self::empty()
            .with("models/tables/player_stats.json5", PLAYER_STATS)
            .with("models/tables/country.json5", COUNTRY)
            .with("models/variables.hjson", VARIABLES)
            .with("models/security.hjson", SECURITY)
            .with("db/sql/db.json5", DB_CONFIGS)
    }

    pub fn with(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
