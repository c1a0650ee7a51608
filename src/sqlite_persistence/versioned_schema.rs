use anyhow::{bail, Context, Result};
use rusqlite::{params, types::Type, Connection};
use tracing::info;

/// Offset added to schema versions before they are written to `PRAGMA user_version`,
/// so that a database created by some other tool is never mistaken for ours.
pub const BASE_DB_VERSION: usize = 99999;

#[macro_export]
macro_rules! sqlite_column {
    ($name:expr, $sql_type:expr $(, $field:ident = $value:expr)*) => {
        {
            #[allow(unused_mut)]
            let mut column = Column {
                name: $name,
                sql_type: $sql_type,
                is_primary_key: false,
                non_null: false,
            };
            $(
                column.$field = $value;
            )*
            column
        }
    };
}

#[derive(Debug, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Integer,
}

impl SqlType {
    fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
        }
    }

    fn parse(s: &str) -> Option<&'static SqlType> {
        match s {
            "TEXT" => Some(&SqlType::Text),
            "INTEGER" => Some(&SqlType::Integer),
            _ => None,
        }
    }
}

pub struct Column<'a, S: AsRef<str>> {
    pub name: S,
    pub sql_type: &'a SqlType,
    pub is_primary_key: bool,
    pub non_null: bool,
}

pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column<'static, &'static str>],
}

impl Table {
    pub fn create(&self, conn: &Connection) -> Result<()> {
        let columns_sql = self
            .columns
            .iter()
            .map(|column| {
                let mut sql = format!("{} {}", column.name, column.sql_type.as_sql());
                if column.is_primary_key {
                    sql.push_str(" PRIMARY KEY");
                }
                if column.non_null {
                    sql.push_str(" NOT NULL");
                }
                sql
            })
            .collect::<Vec<_>>()
            .join(", ");
        conn.execute(
            &format!("CREATE TABLE {} ({});", self.name, columns_sql),
            params![],
        )?;
        Ok(())
    }

    fn validate(&self, conn: &Connection) -> Result<()> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({});", self.name))?;
        let actual_columns = stmt
            .query_map(params![], |row| {
                let type_name: String = row.get(2)?;
                let sql_type = SqlType::parse(&type_name).ok_or_else(|| {
                    rusqlite::Error::InvalidColumnType(2, type_name.clone(), Type::Text)
                })?;
                Ok(Column {
                    name: row.get::<_, String>(1)?,
                    sql_type,
                    non_null: row.get::<_, i32>(3)? == 1,
                    is_primary_key: row.get::<_, i32>(5)? == 1,
                })
            })?
            .collect::<rusqlite::Result<Vec<Column<'_, String>>>>()?;

        if actual_columns.is_empty() {
            bail!("Table {} does not exist", self.name);
        }

        if actual_columns.len() != self.columns.len() {
            bail!(
                "Table {} has {} columns, expected {}. Found column names: {}, expected: {}",
                self.name,
                actual_columns.len(),
                self.columns.len(),
                actual_columns
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                self.columns
                    .iter()
                    .map(|c| c.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        for (actual, expected) in actual_columns.iter().zip(self.columns.iter()) {
            if actual.name != expected.name {
                bail!(
                    "Table {} Column name mismatch: expected {}, got {}",
                    self.name,
                    expected.name,
                    actual.name
                );
            }
            if actual.sql_type != expected.sql_type {
                bail!(
                    "Table {} Column {} type mismatch: expected {:?}, got {:?}",
                    self.name,
                    expected.name,
                    expected.sql_type,
                    actual.sql_type
                );
            }
            if actual.non_null != expected.non_null {
                bail!(
                    "Table {} Column {} non-null mismatch: expected {}, got {}",
                    self.name,
                    expected.name,
                    expected.non_null,
                    actual.non_null
                );
            }
            if actual.is_primary_key != expected.is_primary_key {
                bail!(
                    "Table {} Column {} primary key mismatch: expected {}, got {}",
                    self.name,
                    expected.name,
                    expected.is_primary_key,
                    actual.is_primary_key
                );
            }
        }
        Ok(())
    }
}

pub struct VersionedSchema {
    pub version: usize,
    pub tables: &'static [Table],
    /// Brings a database at the previous version up to this one.
    pub migration: Option<fn(&Connection) -> Result<()>>,
}

impl VersionedSchema {
    pub fn create(&self, conn: &Connection) -> Result<()> {
        for table in self.tables {
            table.create(conn)?;
        }
        conn.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + self.version),
            [],
        )?;
        Ok(())
    }

    pub fn validate(&self, conn: &Connection) -> Result<()> {
        for table in self.tables {
            table.validate(conn)?;
        }
        Ok(())
    }
}

/// Reads the schema version stored in `PRAGMA user_version`, without the base offset.
/// Returns a negative number for databases that were never stamped by us.
pub fn read_db_version(conn: &Connection) -> Result<i64> {
    let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(raw_version - BASE_DB_VERSION as i64)
}

/// Brings `conn` to the latest schema in `schemas`.
///
/// A fresh database is created straight at the latest version. An existing one
/// is validated against the schema it claims to have, then migrated forward
/// inside a single transaction.
pub fn initialize_schema(
    conn: &mut Connection,
    is_new_db: bool,
    schemas: &[VersionedSchema],
) -> Result<()> {
    let latest = match schemas.last() {
        Some(schema) => schema,
        None => bail!("No schema versions defined"),
    };

    if is_new_db {
        info!("Creating new database at schema version {}", latest.version);
        return latest.create(conn);
    }

    let db_version = read_db_version(conn)?;
    if db_version < 1 {
        bail!("Database version {} is invalid (expected >= 1)", db_version);
    }

    let current = schemas
        .iter()
        .find(|s| s.version as i64 == db_version)
        .with_context(|| format!("Unknown database version {}", db_version))?;
    current
        .validate(conn)
        .with_context(|| format!("Schema validation failed for version {}", db_version))?;

    if current.version < latest.version {
        info!(
            "Migrating database from version {} to {}",
            current.version, latest.version
        );
        migrate(conn, current.version, schemas)?;
    }
    Ok(())
}

fn migrate(conn: &mut Connection, from_version: usize, schemas: &[VersionedSchema]) -> Result<()> {
    let tx = conn.transaction()?;
    let mut latest_from = from_version;
    for schema in schemas.iter().filter(|s| s.version > from_version) {
        info!(
            "Running migration from version {} to {}",
            latest_from, schema.version
        );
        if let Some(migration_fn) = schema.migration {
            migration_fn(&tx)
                .with_context(|| format!("Failed to run migration to version {}", schema.version))?;
        }
        latest_from = schema.version;
    }
    tx.execute(
        &format!("PRAGMA user_version = {}", BASE_DB_VERSION + latest_from),
        [],
    )?;
    tx.commit()?;
    Ok(())
}
