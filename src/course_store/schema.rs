//! SQLite schema definitions for the course database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

// =============================================================================
// Version 1 - Courses
// =============================================================================

const COURSES_TABLE_V1: Table = Table {
    name: "courses",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true), // rowid alias
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("category", &SqlType::Text),
        sqlite_column!("duration_hours", &SqlType::Integer, non_null = true),
    ],
};

pub const COURSE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[COURSES_TABLE_V1],
    migration: None,
}];

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_v1_schema_creates_successfully() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = &COURSE_VERSIONED_SCHEMAS[0];
        schema.create(&conn).unwrap();
        schema.validate(&conn).unwrap();
    }

    #[test]
    fn test_courses_id_is_assigned_on_insert() {
        let conn = Connection::open_in_memory().unwrap();
        COURSE_VERSIONED_SCHEMAS[0].create(&conn).unwrap();

        conn.execute(
            "INSERT INTO courses (title, category, duration_hours) VALUES ('A', NULL, 1)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO courses (title, category, duration_hours) VALUES ('B', 'x', 2)",
            [],
        )
        .unwrap();

        let ids: Vec<i64> = conn
            .prepare("SELECT id FROM courses ORDER BY id")
            .unwrap()
            .query_map([], |r| r.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_courses_title_is_required() {
        let conn = Connection::open_in_memory().unwrap();
        COURSE_VERSIONED_SCHEMAS[0].create(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO courses (title, duration_hours) VALUES (NULL, 1)",
            [],
        );
        assert!(result.is_err());
    }
}
