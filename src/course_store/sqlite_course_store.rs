use super::models::{Course, NewCourse};
use super::schema::COURSE_VERSIONED_SCHEMAS;
use super::CourseStore;
use crate::sqlite_persistence::initialize_schema;
use anyhow::{anyhow, Context, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Name of the SQL function used for case-insensitive substring matching.
///
/// SQLite's own `LIKE` and `lower()` only fold ASCII, and `LIKE` treats `%`
/// and `_` as wildcards, so search goes through this Unicode-aware function.
const CONTAINS_CI_FN: &str = "contains_ci";

const COURSE_COLUMNS: &str = "id, title, category, duration_hours";

pub struct SqliteCourseStore {
    conn: Arc<Mutex<Connection>>,
    db_path: PathBuf,
}

impl SqliteCourseStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let mut conn = Connection::open(path)
            .with_context(|| format!("Failed to open course database at {:?}", path))?;

        if is_new_db {
            info!("Creating new course database at {:?}", path);
        }
        initialize_schema(&mut conn, is_new_db, COURSE_VERSIONED_SCHEMAS)
            .with_context(|| format!("Failed to initialize course database at {:?}", path))?;
        Self::register_functions(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn register_functions(conn: &Connection) -> Result<()> {
        conn.create_scalar_function(
            CONTAINS_CI_FN,
            2,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let haystack: String = ctx.get(0)?;
                let needle: String = ctx.get(1)?;
                Ok(contains_case_insensitive(&haystack, &needle))
            },
        )
        .context("Failed to register search function")?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Course database connection lock is poisoned"))
    }

    fn row_to_course(row: &rusqlite::Row) -> rusqlite::Result<Course> {
        Ok(Course {
            id: row.get("id")?,
            title: row.get("title")?,
            category: row.get("category")?,
            duration_hours: row.get("duration_hours")?,
        })
    }
}

pub(crate) fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl CourseStore for SqliteCourseStore {
    fn insert_course(&self, course: &NewCourse) -> Result<Course> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO courses (title, category, duration_hours) VALUES (?1, ?2, ?3)",
            params![course.title(), course.category(), course.duration_hours()],
        )
        .context("Failed to insert course")?;
        let id = conn.last_insert_rowid();
        debug!("Inserted course {} with id {}", course.title(), id);

        Ok(Course {
            id,
            title: course.title().to_string(),
            category: course.category().map(str::to_string),
            duration_hours: course.duration_hours(),
        })
    }

    fn get_course(&self, id: i64) -> Result<Option<Course>> {
        let conn = self.lock()?;
        let course = conn
            .query_row(
                &format!("SELECT {} FROM courses WHERE id = ?1", COURSE_COLUMNS),
                params![id],
                Self::row_to_course,
            )
            .optional()
            .with_context(|| format!("Failed to fetch course {}", id))?;
        Ok(course)
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM courses ORDER BY id",
            COURSE_COLUMNS
        ))?;
        let courses = stmt
            .query_map([], Self::row_to_course)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list courses")?;
        Ok(courses)
    }

    fn search_courses_by_title(&self, term: &str) -> Result<Vec<Course>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM courses WHERE {}(title, ?1) ORDER BY id",
            COURSE_COLUMNS, CONTAINS_CI_FN
        ))?;
        let courses = stmt
            .query_map(params![term], Self::row_to_course)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to search courses for '{}'", term))?;
        Ok(courses)
    }

    fn count_courses(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM courses", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}
