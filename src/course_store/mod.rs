mod models;
mod schema;
mod sqlite_course_store;
mod validation;

pub use models::{Course, CourseDraft, NewCourse};
pub use schema::COURSE_VERSIONED_SCHEMAS;
pub use sqlite_course_store::SqliteCourseStore;
pub use validation::{validate_draft, ValidationError, ValidationResult};

use anyhow::Result;

/// Durable storage for courses.
///
/// Implementations assign identifiers on insert and never store a course
/// that did not go through [`validate_draft`].
pub trait CourseStore: Send + Sync {
    /// Persists a course and returns it with its assigned identifier.
    fn insert_course(&self, course: &NewCourse) -> Result<Course>;

    fn get_course(&self, id: i64) -> Result<Option<Course>>;

    /// All courses, in insertion order.
    fn list_courses(&self) -> Result<Vec<Course>>;

    /// Courses whose title contains `term`, ignoring case.
    fn search_courses_by_title(&self, term: &str) -> Result<Vec<Course>>;

    fn count_courses(&self) -> Result<usize>;
}
