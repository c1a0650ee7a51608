//! Test database fixtures

use super::constants::*;
use anyhow::Result;
use course_catalog_server::course_store::{validate_draft, CourseDraft, CourseStore};
use course_catalog_server::SqliteCourseStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary db directory holding a `courses.db` with the seeded courses.
///
/// The courses are written straight to the store, so they never show up
/// in the event log of a server started on top of this database.
pub fn create_test_db_with_courses() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("courses.db");
    let store = SqliteCourseStore::new(&db_path)?;

    let drafts = [
        CourseDraft::new(
            SEEDED_COURSE_1_TITLE,
            Some(SEEDED_COURSE_1_CATEGORY),
            SEEDED_COURSE_1_HOURS,
        ),
        CourseDraft::new(SEEDED_COURSE_2_TITLE, None, SEEDED_COURSE_2_HOURS),
        CourseDraft::new(
            SEEDED_COURSE_3_TITLE,
            Some(SEEDED_COURSE_3_CATEGORY),
            SEEDED_COURSE_3_HOURS,
        ),
    ];
    for draft in drafts {
        store.insert_course(&validate_draft(draft)?)?;
    }

    Ok((dir, db_path))
}
