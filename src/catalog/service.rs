use crate::course_store::{validate_draft, Course, CourseDraft, CourseStore, ValidationError};
use crate::events::{CreationEvent, EventSink};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Source marker attached to events recorded by [`CatalogService`].
pub const CATALOG_SERVICE_SOURCE: &str = "catalog_service";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid course: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ties the course store and the event log together.
///
/// A course is recorded in the event log only after the store has assigned
/// it an identifier, and exactly once per successful creation.
pub struct CatalogService {
    store: Arc<dyn CourseStore>,
    events: Arc<dyn EventSink>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CourseStore>, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    pub fn create(&self, draft: CourseDraft) -> CatalogResult<Course> {
        let new_course = validate_draft(draft)?;
        let course = self.store.insert_course(&new_course)?;
        self.events.record(course.clone(), CATALOG_SERVICE_SOURCE);
        Ok(course)
    }

    pub fn list(&self) -> CatalogResult<Vec<Course>> {
        Ok(self.store.list_courses()?)
    }

    /// A missing or empty term lists everything.
    pub fn search(&self, term: Option<&str>) -> CatalogResult<Vec<Course>> {
        match term {
            None | Some("") => self.list(),
            Some(term) => {
                debug!("Searching courses for '{}'", term);
                Ok(self.store.search_courses_by_title(term)?)
            }
        }
    }

    pub fn get(&self, id: i64) -> CatalogResult<Option<Course>> {
        Ok(self.store.get_course(id)?)
    }

    pub fn count(&self) -> CatalogResult<usize> {
        Ok(self.store.count_courses()?)
    }

    pub fn events(&self) -> Vec<CreationEvent> {
        self.events.list_all()
    }
}
