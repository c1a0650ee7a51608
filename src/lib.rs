//! Course Catalog Server Library
//!
//! This library exposes the internal modules for the binaries and the
//! end-to-end tests.

pub mod catalog;
pub mod config;
pub mod course_store;
pub mod events;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, CatalogService};
pub use course_store::{Course, CourseDraft, CourseStore, SqliteCourseStore};
pub use events::{CreationEvent, EventSink, InMemoryEventSink};
pub use server::{run_server, RequestsLoggingLevel};
