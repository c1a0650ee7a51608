//! In-process log of course creation events.
//!
//! The log lives only in memory: it grows without bound for the lifetime of
//! the process and starts empty on every restart.

use crate::course_store::Course;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Immutable record of a successful course creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationEvent {
    /// 1-based position of this event in the log.
    pub sequence: u64,
    pub course: Course,
    /// Component that created the course (e.g. "catalog_service").
    pub source: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

pub trait EventSink: Send + Sync {
    /// Appends an event for `course` and returns a copy of it.
    fn record(&self, course: Course, source: &str) -> CreationEvent;

    /// Snapshot of the whole log, oldest first.
    ///
    /// Later appends never show up in a snapshot that was already returned.
    fn list_all(&self) -> Vec<CreationEvent>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<CreationEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&self, course: Course, source: &str) -> CreationEvent {
        info!("Course created: {}", course.title);

        // Entries are only ever pushed whole, so a poisoned lock still guards a consistent log.
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        let event = CreationEvent {
            sequence: events.len() as u64 + 1,
            course,
            source: source.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        events.push(event.clone());
        event
    }

    fn list_all(&self) -> Vec<CreationEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
