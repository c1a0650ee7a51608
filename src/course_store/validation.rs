//! Validation for incoming courses.
//!
//! Every course goes through [`validate_draft`] before it reaches the store,
//! so nothing invalid is ever persisted.

use super::models::{CourseDraft, NewCourse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required but was empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' is required but was missing")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be positive, got {value}")]
    NonPositiveValue { field: &'static str, value: i64 },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks a draft and turns it into an insertable course.
///
/// The title is kept exactly as sent; it is only trimmed to decide whether it is blank.
pub fn validate_draft(draft: CourseDraft) -> ValidationResult<NewCourse> {
    let title = match draft.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(ValidationError::EmptyField { field: "title" }),
    };

    let duration_hours = match draft.duration_hours {
        Some(hours) if hours >= 1 => hours,
        Some(hours) => {
            return Err(ValidationError::NonPositiveValue {
                field: "durationHours",
                value: hours,
            })
        }
        None => {
            return Err(ValidationError::MissingField {
                field: "durationHours",
            })
        }
    };

    Ok(NewCourse {
        title,
        category: draft.category,
        duration_hours,
    })
}
