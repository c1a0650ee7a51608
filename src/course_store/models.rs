use serde::{Deserialize, Serialize};

/// A course as persisted in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub duration_hours: i64,
}

/// Unvalidated course payload, as received from clients.
///
/// The Portuguese field names used by the first version of the API are still
/// accepted on input. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(alias = "titulo")]
    pub title: Option<String>,
    #[serde(alias = "categoria")]
    pub category: Option<String>,
    #[serde(alias = "cargaHoraria")]
    pub duration_hours: Option<i64>,
}

impl CourseDraft {
    pub fn new(title: &str, category: Option<&str>, duration_hours: i64) -> Self {
        Self {
            title: Some(title.to_string()),
            category: category.map(str::to_string),
            duration_hours: Some(duration_hours),
        }
    }
}

/// A course that passed validation and is ready to be inserted.
///
/// Only [`super::validate_draft`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub(super) title: String,
    pub(super) category: Option<String>,
    pub(super) duration_hours: i64,
}

impl NewCourse {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn duration_hours(&self) -> i64 {
        self.duration_hours
    }
}
