//! Course API routes

use crate::catalog::CatalogError;
use crate::course_store::CourseDraft;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, error};

use super::state::{GuardedCatalogService, ServerState};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::Validation(_) => {
                debug!("Rejected course: {}", self);
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            CatalogError::Storage(_) => {
                error!("{}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
    }
}

/// First `q` of the query string. Repeated keys are allowed.
fn search_term(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
}

async fn create_course(
    State(catalog): State<GuardedCatalogService>,
    body: Result<Json<CourseDraft>, JsonRejection>,
) -> Response {
    let draft = match body {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            debug!("Rejected course body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match catalog.create(draft) {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn list_courses(
    State(catalog): State<GuardedCatalogService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match catalog.search(search_term(&params)) {
        Ok(courses) => Json(courses).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Ids that are not integers cannot name a course, so they are answered
/// the same way as unknown ones.
async fn get_course(State(catalog): State<GuardedCatalogService>, Path(id): Path<String>) -> Response {
    let id = match id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    match catalog.get(id) {
        Ok(Some(course)) => Json(course).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn make_course_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{id}", get(get_course))
        .with_state(state)
}
