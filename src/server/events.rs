use axum::{extract::State, routing::get, Json, Router};

use crate::events::CreationEvent;

use super::state::{GuardedCatalogService, ServerState};

async fn list_events(State(catalog): State<GuardedCatalogService>) -> Json<Vec<CreationEvent>> {
    Json(catalog.events())
}

pub fn make_event_routes(state: ServerState) -> Router {
    Router::new().route("/", get(list_events)).with_state(state)
}
