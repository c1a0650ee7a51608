use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::courses::make_course_routes;
use super::events::make_event_routes;
use super::{log_requests, state::*, ServerConfig};
use crate::catalog::CatalogService;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub courses: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Response {
    let courses = match state.catalog.count() {
        Ok(count) => count,
        Err(err) => {
            error!("Failed to count courses: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        courses,
    };
    Json(stats).into_response()
}

pub fn make_app(config: ServerConfig, catalog: GuardedCatalogService) -> Result<Router> {
    let state = ServerState::new(config.clone(), catalog);

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/courses", make_course_routes(state.clone()))
        .nest("/events", make_event_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, catalog: CatalogService) -> Result<()> {
    let address = config.listen_address();
    let app = make_app(config, Arc::new(catalog))?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;
    Ok(())
}
