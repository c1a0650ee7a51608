use axum::extract::FromRef;

use crate::catalog::CatalogService;
use std::sync::Arc;
use std::time::Instant;

use super::{RequestsLoggingLevel, ServerConfig};

pub type GuardedCatalogService = Arc<CatalogService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedCatalogService,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: GuardedCatalogService) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogService {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for RequestsLoggingLevel {
    fn from_ref(input: &ServerState) -> Self {
        input.config.requests_logging_level.clone()
    }
}
