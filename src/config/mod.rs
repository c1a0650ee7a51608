mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be overridden by the TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            db_dir: None,
            port: server.port,
            bind_address: server.bind_address,
            logging_level: server.requests_logging_level,
            frontend_dir_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_dir: PathBuf,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified via --db-dir or in config file")
            })?;

        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let logging_level = match file.logging_level {
            Some(level) => match parse_logging_level(&level) {
                Some(level) => level,
                None => bail!("Unknown logging_level in config file: {}", level),
            },
            None => cli.logging_level.clone(),
        };

        Ok(Self {
            db_dir,
            port: file.port.unwrap_or(cli.port),
            bind_address: file
                .bind_address
                .unwrap_or_else(|| cli.bind_address.clone()),
            logging_level,
            frontend_dir_path: file
                .frontend_dir_path
                .or_else(|| cli.frontend_dir_path.clone()),
        })
    }

    pub fn courses_db_path(&self) -> PathBuf {
        self.db_dir.join("courses.db")
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
