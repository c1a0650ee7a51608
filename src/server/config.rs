use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    /// When set, static files from this directory are served for any path
    /// that is not an API route.
    pub frontend_dir_path: Option<String>,
}

impl ServerConfig {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            frontend_dir_path: None,
        }
    }
}
