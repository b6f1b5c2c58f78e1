//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ApiServer;
use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::store::MemoryBeerStore;

use super::errors::{CliError, CliResult};

/// Start the HTTP server and block until it exits
pub fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
    }

    Logger::info("SERVER_START", &[("addr", &config.socket_addr())]);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Server(format!("runtime: {}", e)))?;

    let server = ApiServer::new(MemoryBeerStore::new());
    runtime
        .block_on(server.serve(&config))
        .map_err(|e| CliError::Server(e.to_string()))
}

/// Read and parse a JSON configuration file
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}
