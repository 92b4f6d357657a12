//! Server configuration loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "data";

/// Configuration values controlling the HTTP server and its data store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct PortalSettings {
    /// Socket address the server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Directory holding the JSON collection files.
    pub data_dir: Option<PathBuf>,
}

impl PortalSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(|| {
            DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|err| panic!("invalid default bind address: {err}"))
        })
    }

    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}
