//! Backend entry-point: loads configuration, wires the portal, and serves
//! the REST API.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use server::PortalSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PortalSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let (http_server, health_state) = server::run(&settings)?;
    health_state.mark_ready();
    let result = http_server.await;
    health_state.mark_unhealthy();
    result
}
