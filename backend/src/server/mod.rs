//! Server construction and wiring.

mod config;

pub use config::PortalSettings;

use std::io;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::{Portal, RecordStore};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::configure_api;
use backend::outbound::persistence::JsonFileStore;

/// Open the data store, wire the portal, and start the HTTP server.
pub fn run(settings: &PortalSettings) -> io::Result<(Server, web::Data<HealthState>)> {
    let store = JsonFileStore::open(&settings.data_dir())?;
    let portal = Portal::new(RecordStore::new(Arc::new(store)), Arc::new(DefaultClock));
    let state = web::Data::new(HttpState::new(portal));
    let health_state = web::Data::new(HealthState::new());
    let bind_addr = settings.bind_addr();

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .configure(configure_api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, data_dir = %settings.data_dir().display(), "portal backend listening");
    Ok((server, health_state))
}
