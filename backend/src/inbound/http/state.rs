//! Shared HTTP adapter state.
//!
//! Handlers receive the domain facade via `actix_web::web::Data`, so they
//! stay free of persistence details and are testable against an in-memory
//! store.

use crate::domain::Portal;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub portal: Portal,
}

impl HttpState {
    #[must_use]
    pub fn new(portal: Portal) -> Self {
        Self { portal }
    }
}
