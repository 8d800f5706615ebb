//! Common test utilities and fixtures for integration tests.
//!
//! Tests run against an in-memory catalog, so no data files are needed.

pub mod fixtures;

use std::path::Path;

use axum::Router;
use axum_test::TestServer;

use gloss_practice_backend::config::Config;
use gloss_practice_backend::services::catalog::Catalog;
use gloss_practice_backend::{build_router, AppState};

/// Test context holding the router built from a fixture catalog.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context backed by the standard fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog(fixtures::sample_catalog())
    }

    /// Context backed by a catalog with no videos or questions.
    pub fn empty() -> Self {
        Self::with_catalog(Catalog::default())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let config = Config::default();
        let state = AppState::new(catalog, &config);
        Self {
            app: build_router(state, None),
        }
    }

    /// Context that also serves front-end assets from `dir`.
    pub fn with_static_dir(dir: &Path) -> Self {
        let config = Config::default();
        let state = AppState::new(fixtures::sample_catalog(), &config);
        Self {
            app: build_router(state, Some(dir)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
