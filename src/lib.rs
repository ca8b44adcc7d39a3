//! Backend for the cleaning and laundry booking site.
//!
//! Serves the service catalog, live price estimates and the multi-step
//! booking and partner application forms over a JSON API. Wizard progress is
//! kept in memory only; submissions are acknowledged but never sent anywhere.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;
pub mod telemetry;
pub mod wizard;

use std::sync::Arc;

use cache::AppCache;
use config::AppConfig;

pub use routes::app;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            cache: AppCache::new(&config.sessions),
            config: Arc::new(config),
        }
    }
}
