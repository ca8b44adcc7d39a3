//! In-memory session storage using moka
//!
//! Holds in-progress wizards between requests for the length of a browser
//! session. Entries expire on TTL or idle time and are never persisted.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::wizard::{BookingFlow, PartnerApplicationFlow, Wizard, WizardFlow};

/// Shared handle to one wizard session
pub type SharedWizard<F> = Arc<Mutex<Wizard<F>>>;

/// Wizard sessions for one flow (session id -> wizard)
#[derive(Clone)]
pub struct SessionStore<F: WizardFlow> {
    sessions: Cache<Uuid, SharedWizard<F>>,
}

impl<F: WizardFlow> SessionStore<F> {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(config.max_capacity)
                .time_to_live(Duration::from_secs(config.ttl_secs))
                .time_to_idle(Duration::from_secs(config.idle_secs))
                .build(),
        }
    }

    /// Open a fresh wizard and return its session id.
    pub async fn start(&self) -> (Uuid, SharedWizard<F>) {
        let id = Uuid::new_v4();
        let wizard = Arc::new(Mutex::new(Wizard::new()));
        self.sessions.insert(id, wizard.clone()).await;
        (id, wizard)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedWizard<F>> {
        self.sessions.get(id).await
    }

    pub async fn remove(&self, id: &Uuid) {
        self.sessions.invalidate(id).await;
    }

    /// Approximate number of live sessions
    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}

/// Application cache holding wizard sessions
#[derive(Clone)]
pub struct AppCache {
    pub bookings: SessionStore<BookingFlow>,
    pub partner_applications: SessionStore<PartnerApplicationFlow>,
}

impl AppCache {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            bookings: SessionStore::new(config),
            partner_applications: SessionStore::new(config),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            booking_sessions: self.bookings.session_count(),
            partner_application_sessions: self.partner_applications.session_count(),
        }
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub booking_sessions: u64,
    pub partner_application_sessions: u64,
}
