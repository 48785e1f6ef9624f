//! services/web/src/web/state.rs
//!
//! Defines the application's shared state and the per-request session handle.

use crate::config::Config;
use crate::error::WebError;
use crate::web::views::Views;
use fitflix_core::{seed, Catalog, City, PortResult, SessionContext, SessionStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<dyn SessionStore>,
    pub views: Arc<Views>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the shipped catalog and the page templates to a session store.
    pub fn new(config: Arc<Config>, sessions: Arc<dyn SessionStore>) -> Result<Self, WebError> {
        Ok(Self {
            catalog: Arc::new(seed::catalog()?),
            sessions,
            views: Arc::new(Views::new()?),
            config,
        })
    }
}

//=========================================================================================
// SessionHandle (Specific to One Request)
//=========================================================================================

/// The visitor's session for the duration of one request. The session
/// middleware inserts it into the request extensions and, once the handler
/// has produced its response, writes the context back only if a city was
/// selected during the request.
#[derive(Clone)]
pub struct SessionHandle {
    pub token: Uuid,
    /// Path of the page being served; the navbar city switcher returns here.
    pub path: String,
    context: Arc<Mutex<SessionContext>>,
    modified: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn new(token: Uuid, path: impl Into<String>, context: SessionContext) -> Self {
        Self {
            token,
            path: path.into(),
            context: Arc::new(Mutex::new(context)),
            modified: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn current_city(&self, catalog: &Catalog) -> City {
        self.context.lock().await.get_current_city(catalog)
    }

    pub async fn select_city(&self, catalog: &Catalog, city_id: &str) -> PortResult<City> {
        let city = self.context.lock().await.set_current_city(catalog, city_id)?;
        self.modified.store(true, Ordering::Release);
        Ok(city)
    }

    /// Whether a selection changed the context during this request.
    pub fn is_modified(&self) -> bool {
        self.modified.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> SessionContext {
        self.context.lock().await.clone()
    }
}
