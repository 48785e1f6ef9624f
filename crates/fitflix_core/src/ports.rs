//! crates/fitflix_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The session store is the only piece of state the site keeps between
//! requests, so it is the one boundary the core abstracts over.

use async_trait::async_trait;
use uuid::Uuid;

use crate::session::SessionContext;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Storage for per-visitor session contexts, keyed by an opaque token that the
/// transport layer hands out (a cookie, in the web service).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the context stored under `token`, or `NotFound` when the token
    /// is unknown or has expired.
    async fn load(&self, token: Uuid) -> PortResult<SessionContext>;

    /// Stores `session` under `token`, refreshing its expiry.
    async fn save(&self, token: Uuid, session: SessionContext) -> PortResult<()>;

    /// Refreshes the expiry of the session under `token` without touching its
    /// context. Returns `NotFound` when the token is unknown or has expired.
    async fn touch(&self, token: Uuid) -> PortResult<()>;

    /// Drops every expired entry and returns how many were removed.
    async fn purge_expired(&self) -> PortResult<usize>;
}
