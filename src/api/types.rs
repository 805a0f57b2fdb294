//! Shared state for the API and HTML routers.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::api::error::ApiError;

/// Shared context for all routes: the record store connection, opened
/// once at startup and handed to the serving context explicitly. The
/// store executes synchronously and serially; the mutex makes that
/// discipline hold across concurrent handlers.
#[derive(Clone)]
pub struct ApiContext {
    conn: Arc<Mutex<Connection>>,
}

impl ApiContext {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Borrow the store for the duration of one operation.
    pub fn store(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn
            .lock()
            .map_err(|_| ApiError::Internal("store lock poisoned".into()))
    }
}
