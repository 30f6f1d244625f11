use crate::config::Config;
use crate::db::DbPool;
use std::sync::Arc;

/// Application context containing shared dependencies
///
/// Created once at startup and handed to the router as state; handlers share
/// it read-only.
#[derive(Clone)]
pub struct AppContext {
    pub db_pool: Arc<DbPool>,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Creates a new application context
    pub fn new(db_pool: Arc<DbPool>, config: Arc<Config>) -> Self {
        Self { db_pool, config }
    }
}
