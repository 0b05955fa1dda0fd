use sqlx::PgPool;

use crate::services::PropertyService;

/// Shared handler state. The store handle is injected here rather than
/// reached through module-level globals, so every handler gets its
/// dependencies from the router.
#[derive(Clone)]
pub struct AppState {
    pub properties: PropertyService,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            properties: PropertyService::new(pool.clone()),
            pool,
        }
    }
}
