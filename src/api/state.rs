use tokio_rusqlite::Connection;

use crate::core::AppConfig;

// Nothing in here is mutated after startup, the connection
// serializes access to the store on its own
pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        Self { db, config }
    }
}
