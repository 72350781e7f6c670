use crate::db::Database;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// `Arc` lets every handler share the one persistence client; the client
/// itself serialises writes to the backing file.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}
