use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::store::{ListingStore, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Seeker identity and profile lookups. Default: `PgStore`.
    pub profiles: Arc<dyn ProfileStore>,
    /// Active listing source. Default: `PgStore`.
    pub listings: Arc<dyn ListingStore>,
}
