use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::repositories::UserRepository;

/// Shared application state handed to every handler.
///
/// The repository is held behind the trait so the binary can wire Postgres
/// while tests substitute an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub config: Arc<AppConfig>,
}
