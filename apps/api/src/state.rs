use crate::config::Config;

/// Shared application state injected into route handlers and middleware
/// via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
