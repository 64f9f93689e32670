//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::repositories::UrlRepository;

/// Services and store handle used by the HTTP layer.
///
/// Built once at startup from explicit configuration and cloned cheaply per
/// request.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlRepository>>,
    pub redirect_service: Arc<RedirectService<dyn UrlRepository>>,
    pub repository: Arc<dyn UrlRepository>,
}

impl AppState {
    /// Wires both services to the same repository.
    ///
    /// # Arguments
    ///
    /// - `repository` - storage backend shared by all services
    /// - `base_url` - public origin used to build short URLs
    /// - `click_retry_attempts` - retries for a failed click increment
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        base_url: impl Into<String>,
        click_retry_attempts: usize,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(repository.clone(), base_url));
        let redirect_service = Arc::new(RedirectService::new(
            repository.clone(),
            click_retry_attempts,
        ));

        Self {
            shorten_service,
            redirect_service,
            repository,
        }
    }
}
