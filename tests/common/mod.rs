#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use qr_shortener::domain::entities::{NewUrlRecord, UrlRecord};
use qr_shortener::domain::repositories::UrlRepository;
use qr_shortener::infrastructure::persistence::MemoryUrlRepository;
use qr_shortener::routes::app_router;
use qr_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";
pub const CLIENT_URL: &str = "https://app.example.com";

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = AppState::new(repository.clone(), BASE_URL, 2);

    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repository) = create_test_state();

    let app = app_router(state, Some(CLIENT_URL));

    (
        TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap(),
        repository,
    )
}

pub async fn create_test_url(
    repository: &MemoryUrlRepository,
    short_id: &str,
    url: &str,
) -> UrlRecord {
    repository
        .insert_if_absent(NewUrlRecord {
            original_url: url.to_string(),
            short_id: short_id.to_string(),
            short_url: format!("{BASE_URL}/api/url/{short_id}"),
        })
        .await
        .unwrap()
        .unwrap()
}

/// Extracts the short id from a short URL returned by the API.
pub fn short_id_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
