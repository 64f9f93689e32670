//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, identifier generation and repository
//! calls, and expose a small API to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short URL creation
//! - [`services::redirect_service::RedirectService`] - Resolution and click tracking

pub mod services;
