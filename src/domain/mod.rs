//! Domain layer containing the URL mapping entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Storage backends implement [`repositories::UrlRepository`] in
//! `crate::infrastructure::persistence`, and the services in
//! [`crate::application::services`] consume it.

pub mod entities;
pub mod repositories;
