//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short URL mapping with its click counter
//! - [`NewUrlRecord`] - Input for creating a mapping
//! - [`UrlStats`] - Aggregate counters over all mappings

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord, UrlStats};
