//! Utility functions for identifier generation and URL validation.
//!
//! - [`code_generator`] - Short identifier generation
//! - [`url_validator`] - Validation of submitted URLs

pub mod code_generator;
pub mod url_validator;
