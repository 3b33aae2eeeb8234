//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation and alias validation
//! - [`url_validator`] - Target URL validation and UTM tagging
//! - [`client_info`] - Client IP / User-Agent extraction

pub mod client_info;
pub mod code_generator;
pub mod url_validator;
