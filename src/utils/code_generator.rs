//! Short code generation and validation utilities.
//!
//! Generated codes and custom aliases share one format: 3-20 characters from
//! `[A-Za-z0-9_-]`.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// The 64 symbols codes are drawn from.
pub const ALPHABET: &[u8; 64] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Length used by the first generation of links.
pub const LEGACY_CODE_LENGTH: usize = 4;

pub const MAX_CODE_LENGTH: usize = 20;

/// Route segments that a short code would shadow.
const RESERVED_CODES: &[&str] = &["api", "health"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,20}$").unwrap());

/// Generates a random short code of `length` characters.
///
/// Every character is drawn independently and uniformly from [`ALPHABET`].
/// There is no uniqueness guarantee: callers check the store. Not suitable for
/// secrets.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` would shadow a fixed route (case-insensitive).
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// Returns true if `code` has the short code format.
pub fn is_valid_code_format(code: &str) -> bool {
    ALIAS_REGEX.is_match(code)
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if !is_valid_code_format(alias) {
        return Err(AppError::invalid_alias_format(alias));
    }

    if is_reserved_code(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            serde_json::json!({ "alias": alias }),
        ));
    }

    Ok(())
}
