//! Username validation for the redirect path.

use crate::error::AppError;
use serde_json::json;

/// Longest username accepted before any cache or provider call.
///
/// Generous compared to what any provider hands out; the point is rejecting
/// garbage paths before they cost a network round trip.
const MAX_USERNAME_BYTES: usize = 64;

/// Validates a username taken verbatim from the request path.
///
/// # Rules
///
/// - Non-empty after trimming
/// - At most 64 bytes
/// - No whitespace or control characters
///
/// Case-sensitivity is delegated to the upstream provider; the username is
/// used verbatim as the cache key.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::bad_request(
            "Username must not be empty",
            json!({}),
        ));
    }

    if username.len() > MAX_USERNAME_BYTES {
        return Err(AppError::bad_request(
            "Username is too long",
            json!({ "provided_length": username.len(), "max_length": MAX_USERNAME_BYTES }),
        ));
    }

    if username
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(AppError::bad_request(
            "Username must not contain whitespace or control characters",
            json!({ "username": username }),
        ));
    }

    Ok(())
}
