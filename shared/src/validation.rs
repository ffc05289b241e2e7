//! Input validation functions
//!
//! Presence checks produce the exact messages clients see in the
//! `{"error": ...}` body, so callers must run them in field order.
//! Length bounds go through the `validator` crate.

use validator::ValidateLength;

/// Usernames are stored in a `VARCHAR(255)` column
pub const MAX_USERNAME_LENGTH: u64 = 255;

/// Upper bound for plaintext passwords accepted for hashing
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Upper bound for diary entry content, in characters
pub const MAX_CONTENT_LENGTH: u64 = 65_536;

/// Require a username, treating absent, empty, and whitespace-only as missing
pub fn require_username(username: Option<String>) -> Result<String, String> {
    let username = match username {
        Some(u) if !u.trim().is_empty() => u,
        _ => return Err("Username not provided".to_string()),
    };
    if !username.validate_length(None, Some(MAX_USERNAME_LENGTH), None) {
        return Err("Username too long".to_string());
    }
    Ok(username)
}

/// Require a password. Whitespace is significant, only the empty string
/// counts as missing.
pub fn require_password(password: Option<String>) -> Result<String, String> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err("Password not provided".to_string()),
    };
    if !password.validate_length(None, Some(MAX_PASSWORD_LENGTH), None) {
        return Err("Password too long".to_string());
    }
    Ok(password)
}

/// Require diary entry content
pub fn require_content(content: Option<String>) -> Result<String, String> {
    let content = match content {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err("Content not provided".to_string()),
    };
    if !content.validate_length(None, Some(MAX_CONTENT_LENGTH), None) {
        return Err("Content too long".to_string());
    }
    Ok(content)
}
