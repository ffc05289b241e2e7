//! API request and response types

use crate::validation;
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Envelope used for entry payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Registration and login request body
///
/// Both fields are optional on the wire so that a missing field produces
/// a field-specific validation message instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthenticationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Validated credentials
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl AuthenticationInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Validate presence and bounds, username first
    pub fn into_credentials(self) -> Result<Credentials, String> {
        let username = validation::require_username(self.username)?;
        let password = validation::require_password(self.password)?;
        Ok(Credentials {
            username,
            password: SecretString::new(password),
        })
    }
}

/// Login response carrying the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}

/// Public view of a registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

// ============================================================================
// Diary Entry Types
// ============================================================================

/// New entry request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl EntryInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn into_content(self) -> Result<String, String> {
        validation::require_content(self.content)
    }
}

/// Diary entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryResponse {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_password_reported() {
        let input: AuthenticationInput =
            serde_json::from_str(r#"{"username": "yemiwebby"}"#).unwrap();
        assert_eq!(input.into_credentials().unwrap_err(), "Password not provided");
    }

    #[test]
    fn test_username_checked_before_password() {
        let input: AuthenticationInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.into_credentials().unwrap_err(), "Username not provided");
    }

    #[test]
    fn test_null_fields_treated_as_missing() {
        let input: AuthenticationInput =
            serde_json::from_str(r#"{"username": "a", "password": null}"#).unwrap();
        assert_eq!(input.into_credentials().unwrap_err(), "Password not provided");
    }

    #[test]
    fn test_valid_credentials() {
        let credentials = AuthenticationInput::new("yemiwebby", "test")
            .into_credentials()
            .unwrap();
        assert_eq!(credentials.username, "yemiwebby");
        assert_eq!(credentials.password.expose_secret(), "test");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = AuthenticationInput::new("yemiwebby", "hunter2")
            .into_credentials()
            .unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_login_response_uses_jwt_key() {
        let body = serde_json::to_value(LoginResponse {
            jwt: "token".to_string(),
        })
        .unwrap();
        assert_eq!(body["jwt"], "token");
    }

    #[test]
    fn test_entry_input_validation() {
        assert_eq!(
            EntryInput::default().into_content().unwrap_err(),
            "Content not provided"
        );
        assert_eq!(
            EntryInput::new("This is a test entry :)").into_content().unwrap(),
            "This is a test entry :)"
        );
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "Password not provided".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"Password not provided"}"#);
    }
}
