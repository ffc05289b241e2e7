//! Error types shared between the API and its clients

use thiserror::Error;

/// Authentication error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Authorization header not provided")]
    MissingToken,

    #[error("Invalid authorization format")]
    MalformedHeader,
}
