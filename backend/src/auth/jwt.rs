//! JWT token issuance and verification
//!
//! Tokens are HS256-signed and carry the username as the subject.
//! Keys are derived once and shared, so the service is cheap to clone.

use anyhow::Result;
use chrono::{Duration, Utc};
use diary_shared::AuthError;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
    token_ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, token_ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second it reaches `exp`
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation,
            token_ttl_secs,
        }
    }

    /// Issue a token for a username
    pub fn issue(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_ttl_secs);

        let claims = Claims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Configured token lifetime in seconds
    #[inline]
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();

        let token = service.issue("yemiwebby").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "yemiwebby");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        let result = service.verify("invalid.token.here");

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::new("some-other-secret", 3600);
        let token = issuer.issue("yemiwebby").unwrap();

        let result = create_test_service().verify(&token);
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = create_test_service();
        let token = service.issue("yemiwebby").unwrap();

        let other = service.issue("someone-else").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let forged = parts.join(".");

        assert_eq!(service.verify(&forged).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new("test-secret", -120);
        let token = service.issue("yemiwebby").unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_token_expires_at_exact_ttl() {
        // exp == iat, so the token is already at its expiry instant
        let service = JwtService::new("test-secret", 0);
        let token = service.issue("yemiwebby").unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();

        let token = service.issue("yemiwebby").unwrap();
        assert_eq!(cloned.verify(&token).unwrap().sub, "yemiwebby");
        assert_eq!(cloned.token_ttl_secs(), 3600);
    }
}
