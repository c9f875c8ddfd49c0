//! JWT issuing and validation
//!
//! HS256 access and refresh tokens. Keys are derived once from the secret
//! and shared behind `Arc`s.

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use fitkro_shared::AuthTokens;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Which of the two token kinds a JWT is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub token_type: TokenKind,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow!("Invalid user ID in token"))
    }
}

/// JWT service for token operations
#[derive(Clone)]
pub struct JwtService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    access_token_expiry_secs: i64,
    refresh_token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }

    /// Issue a fresh access + refresh pair
    pub fn issue_tokens(&self, user_id: Uuid) -> Result<AuthTokens> {
        Ok(AuthTokens {
            access_token: self.generate_access_token(user_id)?,
            refresh_token: self.generate_refresh_token(user_id)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry_secs,
        })
    }

    #[inline]
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, TokenKind::Access, self.access_token_expiry_secs)
    }

    #[inline]
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, TokenKind::Refresh, self.refresh_token_expiry_secs)
    }

    fn generate_token(&self, user_id: Uuid, kind: TokenKind, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(expiry_secs)).timestamp(),
            iat: now.timestamp(),
            token_type: kind,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow!("Failed to generate {:?} token: {}", kind, e))
    }

    /// Validate signature and expiry, then require the given kind
    pub fn validate(&self, token: &str, kind: TokenKind) -> Result<Claims> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| anyhow!("Invalid token: {}", e))?
            .claims;

        if claims.token_type != kind {
            return Err(anyhow!("Expected a {:?} token", kind));
        }
        Ok(claims)
    }

    #[inline]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        self.validate(token, TokenKind::Access)
    }

    #[inline]
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims> {
        self.validate(token, TokenKind::Refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret", 3600, 604800)
    }

    #[test]
    fn test_issued_pair_validates_by_kind() {
        let service = service();
        let user_id = Uuid::new_v4();

        let tokens = service.issue_tokens(user_id).unwrap();
        assert_eq!(tokens.token_type, "Bearer");
        assert_eq!(tokens.expires_in, 3600);

        let access = service.validate_access_token(&tokens.access_token).unwrap();
        assert_eq!(access.user_id().unwrap(), user_id);

        let refresh = service.validate_refresh_token(&tokens.refresh_token).unwrap();
        assert_eq!(refresh.token_type, TokenKind::Refresh);
    }

    #[test]
    fn test_kinds_are_not_interchangeable() {
        let service = service();
        let tokens = service.issue_tokens(Uuid::new_v4()).unwrap();

        assert!(service.validate_refresh_token(&tokens.access_token).is_err());
        assert!(service.validate_access_token(&tokens.refresh_token).is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let token = JwtService::new("other-secret", 3600, 3600)
            .generate_access_token(Uuid::new_v4())
            .unwrap();
        assert!(service().validate_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Past the default 60s leeway
        let service = JwtService::new("test-secret", -120, -120);
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(service().validate_access_token("invalid.token.here").is_err());
    }
}
