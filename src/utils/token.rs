use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and checks the HS256 bearer tokens the API runs on. Tokens are
/// self-contained; nothing is stored server-side, so there is no revocation
/// short of rotating the secret (which kills every outstanding token).
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, default_ttl_minutes: i64) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0; // expiry is exact, no grace window

        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl: Duration::minutes(default_ttl_minutes),
        }
    }

    /// Sign a token for `subject`, expiring after `ttl` (configured default
    /// when `None`).
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, AppError> {
        let expiry = Utc::now() + ttl.unwrap_or(self.default_ttl);
        let claims = Claims {
            sub: subject.to_string(),
            exp: expiry.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token encoding failed: {e}")))
    }

    /// Check signature and expiry, returning the subject embedded at issuance.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_returns_subject() {
        let tokens = TokenService::new("test_secret", 60);
        let token = tokens.issue("a@x.com", None).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "a@x.com");
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new("test_secret", 60);
        let token = tokens
            .issue("a@x.com", Some(Duration::seconds(-30)))
            .unwrap();
        assert!(matches!(
            tokens.verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let issuer = TokenService::new("secret_one", 60);
        let verifier = TokenService::new("secret_two", 60);
        let token = issuer.issue("a@x.com", None).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        let tokens = TokenService::new("test_secret", 60);
        assert!(matches!(
            tokens.verify("definitely.not.a-jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}
