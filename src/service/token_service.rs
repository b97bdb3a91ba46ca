use crate::config::parameter;
use crate::error::token_error::TokenError;
use base64::Engine;
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Claims of an access token: the user id and the time box, nothing else.
/// Role and activity are re-read from the store on every protected request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    access_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: String, access_ttl: Duration) -> Self {
        Self { secret, access_ttl }
    }

    pub fn from_env() -> Result<Self, TokenError> {
        let secret = parameter::get_optional("JWT_ACCESS_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(TokenError::SecretNotConfigured)?;
        let ttl_minutes = parameter::get_i64("JWT_ACCESS_TTL_MINUTES");
        Ok(Self::new(secret, Duration::minutes(ttl_minutes)))
    }

    /// Sign a short-lived access token for `user_id`.
    pub fn issue_access(&self, user_id: i64) -> Result<String, TokenError> {
        let now = chrono::Utc::now();
        let exp = now
            .checked_add_signed(self.access_ttl)
            .ok_or_else(|| {
                TokenError::TokenCreationError("token expiry calculation overflow".to_string())
            })?
            .timestamp();

        let claims = AccessClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| TokenError::TokenCreationError(e.to_string()))
    }

    /// Verify signature and expiry. All failure modes collapse into
    /// `InvalidOrExpired` at the middleware boundary.
    pub fn decode_access(&self, token: &str) -> jsonwebtoken::errors::Result<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
    }

    /// 64 cryptographically random bytes, base64url-encoded. Opaque: carries
    /// no user binding until the ledger persists its digest.
    pub fn generate_refresh_token(&self) -> String {
        let mut bytes = [0u8; 64];
        OsRng.fill_bytes(&mut bytes);
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }

    /// One-way digest used as the ledger's lookup key; the raw value is
    /// never retrievable from storage.
    pub fn hash_refresh_token(&self, token: &str) -> String {
        Sha256::digest(token.as_bytes())
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}
