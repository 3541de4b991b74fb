//! Session token service — signed, self-contained, stateless credentials.
//!
//! ARCHITECTURE
//! ============
//! Tokens are HS256 JWTs carrying an identity snapshot taken at login.
//! There is no session table; verification is signature plus expiry, so a
//! token stays valid until it expires even if the stored user changes.
//!
//! TRADE-OFFS
//! ==========
//! Stateless verification keeps the per-request auth check to one HMAC;
//! the cost is that revocation before expiry requires rotating the signing
//! secret. The 1-hour TTL bounds that window.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::user::{ApprovalStatus, UserRecord};

/// Token lifetime in seconds. The session cookie max-age must stay in
/// lockstep with this value so the cookie and token expire together.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed payload, or expired token — collapsed to
    /// one variant so no verification detail reaches the client.
    #[error("invalid token")]
    Invalid,
}

/// Identity snapshot embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier.
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    /// Approval status at issuance time.
    pub status: ApprovalStatus,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
}

/// HS256 key pair derived from the server secret. Built once at startup
/// and carried in `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for the given user, expiring `TOKEN_TTL_SECS` from now.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, user: &UserRecord) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            status: user.status,
            exp: jsonwebtoken::get_current_timestamp() + TOKEN_TTL_SECS.unsigned_abs(),
        };
        self.encode(&claims)
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Check signature and expiry. Every failure maps to `TokenError::Invalid`.
    ///
    /// # Errors
    ///
    /// `Invalid` for any token that does not verify.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
