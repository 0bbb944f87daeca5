/**
 * Session Management and JWT Tokens
 *
 * This module handles session token generation and validation. Tokens are
 * HMAC-signed JWTs carrying the account ID and email; they are not stored
 * anywhere, and expiry is the only invalidation mechanism.
 *
 * The signing secret comes from configuration at startup. `SessionKeys`
 * precomputes the encoding and decoding keys once and is cloned into the
 * application state; nothing reads the environment at call time.
 */

use axum::http::HeaderMap;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Token lifetime: 24 hours from issuance
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Account email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject claim back into an account ID
    ///
    /// A correctly signed token whose subject is not a UUID did not come
    /// from this server's issue path, so it is rejected as invalid.
    pub fn account_id(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(&self.sub).map_err(|_| {
            tracing::warn!("token subject is not a valid account id");
            ApiError::TokenInvalid
        })
    }
}

/// Signing and verification keys for session tokens
///
/// Built once from the configured secret; both keys are derived from the
/// same HMAC secret (HS256).
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    /// Create keys from the signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for an account
    ///
    /// # Arguments
    /// * `account_id` - Account ID (becomes the `sub` claim)
    /// * `email` - Account email
    ///
    /// # Returns
    /// Signed JWT string, expiring `TOKEN_TTL_SECONDS` from now
    pub fn issue(&self, account_id: Uuid, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("failed to sign session token: {}", e)))
    }

    /// Verify and decode a token
    ///
    /// The signature is checked before the expiry, so a tampered token is
    /// always `TokenInvalid` even if its payload claims to be expired.
    /// Expiry is checked with zero leeway.
    ///
    /// # Errors
    /// * `ApiError::TokenExpired` - correctly signed but past its `exp`
    /// * `ApiError::TokenInvalid` - bad signature or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(ApiError::TokenExpired),
                _ => {
                    tracing::warn!("token rejected: {:?}", err.kind());
                    Err(ApiError::TokenInvalid)
                }
            },
        }
    }
}

/// Extract the bearer token from the Authorization header
///
/// Expects `Authorization: Bearer <token>`. A missing header or a
/// different scheme both mean no bearer token was presented.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::TokenMissing)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::TokenMissing)
}
