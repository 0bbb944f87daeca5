/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers, shared across register, login, and verify.
 *
 * Request fields are `Option<String>` so a missing field deserializes
 * instead of failing in the framework; the handlers turn absent or blank
 * values into a 400 validation error with a field-specific message.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::accounts::Account;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub name: Option<String>,
    /// Email address (the unique identity)
    pub email: Option<String>,
    /// Password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: Option<String>,
    /// Password (verified against the stored hash)
    pub password: Option<String>,
}

/// Login response
///
/// Contains the session token and the account it belongs to.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// JWT session token (24-hour expiration)
    pub token: String,
    /// Account information (without credential material)
    pub account: AccountResponse,
}

/// Account response (without credential material)
///
/// The only account representation that ever leaves the server. Does not
/// include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountResponse {
    /// Account ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            created_at: account.created_at,
        }
    }
}
