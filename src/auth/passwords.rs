/**
 * Password Hashing
 *
 * This module wraps bcrypt hashing and verification so the cost factor
 * lives in exactly one place. Passwords are hashed before storage and
 * verified against the stored hash; the plaintext is never persisted or
 * compared directly.
 */

use bcrypt::BcryptError;

/// bcrypt cost factor
///
/// Each increment doubles the hashing work. 10 keeps login latency in the
/// tens of milliseconds while staying expensive for offline brute force.
pub const HASH_COST: u32 = 10;

/// Hash a password with bcrypt
///
/// bcrypt generates a fresh salt per call, so hashing the same password
/// twice yields different strings.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a password against a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch; `Err` only if the stored hash is not
/// a valid bcrypt string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}
