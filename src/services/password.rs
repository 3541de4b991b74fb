//! Password hashing — salted bcrypt with a fixed work factor.

use bcrypt::BcryptError;

/// bcrypt cost parameter (2^10 rounds).
const HASH_COST: u32 = 10;

/// Hash a plaintext password. A fresh salt is generated per call and
/// embedded in the encoded output, so two hashes of the same input differ.
///
/// # Errors
///
/// Returns an error if the hashing backend fails.
pub fn hash(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// Verify a plaintext password against a stored hash. Returns `false` on
/// mismatch; errors only on a malformed hash input.
///
/// # Errors
///
/// Returns an error if `hashed` is not a valid bcrypt encoding.
pub fn verify(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hashed)
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
