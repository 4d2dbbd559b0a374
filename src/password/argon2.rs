use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier as Argon2PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::PasswordVerifier;

/// Argon2id password comparator, the default implementation of the
/// [`PasswordVerifier`] capability.
///
/// Also provides hashing so hosts can produce the stored hashes this crate
/// verifies during registration and password-reset flows.
pub struct Argon2Verifier;

impl Argon2Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

impl PasswordVerifier for Argon2Verifier {
    fn matches(&self, plaintext: &str, hash: &str) -> bool {
        // An uninterpretable stored hash is a non-match, not an error.
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}
