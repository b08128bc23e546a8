//! Password value object - domain layer password handling.
//!
//! Encapsulates Argon2id hashing and verification behind a value object so
//! plaintext never travels further than this module.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
///
/// Hashes are PHC strings: the algorithm, its parameters, and the per-call
/// random salt are embedded in the string, so nothing is stored separately.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns `BadRequest` if the password is empty or too short, and
    /// `Internal` if the hashing operation itself fails.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::bad_request("password must not be empty"));
        }
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from storage).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A structurally malformed stored hash counts as a failed verification,
    /// not a fault; it is logged and the caller sees `false`. The comparison
    /// itself is the argon2 crate's constant-time verifier.
    pub fn verify(&self, plain_text: &str) -> bool {
        let parsed = match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is malformed");
                return false;
            }
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    /// Hash a password using Argon2id with a fresh random salt.
    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn verify_from_stored_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn same_password_different_salts() {
        let plain = "SamePassword123";
        let first = Password::new(plain).unwrap();
        let second = Password::new(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(plain));
        assert!(second.verify(plain));
    }

    #[test]
    fn empty_password_rejected() {
        let result = Password::new("");
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn short_password_rejected() {
        let result = Password::new("short");
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn minimum_length_accepted() {
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("anything"));
    }
}
