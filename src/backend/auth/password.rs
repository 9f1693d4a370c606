/**
 * Password Hashing
 *
 * Salted one-way hashing of user passwords with bcrypt. The salt is random
 * per call and embedded in the output, so hashing the same password twice
 * yields two different strings that both verify.
 */

use crate::backend::error::HashingError;

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password
    ///
    /// Any password is accepted; bcrypt only considers the first 72 bytes.
    ///
    /// # Errors
    ///
    /// `HashingError` if bcrypt itself fails (e.g. no entropy source).
    pub fn hash(&self, password: &str) -> Result<String, HashingError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a password against a stored hash
    ///
    /// Returns `false` for a wrong password and for a malformed `hashed` value.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        match bcrypt::verify(password, hashed) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
