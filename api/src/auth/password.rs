//! # Password hashing and verification — Argon2id
//!
//! - [`hash_password`] — generates a random salt via [`OsRng`], hashes the plaintext
//!   with the default Argon2id parameters, and returns a PHC-format string
//!   (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`) for the `password_hash` column.
//!
//! - [`verify_password`] — parses a PHC-format hash and checks the plaintext against
//!   it. Returns `Ok(true)` on a match, `Ok(false)` on a mismatch, `Err` if the
//!   stored hash is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("rockhound42").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("rockhound42", &hash).unwrap());
        assert!(!verify_password("rockhound43", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("whatever", "not-a-phc-string").is_err());
    }
}
