//! Password hashing using argon2
//!
//! Argon2 is CPU-heavy, so the async entry points run it on the blocking
//! pool instead of a runtime worker.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Argon2id password hashing
pub struct PasswordService;

impl PasswordService {
    fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    fn verify(password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Hash a password in PHC string format
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))?
    }

    /// Check a password against a stored PHC hash
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = PasswordService::hash_async("secure_password_123".to_string())
            .await
            .unwrap();

        assert!(PasswordService::verify_async("secure_password_123".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = PasswordService::hash("same").unwrap();
        let b = PasswordService::hash("same").unwrap();
        assert_ne!(a, b);
        assert!(PasswordService::verify("same", &a).unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_an_error() {
        assert!(PasswordService::verify("pw", "not-a-phc-string").is_err());
    }
}
