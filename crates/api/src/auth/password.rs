//! Password storage for `users.pwd`.
//!
//! Stored values are Argon2id PHC strings, so salt and cost parameters travel
//! with each hash and can change without a migration.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// `Ok(false)` on a mismatch; `Err` only when `stored` is not a PHC string.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Rules for a password being set for `user_id`: at least
/// [`MIN_PASSWORD_LENGTH`] characters and not the login name itself.
pub fn validate_new_password(password: &str, user_id: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if password.eq_ignore_ascii_case(user_id) {
        return Err("Password must not match the user id".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_is_argon2id_and_verifies() {
        let stored = hash_password("kafka-admin-pw").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(verify_password("kafka-admin-pw", &stored).unwrap());
        assert!(!verify_password("kafka-admin-PW", &stored).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        assert_ne!(hash_password("twice-hashed").unwrap(), hash_password("twice-hashed").unwrap());
    }

    #[test]
    fn plaintext_column_value_is_an_error() {
        assert!(verify_password("anything", "legacy-plaintext").is_err());
    }

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("short", "dev1").is_err());
        assert!(validate_new_password("Superuser1", "superuser1").is_err());
        assert!(validate_new_password("8chars!!", "dev1").is_ok());
    }
}
