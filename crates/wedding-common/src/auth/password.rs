//! Argon2id hashing for the shared dashboard password

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash the dashboard password into a PHC string
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| argon_failure("hashing the dashboard password", e))
}

/// Check a login attempt against the configured hash
///
/// A wrong password is `Ok(false)`; only a corrupt hash is an error.
pub fn verify_password(attempt: &str, phc: &str) -> Result<bool, AppError> {
    let expected = PasswordHash::new(phc).map_err(|e| argon_failure("parsing the dashboard hash", e))?;

    Ok(Argon2::default()
        .verify_password(attempt.as_bytes(), &expected)
        .is_ok())
}

fn argon_failure(action: &str, err: argon2::password_hash::Error) -> AppError {
    AppError::internal(anyhow::anyhow!("{action} failed: {err}"))
}
