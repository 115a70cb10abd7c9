/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Each hash uses a fresh random salt
 * (bcrypt embeds it in the output), and verification compares in
 * constant time. Both operations run on the blocking worker pool so
 * request tasks are not stalled for the hash duration.
 */

use thiserror::Error;

/// Password hashing failure.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password with a fresh salt.
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_string();
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(&password, bcrypt::DEFAULT_COST)).await??;
    Ok(hash)
}

/// Verify a plaintext password against a stored hash.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash)).await??;
    Ok(valid)
}
