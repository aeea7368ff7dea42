use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_stack::{Result, ResultExt};
use once_cell::sync::Lazy;
use thiserror::Error;

static CONTEXT: Lazy<Argon2<'static>> = Lazy::new(|| {
    Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::DEFAULT,
    )
});

#[derive(Debug, Error)]
#[error("Failed to generate password hash")]
pub struct HashPasswordError;

/// Hashes the password with a random salt into a PHC string.
pub fn hash(password: impl AsRef<[u8]>) -> Result<String, HashPasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = CONTEXT
        .hash_password(password.as_ref(), &salt)
        .change_context(HashPasswordError)?;

    Ok(password_hash.to_string())
}

#[derive(Debug, Error)]
#[error("Failed to verify password")]
pub struct VerifyPasswordError;

pub fn verify(password: &[u8], hash: &str) -> Result<bool, VerifyPasswordError> {
    let hash = PasswordHash::new(hash)
        .change_context(VerifyPasswordError)
        .attach_printable("could not parse password hash")?;

    match CONTEXT.verify_password(password, &hash) {
        Ok(..) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(error) => Err(error).change_context(VerifyPasswordError),
    }
}

/// Runs [`hash`] on the blocking thread pool.
pub async fn hash_blocking(password: String) -> Result<String, HashPasswordError> {
    tokio::task::spawn_blocking(move || hash(password))
        .await
        .change_context(HashPasswordError)
        .attach_printable("password hashing task panicked")?
}

/// Runs [`verify`] on the blocking thread pool.
pub async fn verify_blocking(password: String, hash: String) -> Result<bool, VerifyPasswordError> {
    tokio::task::spawn_blocking(move || verify(password.as_bytes(), &hash))
        .await
        .change_context(VerifyPasswordError)
        .attach_printable("password verification task panicked")?
}
