use argon2::{
    Argon2, PasswordHash as Argon2Hash,
    password_hash::{
        Error as HashError, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use tracing::debug;

use crate::domain::{error::PasswordError, services::hash_comparer::HashComparer};

/// Argon2id-backed [`HashComparer`] at the argon2 library's default
/// parameters. Parameters travel inside the PHC string, so hashes
/// produced with other argon2 settings still verify. Bcrypt hashes are
/// reported as malformed.
#[derive(Debug, Clone)]
pub struct Argon2HashComparer;

impl Argon2HashComparer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2HashComparer {
    fn default() -> Self {
        Self::new()
    }
}

impl HashComparer for Argon2HashComparer {
    fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        debug!("generating argon2 hash");
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| PasswordError::HashGeneration(err.to_string()))?
            .to_string();

        Ok(hash)
    }

    fn compare(&self, hash: &str, plain: &str) -> Result<(), PasswordError> {
        let parsed_hash =
            Argon2Hash::new(hash).map_err(|err| PasswordError::MalformedHash(err.to_string()))?;

        match Argon2::default().verify_password(plain.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(HashError::Password) => Err(PasswordError::Mismatch),
            Err(err) => Err(PasswordError::MalformedHash(err.to_string())),
        }
    }
}
