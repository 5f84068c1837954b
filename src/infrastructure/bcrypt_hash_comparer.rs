use tracing::debug;

use crate::domain::{error::PasswordError, services::hash_comparer::HashComparer};

/// Lowest cost factor accepted by the bcrypt algorithm.
pub const MIN_COST: u32 = 4;
/// Highest cost factor accepted by the bcrypt algorithm.
pub const MAX_COST: u32 = 31;
/// Cost factor recommended by the bcrypt library, used by `Default`.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;
/// Longest plaintext the bcrypt algorithm digests, in bytes.
pub const MAX_PLAINTEXT_LEN: usize = 72;

/// Bcrypt-backed [`HashComparer`] with a tunable cost factor.
///
/// Verification reads the cost from the hash itself, so one instance can
/// verify output produced at any cost. The algorithm reads nothing past
/// [`MAX_PLAINTEXT_LEN`] bytes, so longer plaintext is rejected rather
/// than silently truncated. Hashes from other algorithms (e.g. argon2
/// PHC strings) are reported as malformed.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHashComparer {
    cost: u32,
}

impl BcryptHashComparer {
    /// Create a comparer hashing at `cost`, validated against
    /// [`MIN_COST`]..=[`MAX_COST`].
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::UnsupportedCost {
                cost,
                min: MIN_COST,
                max: MAX_COST,
            });
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHashComparer {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl HashComparer for BcryptHashComparer {
    fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        if plain.len() > MAX_PLAINTEXT_LEN {
            return Err(PasswordError::HashGeneration(format!(
                "plaintext longer than {MAX_PLAINTEXT_LEN} bytes"
            )));
        }
        debug!(cost = self.cost, "generating bcrypt hash");
        bcrypt::hash(plain, self.cost).map_err(|err| PasswordError::HashGeneration(err.to_string()))
    }

    fn compare(&self, hash: &str, plain: &str) -> Result<(), PasswordError> {
        match bcrypt::verify(plain, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(err) => Err(PasswordError::MalformedHash(err.to_string())),
        }
    }
}
