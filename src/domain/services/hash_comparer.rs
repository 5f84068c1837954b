use crate::domain::error::PasswordError;

/// Capability for generating and verifying password hashes.
///
/// Implementations must be stateless or hold only their own tuning
/// parameters; every call stands alone. The encoded output of `hash` is
/// self-describing (algorithm, cost, and salt are recoverable from the
/// string), so `compare` needs no configuration beyond the hash itself.
///
/// To replace the process-wide comparer use [`set_hash_comparer`].
///
/// [`set_hash_comparer`]: crate::set_hash_comparer
pub trait HashComparer: Send + Sync {
    /// Hash a plain text password into its encoded form.
    fn hash(&self, plain: &str) -> Result<String, PasswordError>;

    /// Verify a plain text password against an encoded hash.
    ///
    /// Returns `Ok(())` on a match, [`PasswordError::Mismatch`] when the
    /// plaintext is wrong, and [`PasswordError::MalformedHash`] when the
    /// encoded input cannot be parsed.
    fn compare(&self, hash: &str, plain: &str) -> Result<(), PasswordError>;
}
