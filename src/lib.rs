//! Password values that hash on their way to storage and never render
//! their content.
//!
//! A [`Password`] carries either a freshly supplied plaintext or the
//! encoded hash read back from a database column. Encoding runs through a
//! process-wide [`HashComparer`], bcrypt by default, swappable at runtime
//! with [`set_hash_comparer`]. `Display`, `Debug` and `Serialize` all emit
//! the [`REDACTED`] sentinel, so a password cannot leak through logs or
//! API responses by accident.
//!
//! ```
//! use passwd::{Password, PasswordError};
//!
//! let password = Password::new("pass1234");
//!
//! // hash for persistence, then read the stored column back
//! let column = password.value()?;
//! let mut stored = Password::default();
//! stored.scan(column)?;
//!
//! assert!(stored.compare("pass1234").is_ok());
//! assert!(stored.compare("pass12345").is_err());
//! assert_eq!(stored.to_string(), "FILTERED");
//! # Ok::<(), PasswordError>(())
//! ```

pub mod domain;
pub mod infrastructure;

use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

pub use domain::error::PasswordError;
pub use domain::models::password::{Password, REDACTED};
pub use domain::services::hash_comparer::HashComparer;
pub use infrastructure::argon2_hash_comparer::Argon2HashComparer;
pub use infrastructure::bcrypt_hash_comparer::{
    BcryptHashComparer, DEFAULT_COST, MAX_COST, MAX_PLAINTEXT_LEN, MIN_COST,
};

static ACTIVE_COMPARER: OnceLock<RwLock<Arc<dyn HashComparer>>> = OnceLock::new();

fn comparer_slot() -> &'static RwLock<Arc<dyn HashComparer>> {
    ACTIVE_COMPARER.get_or_init(|| RwLock::new(Arc::new(BcryptHashComparer::default())))
}

/// Replace the process-wide comparer used by every [`Password`] from this
/// point on. Calls already in flight finish with the comparer they started
/// with. Hashes encoded before the swap stay verifiable only if the new
/// comparer understands their format.
pub fn set_hash_comparer(comparer: impl HashComparer + 'static) {
    let mut slot = match comparer_slot().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *slot = Arc::new(comparer);
    debug!("process-wide hash comparer replaced");
}

/// Snapshot the comparer at call time. The read lock is released before
/// any hashing starts, so slow comparers never block a swap.
pub(crate) fn active_comparer() -> Arc<dyn HashComparer> {
    let slot = match comparer_slot().read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    Arc::clone(&slot)
}
