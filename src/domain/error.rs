use thiserror::Error;

/// Errors produced by hash comparers and the `Password` adapters.
///
/// `Mismatch` is the expected outcome of a failed login attempt; every
/// other variant signals a configuration fault or corrupt stored data.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hash generation failed: {0}")]
    HashGeneration(String),

    #[error("Password does not match the stored hash")]
    Mismatch,

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Unsupported cost factor {cost} (supported range {min}..={max})")]
    UnsupportedCost { cost: u32, min: u32, max: u32 },

    #[error("Unsupported source type: {0}")]
    UnsupportedSourceType(&'static str),
}
