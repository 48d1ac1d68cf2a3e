//! Common error types shared across crates.
//!
//! Decryption deliberately has a single error value. Whether a token was
//! malformed, forged, or opened with the wrong password is never visible
//! to the caller.

use thiserror::Error;

/// Errors produced while sealing plaintext into a token.
///
/// With the fixed key, salt and nonce sizes none of these are reachable from
/// valid input; they indicate a broken environment.
#[derive(Debug, Error)]
pub enum EncryptError {
    /// The OS CSPRNG could not supply salt or nonce bytes.
    #[error("OS random generator unavailable")]
    Randomness,

    /// The AES-256-GCM primitive rejected its parameters.
    #[error("aead operation failed")]
    AeadFailure,

    /// The blocking worker running the operation panicked or was cancelled.
    #[error("encryption task did not complete")]
    TaskFailed,
}

/// The one and only decryption error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("decryption failed")]
pub struct DecryptFailure;

/// Top-level error type for the command-line front end.
///
/// Variants map to process exit codes:
/// - [`SealError::Decrypt`] → 1
/// - [`SealError::Encrypt`] → 2
/// - [`SealError::Usage`] → 64
#[derive(Debug, Error)]
pub enum SealError {
    /// Sealing failed inside the cryptographic primitive.
    #[error(transparent)]
    Encrypt(#[from] EncryptError),

    /// The token could not be opened.
    #[error(transparent)]
    Decrypt(#[from] DecryptFailure),

    /// Input or configuration was unusable before any cryptography ran.
    #[error("usage error: {0}")]
    Usage(String),
}

impl SealError {
    /// Returns the process exit code that should be reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SealError::Decrypt(_) => 1,
            SealError::Encrypt(_) => 2,
            SealError::Usage(_) => 64,
        }
    }
}
