//! [`Sealer`]: the public entry point, with blocking and async variants.

use common::{DecryptFailure, EncryptError};
use tracing::warn;
use zeroize::Zeroizing;

use crate::crypto::{self, KdfParams, Token};

/// Seals and opens tokens under a fixed set of [`KdfParams`].
///
/// Holds no key material and no mutable state; copies are free and calls on
/// the same value may run concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sealer {
    params: KdfParams,
}

impl Sealer {
    pub fn new(params: KdfParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> KdfParams {
        self.params
    }

    /// Seal `plaintext` under `password` on the current thread.
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<Token, EncryptError> {
        crypto::encrypt(plaintext, password, self.params)
    }

    /// Open `token` with `password` on the current thread.
    pub fn decrypt(&self, token: &str, password: &str) -> Result<String, DecryptFailure> {
        crypto::decrypt(token, password, self.params)
    }

    /// Seal on Tokio's blocking pool so key derivation does not stall the
    /// async workers.
    ///
    /// # Errors
    ///
    /// As [`Sealer::encrypt`], plus [`EncryptError::TaskFailed`] if the
    /// blocking task panics.
    pub async fn encrypt_async(
        &self,
        plaintext: String,
        password: Zeroizing<String>,
    ) -> Result<Token, EncryptError> {
        let params = self.params;
        tokio::task::spawn_blocking(move || crypto::encrypt(&plaintext, &password, params))
            .await
            .map_err(|e| {
                warn!(error = %e, "encryption task failed");
                EncryptError::TaskFailed
            })?
    }

    /// Open on Tokio's blocking pool. A failed task is reported as the usual
    /// [`DecryptFailure`].
    pub async fn decrypt_async(
        &self,
        token: String,
        password: Zeroizing<String>,
    ) -> Result<String, DecryptFailure> {
        let params = self.params;
        tokio::task::spawn_blocking(move || crypto::decrypt(&token, &password, params))
            .await
            .map_err(|e| {
                warn!(error = %e, "decryption task failed");
                DecryptFailure
            })?
    }
}
