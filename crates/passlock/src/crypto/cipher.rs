//! AES-256-GCM sealing and opening of text under a password.
//!
//! **Never reuse a nonce under the same key.** Each [`encrypt`] call draws a
//! fresh salt and nonce from the OS CSPRNG, so every call also derives a
//! fresh key.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes256Gcm, Key, Nonce,
};
use common::{DecryptFailure, EncryptError};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

use super::kdf::{derive_key, DerivedKey, KdfParams};
use super::token::{Token, TokenError};
use super::{NONCE_LEN, SALT_LEN};

/// Tracing target for rejected tokens. Only this channel records why.
pub const AUDIT_TARGET: &str = "passlock::audit";

/// Why a token was rejected. Logged, never returned.
#[derive(Debug, Error)]
pub(crate) enum FailureKind {
    #[error("malformed token: {0}")]
    MalformedToken(#[from] TokenError),

    #[error("authentication failed")]
    AuthenticationFailure,

    #[error("plaintext is not valid UTF-8")]
    EncodingFailure,
}

/// Seal `plaintext` under `password`.
///
/// # Errors
///
/// Returns [`EncryptError::Randomness`] if the OS CSPRNG fails and
/// [`EncryptError::AeadFailure`] if the cipher rejects its input. Neither is
/// expected for any plaintext.
pub fn encrypt(plaintext: &str, password: &str, params: KdfParams) -> Result<Token, EncryptError> {
    let salt: [u8; SALT_LEN] = random_bytes()?;
    let nonce: [u8; NONCE_LEN] = random_bytes()?;

    let key = derive_key(password.as_bytes(), &salt, params);
    let ciphertext = build_cipher(&key)
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| EncryptError::AeadFailure)?;

    debug!(plaintext_len = plaintext.len(), "sealed token");
    Ok(Token::new(ciphertext, salt, nonce))
}

/// Open a token string with `password`.
///
/// # Errors
///
/// Returns [`DecryptFailure`] for a malformed token, a wrong password, a
/// tampered ciphertext, or non-UTF-8 plaintext, without saying which. The
/// reason is logged at `debug` on [`AUDIT_TARGET`].
pub fn decrypt(token: &str, password: &str, params: KdfParams) -> Result<String, DecryptFailure> {
    open(token, password, params).map_err(|kind| {
        debug!(target: AUDIT_TARGET, reason = %kind, "token rejected");
        DecryptFailure
    })
}

pub(crate) fn open(token: &str, password: &str, params: KdfParams) -> Result<String, FailureKind> {
    let token: Token = token.parse()?;

    let key = derive_key(password.as_bytes(), token.salt(), params);
    let plaintext = build_cipher(&key)
        .decrypt(Nonce::from_slice(token.nonce()), token.ciphertext())
        .map_err(|_| FailureKind::AuthenticationFailure)?;

    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        FailureKind::EncodingFailure
    })
}

fn random_bytes<const N: usize>() -> Result<[u8; N], EncryptError> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|_| EncryptError::Randomness)?;
    Ok(buf)
}

fn build_cipher(key: &DerivedKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}
