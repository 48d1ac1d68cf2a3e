//! Password-based authenticated encryption of text into portable tokens.
//!
//! ```no_run
//! let token = passlock::encrypt("hello world", "correct-horse")?;
//! let plaintext = passlock::decrypt(&token.to_string(), "correct-horse")?;
//! assert_eq!(plaintext, "hello world");
//! # Ok::<(), passlock::SealError>(())
//! ```
//!
//! A token is `<b64(ciphertext+tag)>,<b64(salt)>,<b64(nonce)>` and means
//! nothing without the password. Decryption fails with one uniform
//! [`DecryptFailure`] whatever went wrong.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod sealer;
pub mod telemetry;

pub use common::{DecryptFailure, EncryptError, SealError};
pub use crypto::{KdfParams, SaltEncoding, Token};
pub use sealer::Sealer;

use zeroize::Zeroizing;

/// Seal `plaintext` under `password` with the default parameters.
pub fn encrypt(plaintext: &str, password: &str) -> Result<Token, EncryptError> {
    Sealer::default().encrypt(plaintext, password)
}

/// Open `token` with `password` under the default parameters.
pub fn decrypt(token: &str, password: &str) -> Result<String, DecryptFailure> {
    Sealer::default().decrypt(token, password)
}

/// [`encrypt`] on Tokio's blocking pool.
pub async fn encrypt_async(
    plaintext: String,
    password: Zeroizing<String>,
) -> Result<Token, EncryptError> {
    Sealer::default().encrypt_async(plaintext, password).await
}

/// [`decrypt`] on Tokio's blocking pool.
pub async fn decrypt_async(
    token: String,
    password: Zeroizing<String>,
) -> Result<String, DecryptFailure> {
    Sealer::default().decrypt_async(token, password).await
}
