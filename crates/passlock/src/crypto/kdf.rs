//! PBKDF2-HMAC-SHA256 key derivation.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use super::KEY_LEN;

/// Iteration count used unless configured otherwise.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Lowest iteration count [`KdfParams::new`] accepts.
pub const MIN_ITERATIONS: u32 = 10_000;

/// How the salt bytes are presented to PBKDF2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltEncoding {
    /// The salt bytes are used as-is.
    #[default]
    Raw,
    /// The salt is rendered as comma-joined decimal byte values
    /// (`"7,250,13,..."`) and that text's UTF-8 bytes are used instead.
    /// Tokens minted by the browser client follow this convention.
    BrowserCompat,
}

/// Errors produced when building [`KdfParams`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KdfError {
    #[error("PBKDF2 iteration count {0} is below the minimum of {MIN_ITERATIONS}")]
    TooFewIterations(u32),
}

/// Tunable key-derivation settings.
///
/// Neither value is carried in the token; both sides of a round trip must
/// agree on them out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    iterations: u32,
    salt_encoding: SaltEncoding,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            salt_encoding: SaltEncoding::Raw,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32, salt_encoding: SaltEncoding) -> Result<Self, KdfError> {
        if iterations < MIN_ITERATIONS {
            return Err(KdfError::TooFewIterations(iterations));
        }
        Ok(Self {
            iterations,
            salt_encoding,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt_encoding(&self) -> SaltEncoding {
        self.salt_encoding
    }

    /// Same iteration count, different salt convention.
    pub fn with_salt_encoding(self, salt_encoding: SaltEncoding) -> Self {
        Self {
            salt_encoding,
            ..self
        }
    }
}

/// A 256-bit key that lives for one encrypt or decrypt call.
///
/// The buffer is wiped on drop and never printed.
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive the AES-256 key for `password` and `salt`.
///
/// Deterministic in all three inputs. Any salt length is accepted; the token
/// codec is what pins it to [`super::SALT_LEN`]. An empty password is
/// allowed.
pub fn derive_key(password: &[u8], salt: &[u8], params: KdfParams) -> DerivedKey {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);

    match params.salt_encoding {
        SaltEncoding::Raw => {
            pbkdf2_hmac::<Sha256>(password, salt, params.iterations, key.as_mut_slice());
        }
        SaltEncoding::BrowserCompat => {
            let text = browser_salt_text(salt);
            pbkdf2_hmac::<Sha256>(
                password,
                text.as_bytes(),
                params.iterations,
                key.as_mut_slice(),
            );
        }
    }

    DerivedKey(key)
}

fn browser_salt_text(salt: &[u8]) -> String {
    salt.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(key: &DerivedKey) -> String {
        key.as_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    fn counting_salt() -> Vec<u8> {
        (0u8..16).collect()
    }

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 16];
        let k1 = derive_key(b"password", &salt, KdfParams::default());
        let k2 = derive_key(b"password", &salt, KdfParams::default());
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn salt_changes_key() {
        let k1 = derive_key(b"pw", &[1u8; 16], KdfParams::default());
        let k2 = derive_key(b"pw", &[2u8; 16], KdfParams::default());
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn raw_salt_known_answer() {
        let key = derive_key(b"correct-horse", &counting_salt(), KdfParams::default());
        assert_eq!(
            hex(&key),
            "320750f50df8f0086e0cf09e97d0802f5b31754896053352151addbe6a458115"
        );
    }

    #[test]
    fn browser_compat_salt_known_answer() {
        let params = KdfParams::default().with_salt_encoding(SaltEncoding::BrowserCompat);
        let key = derive_key(b"correct-horse", &counting_salt(), params);
        assert_eq!(
            hex(&key),
            "6e151cfb12cb7edba96fea3b99e70376e688bf337bc91a24acd6764ae18fd0ea"
        );
    }

    #[test]
    fn empty_password_is_accepted() {
        let key = derive_key(b"", &counting_salt(), KdfParams::default());
        assert_eq!(
            hex(&key),
            "286ed0e0ec47cc953dc709da86b074849e1c1202cca4acd663df1860514934ae"
        );
    }

    #[test]
    fn browser_salt_text_is_decimal_list() {
        assert_eq!(browser_salt_text(&[0, 7, 255]), "0,7,255");
        assert_eq!(browser_salt_text(&[]), "");
    }

    #[test]
    fn iteration_count_affects_output() {
        let salt = [7u8; 16];
        let fast = KdfParams::new(MIN_ITERATIONS, SaltEncoding::Raw).unwrap();
        let k1 = derive_key(b"pw", &salt, fast);
        let k2 = derive_key(b"pw", &salt, KdfParams::default());
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn too_few_iterations_rejected() {
        assert_eq!(
            KdfParams::new(1_000, SaltEncoding::Raw),
            Err(KdfError::TooFewIterations(1_000))
        );
    }

    #[test]
    fn derived_key_redacted_in_debug() {
        let key = derive_key(b"pw", &[0u8; 16], KdfParams::default());
        assert_eq!(format!("{key:?}"), "DerivedKey([REDACTED])");
    }
}
