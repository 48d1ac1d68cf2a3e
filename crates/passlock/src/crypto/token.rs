//! The three-field textual token and its codec.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use super::{NONCE_LEN, SALT_LEN, TAG_LEN};

/// Separator between the token's fields.
pub const DELIMITER: char = ',';

/// Structural problems found while parsing a token string.
///
/// These never reach a caller of [`super::decrypt`], which reports one
/// uniform failure instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("{0} field is not valid base64")]
    Base64(&'static str),

    #[error("{field} field decodes to {actual} bytes, expected {expected}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("ciphertext field is {0} bytes, shorter than the {TAG_LEN}-byte tag")]
    Truncated(usize),
}

/// A sealed message: ciphertext with trailing tag, plus the salt and nonce it
/// was sealed under.
///
/// `Display` renders `<b64(ciphertext)>,<b64(salt)>,<b64(nonce)>`; `FromStr`
/// parses it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    ciphertext: Vec<u8>,
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
}

impl Token {
    pub fn new(ciphertext: Vec<u8>, salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            ciphertext,
            salt,
            nonce,
        }
    }

    /// Ciphertext followed by the 16-byte GCM tag.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}",
            STANDARD.encode(&self.ciphertext),
            STANDARD.encode(self.salt),
            STANDARD.encode(self.nonce),
        )
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(DELIMITER).collect();
        let [ciphertext, salt, nonce] = fields.as_slice() else {
            return Err(TokenError::FieldCount(fields.len()));
        };

        let ciphertext = decode_field("ciphertext", ciphertext)?;
        if ciphertext.len() < TAG_LEN {
            return Err(TokenError::Truncated(ciphertext.len()));
        }

        Ok(Self {
            ciphertext,
            salt: decode_fixed("salt", salt)?,
            nonce: decode_fixed("nonce", nonce)?,
        })
    }
}

fn decode_field(field: &'static str, encoded: &str) -> Result<Vec<u8>, TokenError> {
    STANDARD
        .decode(encoded)
        .map_err(|_| TokenError::Base64(field))
}

fn decode_fixed<const N: usize>(field: &'static str, encoded: &str) -> Result<[u8; N], TokenError> {
    let bytes = decode_field(field, encoded)?;
    bytes.as_slice().try_into().map_err(|_| TokenError::Length {
        field,
        expected: N,
        actual: bytes.len(),
    })
}
