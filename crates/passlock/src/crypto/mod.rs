//! Password-based AES-256-GCM sealing primitives.
//!
//! This module is free of I/O. It provides key derivation, the token codec,
//! and the encrypt/decrypt operations built on them.
//!
//! # Token format
//!
//! ```text
//! <base64(ciphertext+tag)>,<base64(salt)>,<base64(nonce)>
//! ```
//!
//! Standard base64 alphabet with padding. The comma never occurs inside a
//! field, so splitting on it is unambiguous.
//!
//! # Parameters
//!
//! PBKDF2-HMAC-SHA256 with 100 000 iterations derives a 256-bit key from the
//! password and a fresh 16-byte salt. AES-256-GCM seals the UTF-8 plaintext
//! under a fresh 96-bit nonce with no associated data; the 128-bit tag trails
//! the ciphertext. These values must match bit-for-bit for tokens to move
//! between implementations.

pub mod cipher;
pub mod kdf;
pub mod token;

pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, DerivedKey, KdfParams, SaltEncoding};
pub use token::{Token, TokenError};

/// Byte length of the PBKDF2 salt.
pub const SALT_LEN: usize = 16;

/// Byte length of an AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-256 key.
pub const KEY_LEN: usize = 32;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;
