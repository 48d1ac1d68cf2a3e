//! Common types and errors shared across `passlock` crates.

pub mod error;
pub mod protocol;

pub use error::{DecryptFailure, EncryptError, SealError};
