//! JSON framing for tokens handed to a transport.
//!
//! A token is opaque text; this envelope is the shape a link-sharing service
//! accepts when a token is posted to it.

use serde::{Deserialize, Serialize};

/// Body carrying one sealed token, e.g. `{"data": "<ct>,<salt>,<nonce>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEnvelope {
    /// The sealed token in its comma-separated text form.
    pub data: String,
}

impl TokenEnvelope {
    /// Wrap a token string.
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Body carrying recovered plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaintextEnvelope {
    /// The decrypted text.
    pub plaintext: String,
}
