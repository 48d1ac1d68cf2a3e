//! Tracing subscriber setup.
//!
//! # Telemetry invariants
//!
//! - No password, key, salt, nonce, plaintext or ciphertext appears in any
//!   event or span field. Only lengths and failure reasons are recorded.
//! - Why a token was rejected is logged on the `passlock::audit` target at
//!   `debug` and nowhere else.
//! - Log level is configurable via `PASSLOCK_LOG_LEVEL` (default: `info`),
//!   overridden by `RUST_LOG` when set.

pub mod init;

pub use init::init;
