//! Command-line front end: seal stdin into a token, or open a token read from
//! stdin.

use clap::{Parser, Subcommand};
use common::protocol::{PlaintextEnvelope, TokenEnvelope};
use common::SealError;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;
use zeroize::Zeroizing;

use crate::Sealer;

/// Variable the password is read from unless `--password-env` says otherwise.
///
/// Kept outside the `PASSLOCK_` prefix so the configuration loader never
/// copies the password into its own unzeroized value map.
pub const DEFAULT_PASSWORD_ENV: &str = "SEAL_PASSWORD";

#[derive(Debug, Parser)]
#[command(
    name = "passlock",
    version,
    about = "Seal text under a password into a portable token"
)]
pub struct Cli {
    /// Environment variable holding the password.
    #[arg(long, global = true, default_value = DEFAULT_PASSWORD_ENV)]
    pub password_env: String,

    /// Print `{"data": ...}` / `{"plaintext": ...}` instead of bare text.
    /// `decrypt` then also expects a `{"data": ...}` envelope on stdin.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Read plaintext from stdin and print a token.
    Encrypt,
    /// Read a token from stdin and print the plaintext.
    Decrypt,
}

/// Read stdin and the password variable, then run the requested command.
pub async fn run(cli: &Cli, sealer: Sealer) -> Result<String, SealError> {
    let password = password_from_env(&cli.password_env)?;

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(|e| SealError::Usage(format!("failed to read stdin: {e}")))?;

    execute(cli, sealer, input, password).await
}

/// Run the requested command over already-collected input.
///
/// Plaintext is sealed byte-for-byte; a token has surrounding whitespace
/// trimmed first. The returned string is exactly what should go to stdout.
pub async fn execute(
    cli: &Cli,
    sealer: Sealer,
    input: String,
    password: Zeroizing<String>,
) -> Result<String, SealError> {
    match cli.command {
        Command::Encrypt => {
            let plaintext_len = input.len();
            let token = sealer.encrypt_async(input, password).await?.to_string();
            info!(plaintext_len, "encrypted");

            if cli.json {
                to_json_line(&TokenEnvelope::new(token))
            } else {
                Ok(format!("{token}\n"))
            }
        }
        Command::Decrypt => {
            let token = if cli.json {
                serde_json::from_str::<TokenEnvelope>(&input)
                    .map_err(|e| envelope_error(&e))?
                    .data
            } else {
                input.trim().to_owned()
            };

            let plaintext = sealer.decrypt_async(token, password).await?;
            info!(plaintext_len = plaintext.len(), "decrypted");

            if cli.json {
                to_json_line(&PlaintextEnvelope { plaintext })
            } else {
                Ok(plaintext)
            }
        }
    }
}

// serde_json's own message quotes the offending input, which may be a token.
fn envelope_error(e: &serde_json::Error) -> SealError {
    SealError::Usage(format!(
        "invalid token envelope ({:?} error at line {} column {})",
        e.classify(),
        e.line(),
        e.column()
    ))
}

fn password_from_env(var: &str) -> Result<Zeroizing<String>, SealError> {
    std::env::var(var)
        .map(Zeroizing::new)
        .map_err(|_| SealError::Usage(format!("{var} is not set")))
}

fn to_json_line<T: Serialize>(value: &T) -> Result<String, SealError> {
    let mut line = serde_json::to_string(value)
        .map_err(|e| SealError::Usage(format!("failed to encode output: {e}")))?;
    line.push('\n');
    Ok(line)
}
