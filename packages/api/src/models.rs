//! # Request and response models
//!
//! [`CryptoRequest`] is the exact JSON body sent to the service. The wire
//! envelopes the service answers with are private to [`crate::client`]; what
//! leaves this crate is the flattened [`CryptoOutput`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which operation the user asked for. Selects the endpoint and the UI copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Path appended to the API base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Encrypt => "/encrypt",
            Mode::Decrypt => "/decrypt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of both endpoints. Build it through
/// [`CryptoRequest::validated`](crate::validate) so that limits are enforced.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoRequest {
    pub text: String,
    pub password: String,
}

// Keeps the password out of logs.
impl fmt::Debug for CryptoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoRequest")
            .field("text_chars", &self.text.chars().count())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The figure the service reports next to the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statistic {
    /// Encrypt: number of words in the ciphertext.
    WordCount(u64),
    /// Decrypt: length of the recovered text in characters.
    Length(u64),
}

/// A successful response, flattened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CryptoOutput {
    pub mode: Mode,
    /// `data.encrypted` or `data.decrypted`.
    pub text: String,
    pub statistic: Statistic,
    /// Server time in epoch seconds, when the service sent one.
    pub timestamp: Option<i64>,
}
