//! Local input validation.
//!
//! Runs before anything touches the network. Both fields are trimmed first
//! (whitespace and the byte-order mark); limits count UTF-16 code units, the
//! same length a browser reports for the field.

use store::config::LimitsConfig;

use crate::models::CryptoRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("text and password are both required")]
    MissingField,
    #[error("text is longer than {max} characters")]
    TextTooLong { max: usize },
    #[error("password is longer than {max} characters")]
    PasswordTooLong { max: usize },
}

/// True when `s` is longer than `max` UTF-16 code units. Stops counting at
/// `max + 1`.
fn exceeds(s: &str, max: usize) -> bool {
    s.encode_utf16().nth(max).is_some()
}

fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl CryptoRequest {
    /// Trim and check the raw form values.
    ///
    /// Checks run in a fixed order: missing field, text length, password
    /// length. The first failure wins.
    pub fn validated(
        text: &str,
        password: &str,
        limits: &LimitsConfig,
    ) -> Result<Self, ValidationError> {
        let text = trim_field(text);
        let password = trim_field(password);

        if text.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if exceeds(text, limits.max_text_chars) {
            return Err(ValidationError::TextTooLong {
                max: limits.max_text_chars,
            });
        }
        if exceeds(password, limits.max_password_chars) {
            return Err(ValidationError::PasswordTooLong {
                max: limits.max_password_chars,
            });
        }

        Ok(Self {
            text: text.to_string(),
            password: password.to_string(),
        })
    }
}
