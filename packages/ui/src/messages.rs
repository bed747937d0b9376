//! User-facing copy (Czech) and the mapping from errors to it.

use api::{ApiError, Mode, Statistic, ValidationError};
use chrono::{DateTime, Local, TimeZone};

pub const APP_TITLE: &str = "SmirkHat Šifra";
pub const APP_SUBTITLE: &str = "Šifrování a dešifrování textu heslem";
pub const PASSWORD_LABEL: &str = "Heslo";
pub const PASSWORD_PLACEHOLDER: &str = "Zadejte heslo...";
pub const RESULT_HEADING: &str = "Výsledek";
pub const MODE_ENCRYPT: &str = "Šifrovat";
pub const MODE_DECRYPT: &str = "Dešifrovat";
pub const THEME_TOGGLE_LABEL: &str = "Přepnout motiv";
pub const COPY_LABEL: &str = "Kopírovat výsledek";

pub const FILL_ALL_FIELDS: &str = "Prosím vyplňte všechna pole.";
pub const NOTHING_TO_COPY: &str = "Není co kopírovat.";
pub const COPIED_WITH_FALLBACK: &str = "Text byl zkopírován (fallback metoda).";
pub const COPY_FAILED: &str = "Kopírování se nezdařilo.";

pub const CONNECTION_FAILED: &str =
    "Nepodařilo se připojit k serveru. Zkontrolujte internetové připojení.";
pub const ACCESS_DENIED: &str = "Přístup zamítnut. Tato stránka není autorizována pro použití API.";
pub const INVALID_INPUT: &str = "Neplatný vstup. Zkontrolujte zadané údaje.";
pub const METHOD_NOT_ALLOWED: &str = "Nepodporovaná metoda požadavku.";
pub const OPERATION_FAILED: &str = "Operace se nezdařila.";
pub const UNEXPECTED_ERROR: &str = "Došlo k neočekávané chybě.";

/// Mode-dependent form copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeCopy {
    pub text_label: &'static str,
    pub text_placeholder: &'static str,
    pub submit_label: &'static str,
}

pub fn mode_copy(mode: Mode) -> ModeCopy {
    match mode {
        Mode::Encrypt => ModeCopy {
            text_label: "Text k šifrování",
            text_placeholder: "Zadejte text, který chcete zašifrovat...",
            submit_label: "Zašifrovat",
        },
        Mode::Decrypt => ModeCopy {
            text_label: "Zašifrovaný text",
            text_placeholder: "Zadejte zašifrovaný text (slova oddělená mezerami)...",
            submit_label: "Dešifrovat",
        },
    }
}

/// `1048576` → `1 048 576`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField => FILL_ALL_FIELDS.to_string(),
        ValidationError::TextTooLong { max } => {
            format!("Text je příliš dlouhý (maximum {} znaků).", group_thousands(*max))
        }
        ValidationError::PasswordTooLong { max } => {
            format!("Heslo je příliš dlouhé (maximum {} znaků).", group_thousands(*max))
        }
    }
}

/// Map a failed request to the message shown in the error banner.
///
/// Status errors are matched on their text (server message or `HTTP {status}`),
/// so a server message mentioning one of the known codes gets the friendlier
/// wording; any other non-empty server message is shown as is.
pub fn localize_error(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => CONNECTION_FAILED.to_string(),
        ApiError::Rejected => OPERATION_FAILED.to_string(),
        ApiError::Decode(_) => UNEXPECTED_ERROR.to_string(),
        ApiError::Status { .. } => {
            let text = err.status_text().unwrap_or_default();
            if text.contains("403") {
                ACCESS_DENIED.to_string()
            } else if text.contains("400") {
                INVALID_INPUT.to_string()
            } else if text.contains("405") {
                METHOD_NOT_ALLOWED.to_string()
            } else if text.trim().is_empty() {
                UNEXPECTED_ERROR.to_string()
            } else {
                text
            }
        }
    }
}

/// Czech `toLocaleString` layout: `14. 11. 2023 22:13:20`.
pub fn format_timestamp_in<Tz>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(
        utc.with_timezone(tz)
            .format("%-d. %-m. %Y %-H:%M:%S")
            .to_string(),
    )
}

/// [`format_timestamp_in`] for the browser's local time zone.
pub fn format_timestamp(timestamp: i64) -> Option<String> {
    format_timestamp_in(timestamp, &Local)
}

/// The line under the result, e.g. `Počet slov: 2 • Čas: 14. 11. 2023 22:13:20`.
pub fn stats_line(statistic: Statistic, time: Option<&str>) -> String {
    let mut line = match statistic {
        Statistic::WordCount(n) => format!("Počet slov: {n}"),
        Statistic::Length(n) => format!("Délka textu: {n} znaků"),
    };
    if let Some(time) = time {
        line.push_str(" • Čas: ");
        line.push_str(time);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_mode_copy_swaps() {
        assert_eq!(mode_copy(Mode::Encrypt).submit_label, "Zašifrovat");
        assert_eq!(mode_copy(Mode::Decrypt).submit_label, "Dešifrovat");
        assert_eq!(mode_copy(Mode::Encrypt).text_label, "Text k šifrování");
        assert_eq!(mode_copy(Mode::Decrypt).text_label, "Zašifrovaný text");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(256), "256");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(1_048_576), "1 048 576");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(validation_message(&ValidationError::MissingField), FILL_ALL_FIELDS);
        assert_eq!(
            validation_message(&ValidationError::TextTooLong { max: 1_048_576 }),
            "Text je příliš dlouhý (maximum 1 048 576 znaků)."
        );
        assert_eq!(
            validation_message(&ValidationError::PasswordTooLong { max: 256 }),
            "Heslo je příliš dlouhé (maximum 256 znaků)."
        );
    }

    fn status(code: u16, message: Option<&str>) -> ApiError {
        ApiError::Status {
            status: code,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_localize_known_statuses() {
        assert_eq!(localize_error(&status(403, None)), ACCESS_DENIED);
        assert_eq!(localize_error(&status(400, None)), INVALID_INPUT);
        assert_eq!(localize_error(&status(405, None)), METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_server_message_shown_verbatim() {
        assert_eq!(localize_error(&status(500, Some("Interní chyba"))), "Interní chyba");
        assert_eq!(localize_error(&status(422, Some("X"))), "X");
    }

    #[test]
    fn test_server_message_matching_known_code_is_localized() {
        // The code in the message wins over the actual status.
        assert_eq!(
            localize_error(&status(500, Some("upstream returned 403"))),
            ACCESS_DENIED
        );
    }

    #[test]
    fn test_unknown_status_without_message() {
        assert_eq!(localize_error(&status(502, None)), "HTTP 502");
    }

    #[test]
    fn test_other_errors() {
        assert_eq!(
            localize_error(&ApiError::Network("Failed to fetch".into())),
            CONNECTION_FAILED
        );
        assert_eq!(localize_error(&ApiError::Rejected), OPERATION_FAILED);
        assert_eq!(localize_error(&ApiError::Decode("eof".into())), UNEXPECTED_ERROR);
    }

    #[test]
    fn test_format_timestamp_czech_layout() {
        assert_eq!(
            format_timestamp_in(1_700_000_000, &Utc).as_deref(),
            Some("14. 11. 2023 22:13:20")
        );
        assert_eq!(
            format_timestamp_in(0, &Utc).as_deref(),
            Some("1. 1. 1970 0:00:00")
        );
    }

    #[test]
    fn test_stats_lines() {
        assert_eq!(
            stats_line(Statistic::WordCount(2), Some("14. 11. 2023 22:13:20")),
            "Počet slov: 2 • Čas: 14. 11. 2023 22:13:20"
        );
        assert_eq!(
            stats_line(Statistic::Length(11), Some("1. 1. 1970 0:00:00")),
            "Délka textu: 11 znaků • Čas: 1. 1. 1970 0:00:00"
        );
        assert_eq!(stats_line(Statistic::Length(3), None), "Délka textu: 3 znaků");
    }
}
