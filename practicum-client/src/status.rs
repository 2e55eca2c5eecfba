//! The verdict catalog and the notification formatter.

use crate::response::Homework;
use hwbot_core::{HwbotError, Result};
use tracing::error;

/// Human-readable verdict for one of the three known status codes.
pub fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Turns one homework record into the notification sentence.
///
/// Missing `homework_name` or `status` fails with MissingField (logged here
/// first); an unrecognized status fails with UnknownStatus. No I/O beyond
/// the log lines, no mutation.
pub fn parse_status(homework: &Homework) -> Result<String> {
    let name = match homework.homework_name.as_deref() {
        Some(name) => name,
        None => {
            error!("homework record has no `homework_name` field");
            return Err(HwbotError::MissingField("homework_name"));
        }
    };
    let status = match homework.status.as_deref() {
        Some(status) => status,
        None => {
            error!("homework record has no `status` field");
            return Err(HwbotError::MissingField("status"));
        }
    };
    let verdict =
        verdict(status).ok_or_else(|| HwbotError::UnknownStatus(status.to_string()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework(name: Option<&str>, status: Option<&str>) -> Homework {
        Homework {
            homework_name: name.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_status_known_codes() {
        for (code, expected) in [
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ] {
            let message = parse_status(&homework(Some("hw1"), Some(code))).unwrap();
            assert!(message.contains("\"hw1\""), "message: {message}");
            assert!(message.contains(expected), "message: {message}");
        }
    }

    #[test]
    fn test_parse_status_exact_template() {
        let message = parse_status(&homework(Some("hw1"), Some("approved"))).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_unknown_code() {
        match parse_status(&homework(Some("hw1"), Some("draft"))) {
            Err(HwbotError::UnknownStatus(status)) => assert_eq!(status, "draft"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_missing_name() {
        match parse_status(&homework(None, Some("approved"))) {
            Err(HwbotError::MissingField(field)) => assert_eq!(field, "homework_name"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_missing_status() {
        match parse_status(&homework(Some("hw1"), None)) {
            Err(HwbotError::MissingField(field)) => assert_eq!(field, "status"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_verdict_unknown_is_none() {
        assert!(verdict("").is_none());
        assert!(verdict("Approved").is_none());
        assert!(verdict("pending").is_none());
    }
}
