use thiserror::Error;

use crate::logic::render::sanitize_text;

/// Why a news fetch failed
///
/// The `Display` text is what the user sees in the error toast, after the
/// "Failed to fetch news: " prefix.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (refused, DNS, timeout, body read)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body was not the expected JSON
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The background worker is gone, so the request could not be sent
    #[error("news service unavailable")]
    ServiceUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Server,
    MalformedBody,
    Internal,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(e) if e.is_decode() => ErrorKind::MalformedBody,
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Server { .. } => ErrorKind::Server,
            FetchError::Decode(_) => ErrorKind::MalformedBody,
            FetchError::ServiceUnavailable => ErrorKind::Internal,
        }
    }

    /// HTTP status for server-reported failures
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Extract the user-facing message from a non-success response body
///
/// Uses the `detail` string of a JSON body when present and non-empty after
/// stripping control sequences, otherwise a generic message naming the
/// status code.
pub fn server_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|d| d.as_str())
                .map(sanitize_text)
                .filter(|d| !d.is_empty())
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

/// Toast text for a failed fetch
pub fn format_error_message(error: &FetchError) -> String {
    format!("Failed to fetch news: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_used() {
        assert_eq!(
            server_error_message(429, r#"{"detail": "rate limited"}"#),
            "rate limited"
        );
    }

    #[test]
    fn test_unparseable_body_names_status() {
        let msg = server_error_message(502, "<html>Bad Gateway</html>");
        assert_eq!(msg, "HTTP error! status: 502");
    }

    #[test]
    fn test_missing_or_empty_detail_names_status() {
        assert_eq!(server_error_message(500, "{}"), "HTTP error! status: 500");
        assert_eq!(
            server_error_message(500, r#"{"detail": ""}"#),
            "HTTP error! status: 500"
        );
        assert_eq!(
            server_error_message(422, r#"{"detail": [{"msg": "field required"}]}"#),
            "HTTP error! status: 422"
        );
    }

    #[test]
    fn test_detail_escape_sequences_are_stripped() {
        let body = "{\"detail\":\"\\u001b]0;pwned\\u0007evil\\u001b[2Jx\"}";
        let msg = server_error_message(500, body);
        assert_eq!(msg, "evilx");
        assert!(!msg.chars().any(char::is_control));
    }

    #[test]
    fn test_detail_of_only_escapes_names_status() {
        let body = "{\"detail\":\"\\u001b[2J\\u0007\"}";
        assert_eq!(server_error_message(503, body), "HTTP error! status: 503");
    }

    #[test]
    fn test_toast_message_for_server_error() {
        let err = FetchError::Server {
            status: 429,
            message: server_error_message(429, r#"{"detail": "rate limited"}"#),
        };
        assert_eq!(format_error_message(&err), "Failed to fetch news: rate limited");
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_decode_error_kind() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::MalformedBody);
        assert!(format_error_message(&err).starts_with("Failed to fetch news: "));
    }
}
