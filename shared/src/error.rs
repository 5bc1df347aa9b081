//! The single failure kind surfaced by the article client.

use std::fmt;

use thiserror::Error;

/// Shown when an error carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Client operation a [`RequestError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /blogs`
    ListArticles,
    /// `GET /blogs/{id}`
    GetArticle,
    /// `POST /blogs`
    CreateArticle,
}

impl Operation {
    /// User-facing message for a failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListArticles => "Failed to fetch blogs",
            Operation::GetArticle => "Failed to fetch blog",
            Operation::CreateArticle => "Failed to create blog",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListArticles => "list articles",
            Operation::GetArticle => "get article",
            Operation::CreateArticle => "create article",
        };
        f.write_str(name)
    }
}

/// A request that did not produce data.
///
/// Non-success status, unreachable network and undecodable body all collapse
/// into this one kind; `404` is not told apart from `500`. The `detail` is
/// kept for console diagnostics and never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .operation.failure_message())]
pub struct RequestError {
    operation: Operation,
    detail: String,
}

impl RequestError {
    /// Failure of `operation`, with a diagnostic detail.
    pub fn new(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }

    /// Operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Diagnostic detail (status code, transport or decode error).
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Reject any HTTP status outside `200..=299`.
pub fn ensure_success(status: u16, operation: Operation) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestError::new(operation, format!("HTTP error: {status}")))
    }
}

/// Message to render for an error, with the fixed fallback for blank ones.
pub fn display_message(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_passes() {
        for status in [200, 201, 204, 299] {
            assert!(ensure_success(status, Operation::ListArticles).is_ok(), "{status}");
        }
    }

    #[test]
    fn anything_outside_success_range_fails() {
        for status in [0, 100, 199, 300, 304, 400, 404, 500, 503] {
            let err = ensure_success(status, Operation::GetArticle).unwrap_err();
            assert_eq!(err.operation(), Operation::GetArticle);
            assert_eq!(err.detail(), format!("HTTP error: {status}"));
        }
    }

    #[test]
    fn not_found_and_server_error_look_the_same() {
        let not_found = ensure_success(404, Operation::GetArticle).unwrap_err();
        let server = ensure_success(500, Operation::GetArticle).unwrap_err();
        assert_eq!(not_found.to_string(), server.to_string());
        assert_eq!(not_found.to_string(), "Failed to fetch blog");
    }

    #[test]
    fn messages_are_per_operation() {
        assert_eq!(
            RequestError::new(Operation::ListArticles, "boom").to_string(),
            "Failed to fetch blogs"
        );
        assert_eq!(
            RequestError::new(Operation::CreateArticle, "boom").to_string(),
            "Failed to create blog"
        );
    }

    #[test]
    fn blank_messages_fall_back() {
        assert_eq!(display_message(""), FALLBACK_ERROR_MESSAGE);
        assert_eq!(display_message("  "), FALLBACK_ERROR_MESSAGE);
        assert_eq!(display_message("Failed to fetch blog"), "Failed to fetch blog");
    }
}
