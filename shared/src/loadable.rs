//! View-facing states for queries and mutations.

use crate::error::display_message;

/// Outcome of a query as a view sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// No data yet and a request is (or is about to be) in flight.
    Loading,
    /// The last request failed; carries the user-facing message.
    Failed(String),
    /// Data is available.
    Ready(T),
}

impl<T> Loadable<T> {
    /// The ready value, if any.
    pub fn ready(self) -> Option<T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Message to render for a failure, falling back when the error had none.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(display_message(message)),
            _ => None,
        }
    }
}

/// Lifecycle of a fire-and-await mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Last submission succeeded.
    Succeeded,
    /// Last submission failed.
    Failed,
}

impl MutationStatus {
    /// Request in flight.
    pub fn is_pending(self) -> bool {
        self == MutationStatus::Pending
    }

    /// Last submission succeeded.
    pub fn is_success(self) -> bool {
        self == MutationStatus::Succeeded
    }

    /// Last submission failed.
    pub fn is_error(self) -> bool {
        self == MutationStatus::Failed
    }

    /// Status after a submission settles.
    pub fn settled<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            MutationStatus::Succeeded
        } else {
            MutationStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Operation, RequestError, FALLBACK_ERROR_MESSAGE};

    #[test]
    fn failure_carries_operation_message() {
        let err = RequestError::new(Operation::GetArticle, "HTTP error: 404");
        let state: Loadable<u8> = Loadable::Failed(err.to_string());

        assert_eq!(state.error_message(), Some("Failed to fetch blog"));
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn ready_has_no_error_message() {
        let state = Loadable::Ready(3_u8);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.ready(), Some(3));
    }

    #[test]
    fn empty_message_uses_fallback() {
        let state: Loadable<()> = Loadable::Failed(String::new());
        assert_eq!(state.error_message(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn mutation_flags_are_exclusive() {
        let pending = MutationStatus::Pending;
        assert!(pending.is_pending() && !pending.is_success() && !pending.is_error());

        let ok: Result<(), ()> = Ok(());
        let err: Result<(), ()> = Err(());
        assert!(MutationStatus::settled(&ok).is_success());
        assert!(MutationStatus::settled(&err).is_error());
        assert!(!MutationStatus::default().is_pending());
    }
}
