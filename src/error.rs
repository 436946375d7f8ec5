//! Error types used by the listener registry.
//!
//! This module defines [`RegistryError`], the single error enum returned by
//! every fallible registry operation. All variants are caller-contract
//! violations: none are transient, none are worth retrying, and the registry
//! never logs or swallows them — they surface synchronously to the caller of
//! the offending operation.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, plus [`RegistryError::event`] to recover the offending
//! event name where one exists.

use thiserror::Error;

/// # Errors produced by registry operations.
///
/// Each variant identifies one distinct misuse of the registry contract.
/// There is no internal recovery: an operation that returns an error has
/// left the registry exactly as it found it.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A blank (empty or whitespace-only) event name was supplied.
    #[error("event name must be a non-blank string")]
    InvalidEvent,

    /// The listener is already registered under this event.
    ///
    /// Identity is allocation identity: re-registering a clone of an
    /// already-registered handle trips this error, while a separately
    /// constructed listener with identical behavior does not.
    #[error("listener is already registered for '{event}'")]
    DuplicateListener {
        /// The event the listener was already registered under.
        event: String,
    },

    /// The event has no registrations at all.
    #[error("'{event}' is not added")]
    UnknownEvent {
        /// The event name that has no listener set.
        event: String,
    },

    /// The event exists, but the listener is not registered under it.
    #[error("listener is not added for '{event}'")]
    UnknownListener {
        /// The event whose set does not contain the listener.
        event: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventry::RegistryError;
    ///
    /// let err = RegistryError::UnknownEvent { event: "tick".into() };
    /// assert_eq!(err.as_label(), "unknown_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::InvalidEvent => "invalid_event",
            RegistryError::DuplicateListener { .. } => "duplicate_listener",
            RegistryError::UnknownEvent { .. } => "unknown_event",
            RegistryError::UnknownListener { .. } => "unknown_listener",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::InvalidEvent => "blank event name".to_string(),
            RegistryError::DuplicateListener { event } => {
                format!("duplicate listener for event={event}")
            }
            RegistryError::UnknownEvent { event } => format!("unknown event={event}"),
            RegistryError::UnknownListener { event } => {
                format!("unknown listener for event={event}")
            }
        }
    }

    /// Returns the offending event name, if the variant carries one.
    ///
    /// [`RegistryError::InvalidEvent`] carries none: the supplied name was
    /// blank and therefore names nothing.
    pub fn event(&self) -> Option<&str> {
        match self {
            RegistryError::InvalidEvent => None,
            RegistryError::DuplicateListener { event }
            | RegistryError::UnknownEvent { event }
            | RegistryError::UnknownListener { event } => Some(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let cases = [
            (RegistryError::InvalidEvent, "invalid_event"),
            (
                RegistryError::DuplicateListener { event: "a".into() },
                "duplicate_listener",
            ),
            (
                RegistryError::UnknownEvent { event: "a".into() },
                "unknown_event",
            ),
            (
                RegistryError::UnknownListener { event: "a".into() },
                "unknown_listener",
            ),
        ];
        for (err, label) in cases {
            assert_eq!(err.as_label(), label);
        }
    }

    #[test]
    fn test_display_names_the_event() {
        let err = RegistryError::UnknownEvent {
            event: "heartbeat".into(),
        };
        assert_eq!(err.to_string(), "'heartbeat' is not added");
    }

    #[test]
    fn test_event_accessor() {
        assert_eq!(RegistryError::InvalidEvent.event(), None);
        let err = RegistryError::DuplicateListener { event: "x".into() };
        assert_eq!(err.event(), Some("x"));
    }
}
