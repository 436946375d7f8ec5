//! Event-name validation.
//!
//! Event names are plain strings. A name is usable if it contains at least
//! one non-whitespace character; blank names are rejected up front by every
//! registry operation, before any state is touched.

use crate::error::RegistryError;

/// Returns `true` if `name` can identify an event (non-blank).
///
/// # Example
/// ```
/// use eventry::is_valid_name;
///
/// assert!(is_valid_name("task-done"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("   "));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Rejects blank event names with [`RegistryError::InvalidEvent`].
pub(crate) fn validate(name: &str) -> Result<(), RegistryError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(RegistryError::InvalidEvent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        for name in ["sum", "task.done", "a", " padded "] {
            assert!(is_valid_name(name), "{name:?} should be valid");
            assert!(validate(name).is_ok());
        }
    }

    #[test]
    fn test_rejects_blank_names() {
        for name in ["", " ", "\t", "\n  "] {
            assert!(!is_valid_name(name), "{name:?} should be invalid");
            assert_eq!(validate(name), Err(RegistryError::InvalidEvent));
        }
    }
}
