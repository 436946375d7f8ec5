//! # Registry configuration.
//!
//! Provides [`RegistryConfig`], centralized settings for a registry instance.
//!
//! Config is consumed once, at construction: `Registry::with_config(config)`.
//!
//! ## Sentinel values
//! - `expected_events = 0` → no pre-allocation (the map grows on demand)

use crate::policies::PanicPolicy;

/// Configuration for a [`Registry`](crate::Registry) instance.
///
/// Defines:
/// - **Capacity**: expected number of distinct event names
/// - **Dispatch behavior**: what `emit` does when a listener panics
///
/// ## Field semantics
/// - `expected_events`: pre-sizes the event map (`0` = no pre-allocation)
/// - `panic_policy`: propagate at first panic, or isolate and re-raise after
///   the loop (see [`PanicPolicy`])
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Copy, Debug)]
pub struct RegistryConfig {
    /// Expected number of distinct event names.
    ///
    /// Used as the initial capacity of the event map. `0` means no
    /// pre-allocation.
    pub expected_events: usize,

    /// Dispatch behavior when a listener panics during `emit`.
    ///
    /// See [`PanicPolicy`] for the trade-offs.
    pub panic_policy: PanicPolicy,
}

impl RegistryConfig {
    /// Returns the map pre-allocation as an `Option`.
    ///
    /// - `None` → no pre-allocation
    /// - `Some(n)` → reserve room for `n` event names up front
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.expected_events == 0 {
            None
        } else {
            Some(self.expected_events)
        }
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `expected_events = 0` (grow on demand)
    /// - `panic_policy = PanicPolicy::Propagate` (fail loudly)
    fn default() -> Self {
        Self {
            expected_events: 0,
            panic_policy: PanicPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_capacity_hint() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.capacity_hint(), None);
        assert_eq!(cfg.panic_policy, PanicPolicy::Propagate);
    }

    #[test]
    fn test_capacity_hint_passes_nonzero_through() {
        let cfg = RegistryConfig {
            expected_events: 8,
            ..RegistryConfig::default()
        };
        assert_eq!(cfg.capacity_hint(), Some(8));
    }
}
