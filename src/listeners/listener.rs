//! # Listener abstraction and shared handle type.
//!
//! This module defines the [`Listener`] trait (a synchronous payload
//! handler) and the common handle type [`ListenerRef`], an
//! `Arc<dyn Listener<T>>` suitable for registering, looking up, and removing
//! a listener by identity.
//!
//! ## Identity
//! The registry compares handles by allocation identity (`Arc::ptr_eq`):
//! - clones of one [`ListenerRef`] are the *same* listener;
//! - two separately constructed listeners are never equal, even if their
//!   code is byte-for-byte identical.
//!
//! Keep the original handle around if you intend to deregister it later.

use std::sync::Arc;

/// # Synchronous payload handler.
///
/// A `Listener` receives every payload emitted on the events it is
/// registered under. Invocation is fire-and-forget: the registry ignores
/// anything the handler computes, so results must be captured via side
/// effects (shared atomics, channels, and the like).
///
/// Handlers run on the emitter's thread, inside `emit`. Keep them short and
/// non-blocking.
///
/// # Example
/// ```
/// use eventry::{Listener, ListenerRef};
/// use std::sync::Arc;
///
/// struct Echo;
///
/// impl Listener<String> for Echo {
///     fn on_event(&self, payload: &String) {
///         println!("{payload}");
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
///
/// let handle: ListenerRef<String> = Arc::new(Echo);
/// assert_eq!(handle.name(), "echo");
/// ```
pub trait Listener<T>: Send + Sync + 'static {
    /// Handles a single emitted payload.
    ///
    /// Every listener registered under the emitted event observes the same
    /// `&T` for a given `emit` call.
    fn on_event(&self, payload: &T);

    /// Returns the listener name used in diagnostics.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose —
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared listener handle.
///
/// This is the unit of identity for registration, duplicate detection, and
/// removal. Cheap to clone; clones refer to the same listener.
pub type ListenerRef<T> = Arc<dyn Listener<T>>;
