//! # Listener registry - named-event registration and synchronous dispatch.
//!
//! The registry owns a guarded map from event name to the ordered set of
//! listener handles registered under it:
//! - `register(event, handle)` → adds the handle, creating the event's set on demand
//! - `deregister(event, handle)` → removes the handle, dropping the event's set when it empties
//! - `emit(event, &payload)` → invokes every currently-registered handle, exactly once
//!
//! ## Architecture
//! ```text
//! register(event, handle) ──► RwLock<HashMap<event, Vec<ListenerRef>>> ◄── deregister(event, handle)
//!                                           │
//! emit(event, &payload) ──────► clone the event's set (snapshot), drop the lock
//!                                           │
//!                                           └─► handle.on_event(&payload)  (each handle, once, in order)
//! ```
//!
//! ## Rules
//! - A key exists only while its set is non-empty; the last deregister removes the key.
//! - A handle appears at most once per event (identity comparison, `Arc::ptr_eq`).
//! - The map is never exposed; all access goes through the registry's methods.
//! - Dispatch walks a snapshot: a listener may mutate the registry mid-emit,
//!   and the mutation takes effect on the next emit.
//! - A failed call leaves the registry exactly as it found it.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::config::RegistryConfig;
use crate::error::RegistryError;
use crate::events;
use crate::listeners::ListenerRef;
use crate::policies::PanicPolicy;

/// Named-event listener registry with synchronous dispatch.
///
/// Each instance owns an independent event map; there is no ambient or
/// static state. The map is guarded by an `RwLock`, so all operations take
/// `&self` and the registry is freely shared across threads behind an `Arc`.
///
/// `T` is the payload type delivered to listeners. Callers with several
/// positional arguments use a tuple payload; every listener observes the
/// identical `&T` per `emit` call.
///
/// # Example
/// ```
/// use eventry::{ListenerFn, ListenerRef, Registry};
/// use std::sync::atomic::{AtomicI64, Ordering};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), eventry::RegistryError> {
/// let registry = Registry::new();
/// let seen = Arc::new(AtomicI64::new(0));
///
/// let sum: ListenerRef<(i64, i64)> = {
///     let seen = Arc::clone(&seen);
///     ListenerFn::arc("sum", move |&(a, b): &(i64, i64)| {
///         seen.store(a + b, Ordering::SeqCst);
///     })
/// };
///
/// registry.register("sum", sum.clone())?;
/// registry.emit("sum", &(2, 3))?;
/// assert_eq!(seen.load(Ordering::SeqCst), 5);
///
/// registry.deregister("sum", &sum)?;
/// assert!(!registry.has_event("sum")?);
/// # Ok(())
/// # }
/// ```
pub struct Registry<T> {
    listeners: RwLock<HashMap<String, Vec<ListenerRef<T>>>>,
    panic_policy: PanicPolicy,
}

impl<T: 'static> Registry<T> {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let map = match config.capacity_hint() {
            Some(n) => HashMap::with_capacity(n),
            None => HashMap::new(),
        };
        Self {
            listeners: RwLock::new(map),
            panic_policy: config.panic_policy,
        }
    }

    /// Registers `listener` under `event`.
    ///
    /// Creates the event's set if this is its first listener. Returns the
    /// registry for fluent chaining.
    ///
    /// # Errors
    /// - [`RegistryError::InvalidEvent`] if `event` is blank.
    /// - [`RegistryError::DuplicateListener`] if this handle (by identity)
    ///   is already registered under `event`.
    ///
    /// # Example
    /// ```
    /// use eventry::{ListenerFn, ListenerRef, Registry};
    ///
    /// let registry: Registry<u32> = Registry::new();
    /// let first: ListenerRef<u32> = ListenerFn::arc("first", |_: &u32| {});
    /// let second: ListenerRef<u32> = ListenerFn::arc("second", |_: &u32| {});
    ///
    /// registry
    ///     .register("tick", first)
    ///     .unwrap()
    ///     .register("tick", second)
    ///     .unwrap();
    /// assert_eq!(registry.listener_count("tick").unwrap(), 2);
    /// ```
    pub fn register(&self, event: &str, listener: ListenerRef<T>) -> Result<&Self, RegistryError> {
        events::validate(event)?;

        let mut map = self.listeners.write();
        match map.get_mut(event) {
            Some(handles) => {
                if handles.iter().any(|h| Arc::ptr_eq(h, &listener)) {
                    return Err(RegistryError::DuplicateListener {
                        event: event.to_string(),
                    });
                }
                handles.push(listener);
            }
            None => {
                map.insert(event.to_string(), vec![listener]);
            }
        }
        Ok(self)
    }

    /// Removes `listener` from `event`.
    ///
    /// Drops the event's set entirely when the last listener leaves, so an
    /// emptied event behaves exactly like one that was never registered.
    /// Returns the registry for fluent chaining.
    ///
    /// # Errors
    /// - [`RegistryError::InvalidEvent`] if `event` is blank.
    /// - [`RegistryError::UnknownEvent`] if `event` has no registrations.
    /// - [`RegistryError::UnknownListener`] if `event` exists but this
    ///   handle is not among its listeners.
    pub fn deregister(&self, event: &str, listener: &ListenerRef<T>) -> Result<&Self, RegistryError> {
        events::validate(event)?;

        let mut map = self.listeners.write();
        let handles = map.get_mut(event).ok_or_else(|| RegistryError::UnknownEvent {
            event: event.to_string(),
        })?;
        let pos = handles
            .iter()
            .position(|h| Arc::ptr_eq(h, listener))
            .ok_or_else(|| RegistryError::UnknownListener {
                event: event.to_string(),
            })?;

        handles.remove(pos);
        if handles.is_empty() {
            map.remove(event);
        }
        Ok(self)
    }

    /// Synchronously invokes every listener registered under `event`,
    /// passing each the same `payload` reference.
    ///
    /// Listeners run on the caller's thread, in registration order, exactly
    /// once per call. Dispatch walks a snapshot taken under the read lock,
    /// so listeners may register/deregister freely while running; such
    /// mutations take effect on the next emit.
    ///
    /// Return values of listeners are ignored (observer notification, not
    /// request/response); capture results via side effects.
    ///
    /// # Errors
    /// - [`RegistryError::InvalidEvent`] if `event` is blank.
    /// - [`RegistryError::UnknownEvent`] if no listeners are registered.
    ///
    /// # Panics
    /// If a listener panics, behavior follows the configured
    /// [`PanicPolicy`]: the panic either unwinds immediately (skipping the
    /// rest of the dispatch) or is re-raised after every remaining listener
    /// has run. Either way the registry itself stays consistent.
    pub fn emit(&self, event: &str, payload: &T) -> Result<(), RegistryError> {
        events::validate(event)?;

        let snapshot: Vec<ListenerRef<T>> = {
            let map = self.listeners.read();
            map.get(event)
                .ok_or_else(|| RegistryError::UnknownEvent {
                    event: event.to_string(),
                })?
                .clone()
        };

        match self.panic_policy {
            PanicPolicy::Propagate => {
                for listener in &snapshot {
                    listener.on_event(payload);
                }
            }
            PanicPolicy::Isolate => {
                let mut first: Option<Box<dyn Any + Send>> = None;
                for listener in &snapshot {
                    let call = catch_unwind(AssertUnwindSafe(|| listener.on_event(payload)));
                    if let Err(panic) = call {
                        if first.is_none() {
                            first = Some(panic);
                        } else {
                            eprintln!(
                                "[eventry] listener '{}' panicked during '{}'",
                                listener.name(),
                                event
                            );
                        }
                    }
                }
                if let Some(panic) = first {
                    resume_unwind(panic);
                }
            }
        }
        Ok(())
    }

    /// Returns whether any listener is currently registered under `event`.
    ///
    /// Always `false` for an event whose set was just emptied by
    /// deregistration.
    ///
    /// # Errors
    /// [`RegistryError::InvalidEvent`] if `event` is blank.
    pub fn has_event(&self, event: &str) -> Result<bool, RegistryError> {
        events::validate(event)?;
        Ok(self.listeners.read().contains_key(event))
    }

    /// Returns whether `listener` is registered under `event`.
    ///
    /// An absent event yields `false`, not an error.
    ///
    /// # Errors
    /// [`RegistryError::InvalidEvent`] if `event` is blank.
    pub fn has_listener(&self, event: &str, listener: &ListenerRef<T>) -> Result<bool, RegistryError> {
        events::validate(event)?;
        Ok(self
            .listeners
            .read()
            .get(event)
            .is_some_and(|handles| handles.iter().any(|h| Arc::ptr_eq(h, listener))))
    }

    /// Returns the number of listeners currently registered under `event`.
    ///
    /// An absent event yields `0`, not an error.
    ///
    /// # Errors
    /// [`RegistryError::InvalidEvent`] if `event` is blank.
    pub fn listener_count(&self, event: &str) -> Result<usize, RegistryError> {
        events::validate(event)?;
        Ok(self.listeners.read().get(event).map_or(0, Vec::len))
    }

    /// Returns the sorted list of event names with live registrations.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        let map = self.listeners.read();
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if no event has registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}

impl<T: 'static> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let map = self.listeners.read();
        let mut counts: Vec<(&String, usize)> =
            map.iter().map(|(event, handles)| (event, handles.len())).collect();
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        f.debug_struct("Registry")
            .field("panic_policy", &self.panic_policy)
            .field("events", &counts)
            .finish()
    }
}
