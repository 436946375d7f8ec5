//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(&T)`, turning any plain function or
//! capturing closure into a [`Listener`]. Shared state lives inside the
//! closure; use `Arc<...>` explicitly when several listeners need to observe
//! the same accumulator.
//!
//! ## Example
//! ```rust
//! use eventry::{ListenerFn, ListenerRef};
//!
//! let double: ListenerRef<i64> = ListenerFn::arc("double", |n: &i64| {
//!     let _ = n * 2;
//! });
//!
//! assert_eq!(double.name(), "double");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::listeners::listener::Listener;

/// Function-backed listener implementation.
///
/// Wraps a closure invoked once per matching emit.
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a
    /// [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use eventry::{ListenerFn, ListenerRef};
    ///
    /// let hello: ListenerRef<()> = ListenerFn::arc("hello", |_: &()| {
    ///     println!("hello");
    /// });
    /// assert_eq!(hello.name(), "hello");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<T, F> Listener<T> for ListenerFn<F>
where
    F: Fn(&T) + Send + Sync + 'static, // Fn, not FnMut
{
    fn on_event(&self, payload: &T) {
        (self.f)(payload);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// The closure itself is opaque; show the name only.
impl<F> fmt::Debug for ListenerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerFn").field("name", &self.name).finish()
    }
}
