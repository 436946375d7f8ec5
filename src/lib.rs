//! # eventry
//!
//! **Eventry** is a minimal synchronous publish/subscribe registry for Rust.
//!
//! Callers register named-event listeners, emit payloads synchronously to
//! every registered listener, and deregister listeners. The crate is a pure
//! in-memory library: no async delivery, no event queueing, no wildcard
//! matching, no priority ordering — a single-process observer pattern with a
//! precise misuse contract.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  ListenerFn  │   │  ListenerFn  │   │ custom impl  │
//!     │ ("metrics")  │   │  ("audit")   │   │ (Listener<T>)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ register(event, handle)             │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Registry<T>                                              │
//! │  - RwLock<HashMap<event, Vec<ListenerRef<T>>>>            │
//! │  - handle identity via Arc::ptr_eq (no value equality)    │
//! │  - key exists only while its listener set is non-empty    │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │ emit(event, &payload)
//!                            ▼
//!              snapshot of the event's set
//!                            │
//!              ┌─────────────┼─────────────┐
//!              ▼             ▼             ▼
//!        on_event(&p)  on_event(&p)  on_event(&p)
//!        (synchronous, caller's thread, each handle once)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Registry::new() ──► register(event, handle)  ──► set created on demand
//!                 ──► emit(event, &payload)    ──► every handle, exactly once
//!                 ──► deregister(event, handle)──► last handle drops the key
//!
//! errors (all synchronous, fail-fast, no partial application):
//!   ├─ InvalidEvent       blank event name
//!   ├─ DuplicateListener  same handle registered twice under one event
//!   ├─ UnknownEvent       emit/deregister on an event with no registrations
//!   └─ UnknownListener    deregister of a handle the event does not hold
//! ```
//!
//! ## Features
//! | Area            | Description                                                   | Key types / traits                   |
//! |-----------------|---------------------------------------------------------------|--------------------------------------|
//! | **Registry**    | Guarded event→listener map with synchronous dispatch.         | [`Registry`]                         |
//! | **Listeners**   | Payload handlers, registered and removed by identity.         | [`Listener`], [`ListenerRef`], [`ListenerFn`] |
//! | **Errors**      | Typed misuse errors, one variant per contract violation.      | [`RegistryError`]                    |
//! | **Policies**    | Dispatch behavior when a listener panics.                     | [`PanicPolicy`]                      |
//! | **Configuration** | Construction-time capacity and policy settings.             | [`RegistryConfig`]                   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use std::sync::Arc;
//! use eventry::{ListenerFn, ListenerRef, Registry, RegistryError};
//!
//! fn main() -> Result<(), RegistryError> {
//!     let registry = Registry::new();
//!     let seen = Arc::new(AtomicI64::new(0));
//!
//!     // A listener is an Arc'd handle; keep it around to deregister later.
//!     let sum: ListenerRef<(i64, i64)> = {
//!         let seen = Arc::clone(&seen);
//!         ListenerFn::arc("sum", move |&(a, b): &(i64, i64)| {
//!             seen.store(a + b, Ordering::SeqCst);
//!         })
//!     };
//!
//!     registry.register("sum", sum.clone())?;
//!     registry.emit("sum", &(2, 3))?;
//!     assert_eq!(seen.load(Ordering::SeqCst), 5);
//!
//!     registry.deregister("sum", &sum)?;
//!     assert!(!registry.has_event("sum")?);
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use core::{Registry, RegistryConfig};
pub use error::RegistryError;
pub use events::is_valid_name;
pub use listeners::{Listener, ListenerFn, ListenerRef};
pub use policies::PanicPolicy;

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
