//! # Listeners: payload handlers registered against named events.
//!
//! This module provides the [`Listener`] trait, the shared handle type
//! [`ListenerRef`], and a closure-backed implementation [`ListenerFn`].
//!
//! ## Architecture
//! ```text
//! Payload flow:
//!   caller ── emit(event, &payload) ──► Registry ──► snapshot of the event's set
//!                                                        │
//!                                                        ├──► Listener::on_event(&payload)
//!                                                        │         │
//!                                                        │    ┌────┴─────┬─────────┐
//!                                                        │    ▼          ▼         ▼
//!                                                        │  ListenerFn  LogWriter  custom impls
//!                                                        └──► ... every handle, exactly once
//! ```
//!
//! ## Rules
//! - Handlers run synchronously on the emitter's thread, in registration order.
//! - The registry tracks handles by identity ([`ListenerRef`] clones are one
//!   listener; separate allocations are distinct listeners).
//! - Return values are ignored; capture results via side effects.

mod listener;
mod listener_fn;

#[cfg(feature = "logging")]
mod log;

pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
