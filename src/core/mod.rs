//! Registry core: the guarded event map and its configuration.
//!
//! This module contains the embedded implementation of the listener
//! registry. The public API from this module is [`Registry`], the owner of
//! the event→listener mapping, and [`RegistryConfig`], its construction-time
//! settings.
//!
//! Internal modules:
//! - [`registry`]: the guarded map, registration/removal invariants, and
//!   synchronous dispatch;
//! - [`config`]: capacity and dispatch-policy settings.

mod config;
mod registry;

pub use config::RegistryConfig;
pub use registry::Registry;
