//! # Example: custom_listener
//!
//! Demonstrates how to implement the [`Listener`] trait on your own type.
//!
//! Shows how to:
//! - Keep state inside a listener (an atomic counter).
//! - Register one handle under several events.
//! - Look up registrations with [`Registry::has_listener`] and
//!   [`Registry::listener_count`].
//!
//! ## Run
//! ```bash
//! cargo run --example custom_listener
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eventry::{Listener, ListenerRef, Registry, RegistryError};

/// Counts deployments per payload; in real life you could export metrics,
/// ship logs, or trigger alerts.
struct DeployCounter {
    started: AtomicUsize,
}

impl Listener<String> for DeployCounter {
    fn on_event(&self, service: &String) {
        let n = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        println!("[deploy] service={service} total={n}");
    }

    fn name(&self) -> &str {
        "deploy_counter"
    }
}

fn main() -> Result<(), RegistryError> {
    let registry: Registry<String> = Registry::new();

    let counter = Arc::new(DeployCounter {
        started: AtomicUsize::new(0),
    });
    let handle: ListenerRef<String> = counter.clone();

    // One handle may serve several events; identity is per (event, handle).
    registry
        .register("deploy.started", handle.clone())?
        .register("deploy.retried", handle.clone())?;

    registry.emit("deploy.started", &"api".to_string())?;
    registry.emit("deploy.retried", &"api".to_string())?;
    registry.emit("deploy.started", &"worker".to_string())?;

    println!(
        "registered under {:?}, deploy.started holds {} listener(s)",
        registry.events(),
        registry.listener_count("deploy.started")?,
    );
    assert!(registry.has_listener("deploy.retried", &handle)?);
    assert_eq!(counter.started.load(Ordering::SeqCst), 3);

    Ok(())
}
