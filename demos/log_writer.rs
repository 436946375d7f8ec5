//! # Example: log_writer
//!
//! Demonstrates the built-in [`LogWriter`] listener from the `logging`
//! feature: a ready-made listener that echoes every dispatched payload to
//! stdout alongside your own listeners.
//!
//! ## Run
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use std::sync::Arc;

use eventry::{ListenerFn, ListenerRef, LogWriter, Registry, RegistryError};

fn main() -> Result<(), RegistryError> {
    let registry: Registry<(u32, &str)> = Registry::new();

    let log: ListenerRef<(u32, &str)> = Arc::new(LogWriter);
    let alert: ListenerRef<(u32, &str)> =
        ListenerFn::arc("alert", |&(code, msg): &(u32, &str)| {
            if code >= 500 {
                println!("[alert] code={code} msg={msg}");
            }
        });

    registry
        .register("http.response", log)?
        .register("http.response", alert)?;

    registry.emit("http.response", &(200, "ok"))?;
    registry.emit("http.response", &(502, "bad gateway"))?;

    Ok(())
}
