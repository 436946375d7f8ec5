//! # Simple logging listener for debugging and demos.
//!
//! [`LogWriter`] prints every payload it receives to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [event] payload=(2, 3)
//! [event] payload="reload"
//! ```
//!
//! ## Example
//! ```no_run
//! # use eventry::{ListenerRef, LogWriter, Registry};
//! # use std::sync::Arc;
//! let registry: Registry<(i64, i64)> = Registry::new();
//! let log: ListenerRef<(i64, i64)> = Arc::new(LogWriter);
//! registry.register("sum", log).unwrap();
//! // every emit on "sum" is now echoed to stdout
//! ```

use std::fmt;

use crate::listeners::listener::Listener;

/// Simple stdout logging listener.
///
/// Enabled via the `logging` feature. Prints each dispatched payload via its
/// `Debug` representation, for debugging and demonstration purposes.
///
/// Not intended for production use — implement a custom [`Listener`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl<T: fmt::Debug> Listener<T> for LogWriter {
    fn on_event(&self, payload: &T) {
        println!("[event] payload={payload:?}");
    }

    fn name(&self) -> &str {
        "log_writer"
    }
}
