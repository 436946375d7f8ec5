//! # Example: basic_emit
//!
//! Demonstrates the core register → emit → deregister cycle.
//!
//! Shows how to:
//! - Build closure-backed listeners with [`ListenerFn`].
//! - Fan one payload out to several listeners with [`Registry::emit`].
//! - Remove a listener and observe that only the remaining one fires.
//!
//! ## Flow
//! ```text
//! Registry::new()
//!     ├─► register("add", print_sum)
//!     ├─► register("add", print_double)
//!     ├─► emit("add", &(2, 3))        → both listeners run
//!     ├─► deregister("add", print_sum)
//!     └─► emit("add", &(4, 1))        → only print_double runs
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_emit
//! ```

use eventry::{ListenerFn, ListenerRef, Registry, RegistryError};

fn main() -> Result<(), RegistryError> {
    let registry = Registry::new();

    let print_sum: ListenerRef<(i64, i64)> = ListenerFn::arc("print_sum", |&(a, b): &(i64, i64)| {
        println!("[sum]    {a} + {b} = {}", a + b);
    });
    let print_double: ListenerRef<(i64, i64)> =
        ListenerFn::arc("print_double", |&(a, _): &(i64, i64)| {
            println!("[double] {a} + {a} = {}", a + a);
        });

    registry
        .register("add", print_sum.clone())?
        .register("add", print_double.clone())?;

    println!("emit(add, (2, 3)) with both listeners:");
    registry.emit("add", &(2, 3))?;

    registry.deregister("add", &print_sum)?;

    println!("emit(add, (4, 1)) after removing print_sum:");
    registry.emit("add", &(4, 1))?;

    // Misuse is an error, never a silent no-op.
    let err = registry.emit("mul", &(1, 1)).unwrap_err();
    println!("emit(mul, ..) without listeners: {err} (label={})", err.as_label());

    Ok(())
}
