//! Core systems for Horizon Aria.
//!
//! This crate provides the reactive foundation the accessibility layer is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Reactive values with change detection
//! - **Deferred Tasks**: A per-thread queue for work that must run after the
//!   current event handler (e.g. live announcements)
//! - **Logging**: `tracing` targets and spans shared by every crate
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_aria_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Deferred Example
//!
//! ```
//! use horizon_aria_core::{ConnectionType, Signal, run_deferred};
//!
//! let announce = Signal::<String>::new();
//! announce.connect_with_type(|msg| println!("{msg}"), ConnectionType::Queued);
//!
//! announce.emit("Fruits, section, 3 rows".into()); // nothing printed yet
//! run_deferred(); // prints now
//! ```

pub mod logging;
pub mod property;
pub mod signal;
pub mod task;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, ConnectionType, Signal};
pub use task::{TaskId, TaskQueue, cancel_deferred, has_deferred, post_deferred, run_deferred};
