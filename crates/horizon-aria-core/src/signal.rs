//! Typed notifications with multiple listeners.
//!
//! Every stateful component in Horizon Aria reports changes through a
//! [`Signal`]: the selection manager emits `focus_changed`, the color wheel
//! emits `value_changed` and `value_change_ended`, a live region emits
//! `announced`. Listeners are closures registered with [`Signal::connect`].
//!
//! A listener runs either inside `emit()` ([`ConnectionType::Direct`]) or
//! later, when the owner drains the deferred queue with
//! [`run_deferred`](crate::run_deferred) ([`ConnectionType::Queued`]). Queued
//! listeners see the arguments as they were at emission time.
//!
//! ```
//! use horizon_aria_core::{ConnectionType, Signal, run_deferred};
//!
//! let hue_changed = Signal::<f64>::new();
//! hue_changed.connect(|hue| println!("now {hue}°"));
//! let announce = hue_changed.connect_with_type(|hue| println!("say {hue}°"), ConnectionType::Queued);
//!
//! hue_changed.emit(90.0);
//! run_deferred();
//! assert!(hue_changed.disconnect(announce));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;
use crate::task::post_deferred;

new_key_type! {
    /// Handle for one listener, accepted by [`Signal::disconnect`].
    pub struct ConnectionId;
}

/// When a listener runs relative to `emit()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionType {
    /// Inside the emitting call.
    #[default]
    Direct,

    /// On the next drain of the deferred task queue.
    Queued,
}

type Listener<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    listener: Listener<Args>,
    connection_type: ConnectionType,
}

/// A notification carrying `Args` to every connected listener.
///
/// Use `()` for signals without a payload.
///
/// Listeners are called from a snapshot taken after the internal lock is
/// released, so a listener may connect, disconnect or emit on the same signal.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    blocked: AtomicBool,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Register a [`ConnectionType::Direct`] listener.
    pub fn connect<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connect_with_type(listener, ConnectionType::Direct)
    }

    pub fn connect_with_type<F>(&self, listener: F, connection_type: ConnectionType) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connections.lock().insert(Connection {
            listener: Arc::new(listener),
            connection_type,
        });
        tracing::trace!(target: targets::SIGNAL, ?connection_type, "listener connected");
        id
    }

    /// Remove one listener. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppress all emissions until unblocked.
    ///
    /// Controlled components block while applying a value supplied by their
    /// owner so it is not echoed back.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    fn listeners(&self) -> Vec<(Listener<Args>, ConnectionType)> {
        self.connections
            .lock()
            .values()
            .map(|conn| (Arc::clone(&conn.listener), conn.connection_type))
            .collect()
    }

    fn defer(listener: Listener<Args>, args: &Args) {
        let args = args.clone();
        post_deferred(move || listener(&args));
    }

    /// Notify every listener in connection order.
    ///
    /// Direct listeners have all run when this returns; queued ones have been
    /// posted to the deferred queue.
    #[tracing::instrument(skip_all, target = "horizon_aria_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "blocked, emission dropped");
            return;
        }

        let listeners = self.listeners();
        tracing::trace!(target: targets::SIGNAL, listeners = listeners.len(), "emitting");

        for (listener, connection_type) in listeners {
            match connection_type {
                ConnectionType::Direct => listener(&args),
                ConnectionType::Queued => Self::defer(listener, &args),
            }
        }
    }

    /// Post every listener to the deferred queue, whatever its connection type.
    ///
    /// Returns how many were posted; a blocked signal posts none.
    pub fn emit_queued(&self, args: Args) -> usize {
        if self.is_blocked() {
            return 0;
        }

        let listeners = self.listeners();
        let posted = listeners.len();
        for (listener, _) in listeners {
            Self::defer(listener, &args);
        }
        posted
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
