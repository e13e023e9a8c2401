//! Logging facilities for Horizon Aria.
//!
//! Horizon Aria uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_aria=debug")
//!     .init();
//! ```
//!
//! Every subsystem logs to one of the stable [`targets`], so announcement
//! decisions can be inspected without the noise of per-pointer traces:
//!
//! ```text
//! RUST_LOG=horizon_aria::announce=debug,horizon_aria::gesture=off
//! ```

/// Span names used throughout Horizon Aria for tracing.
pub mod span_names {
    /// Section announcement evaluation span.
    pub const SECTION_ANNOUNCEMENT: &str = "horizon_aria::section_announcement";
    /// Color wheel gesture span.
    pub const WHEEL_GESTURE: &str = "horizon_aria::wheel_gesture";
    /// Message formatting span.
    pub const FORMAT_MESSAGE: &str = "horizon_aria::format_message";
}

/// Target names for log filtering.
pub mod targets {
    /// Live announcements and the section announcer.
    pub const ANNOUNCE: &str = "horizon_aria::announce";
    /// Collection traversal and mutation.
    pub const COLLECTION: &str = "horizon_aria::collection";
    /// Color parsing and conversion.
    pub const COLOR: &str = "horizon_aria::color";
    /// Pointer, touch and keyboard gesture handling.
    pub const GESTURE: &str = "horizon_aria::gesture";
    /// Locale detection and message formatting.
    pub const I18N: &str = "horizon_aria::i18n";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_aria::config";
    /// Signal/slot system.
    pub const SIGNAL: &str = "horizon_aria_core::signal";
    /// Deferred task queue.
    pub const TASK: &str = "horizon_aria_core::task";
}

/// A guard that tracks the duration of an operation as a tracing span.
///
/// The span stays entered until the guard is dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_aria::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
