//! Logging facilities for Lumen Vitrine.
//!
//! Lumen Vitrine is instrumented with the `tracing` crate. Timer fires and
//! signal emissions log at `trace`; widget-level state changes (viewport
//! class changes, rotation steps, carousel navigation) log at `debug`. To
//! see logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! # Filtering
//!
//! Use the constants in [`targets`] with `tracing` filter directives to
//! narrow output to a single subsystem, e.g.
//! `RUST_LOG=lumen_vitrine_core::timer=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lumen_vitrine_core";
    /// Timer system target.
    pub const TIMER: &str = "lumen_vitrine_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lumen_vitrine_core::signal";
    /// Debouncer target.
    pub const DEBOUNCE: &str = "lumen_vitrine_core::debounce";
}
