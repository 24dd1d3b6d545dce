//! Logging facilities for Lattice Refresh.
//!
//! Lattice Refresh uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_refresh=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! State transitions and trigger firings log at `debug`; ignored or no-op
//! calls log at `trace`; host misconfiguration logs at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "lattice_refresh_core";
    /// Timer system target.
    pub const TIMER: &str = "lattice_refresh_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_refresh_core::signal";
    /// List model target.
    pub const MODEL: &str = "lattice_refresh::model";
    /// Refresh adapter target (bind, flags, listener callbacks).
    pub const ADAPTER: &str = "lattice_refresh::adapter";
    /// Header state machine target.
    pub const HEADER: &str = "lattice_refresh::header";
    /// Gesture tracker target.
    pub const GESTURE: &str = "lattice_refresh::gesture";
}

/// Returns `true` if `target` belongs to one of the Lattice Refresh subsystems.
///
/// Useful in custom subscriber filters that only want this library's events.
pub fn is_lattice_target(target: &str) -> bool {
    target.starts_with(targets::CORE) || target.starts_with("lattice_refresh::")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_recognized() {
        for target in [
            targets::CORE,
            targets::TIMER,
            targets::SIGNAL,
            targets::MODEL,
            targets::ADAPTER,
            targets::HEADER,
            targets::GESTURE,
        ] {
            assert!(is_lattice_target(target), "{target}");
        }
        assert!(!is_lattice_target("hyper::client"));
    }
}
