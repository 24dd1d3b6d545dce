//! Core systems for Lattice Refresh.
//!
//! This crate provides the foundational pieces the refresh controller is
//! built from:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Values with change detection
//! - **Timers**: Cancellable one-shot timers polled against a [`Clock`]
//! - **Logging**: `tracing` targets for every subsystem
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use lattice_refresh_core::{Clock, ManualClock, Signal, TimerManager};
//!
//! let clock = ManualClock::new();
//! let mut timers = TimerManager::new();
//! let settled = Signal::<()>::new();
//! settled.connect(|_| println!("settled"));
//!
//! let id = timers.start_one_shot(clock.now(), Duration::from_millis(600));
//! clock.advance(Duration::from_millis(600));
//!
//! for fired in timers.process_expired(clock.now()) {
//!     assert_eq!(fired, id);
//!     settled.emit(());
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SharedClock, SystemClock, TimerId, TimerManager};
