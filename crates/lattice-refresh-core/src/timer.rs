//! One-shot timers and the clock they run on.
//!
//! There is no event loop in this crate. The owner of a [`TimerManager`] polls
//! it with the current time (usually once per frame) and reacts to the timers
//! that came due. Every timer is identified by a [`TimerId`] handle that can
//! be cancelled before it fires; cancelled or fired handles never fire again.
//!
//! Time comes from a [`Clock`]. Production code uses [`SystemClock`]; tests
//! drive a [`ManualClock`] forward explicitly.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// A source of monotonic time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Shared handle to a clock.
pub type SharedClock = Arc<dyn Clock>;

/// A clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock starting at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        *self.now.lock() += duration;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// A queue of pending one-shot timers.
#[derive(Debug, Default)]
pub struct TimerManager {
    /// Fire time of every pending timer. Removed on fire or cancel.
    timers: SlotMap<TimerId, Instant>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create an empty timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let fire_time = now + duration;
        let id = self.timers.insert(fire_time);
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(target: targets::TIMER, ?id, ?duration, "timer started");
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns an error if the timer already fired or was cancelled before.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: targets::TIMER, ?id, "timer cancelled");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the duration from `now` until the next timer fires, if any.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_cancelled();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Remove every timer due at or before `now` and return their IDs in
    /// fire-time order.
    #[tracing::instrument(skip(self), target = "lattice_refresh_core::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Cancelled timers leave a stale queue entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }

    fn discard_cancelled(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}
