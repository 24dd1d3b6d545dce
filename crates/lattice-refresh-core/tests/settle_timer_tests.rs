//! Integration tests for properties, signals and timers working together.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use lattice_refresh_core::{Clock, ManualClock, Property, Signal, TimerId, TimerManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Busy,
    Done,
}

/// A tiny state holder that settles back to `Idle` after a delay.
struct Settler {
    clock: Arc<ManualClock>,
    phase: Property<Phase>,
    phase_changed: Signal<Phase>,
    timers: TimerManager,
    pending: Option<TimerId>,
}

impl Settler {
    fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            clock,
            phase: Property::new(Phase::Idle),
            phase_changed: Signal::new(),
            timers: TimerManager::new(),
            pending: None,
        }
    }

    fn set_phase(&self, phase: Phase) {
        if self.phase.set(phase) {
            self.phase_changed.emit(phase);
        }
    }

    fn finish(&mut self) {
        self.set_phase(Phase::Done);
        let id = self
            .timers
            .start_one_shot(self.clock.now(), Duration::from_millis(600));
        self.pending = Some(id);
    }

    fn interrupt(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.stop(id).unwrap();
        }
        self.set_phase(Phase::Busy);
    }

    fn poll(&mut self) {
        for id in self.timers.process_expired(self.clock.now()) {
            if self.pending == Some(id) {
                self.pending = None;
                self.set_phase(Phase::Idle);
            }
        }
    }
}

fn record(settler: &Settler) -> Arc<Mutex<Vec<Phase>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recv = seen.clone();
    settler.phase_changed.connect(move |p| recv.lock().push(*p));
    seen
}

#[test]
fn test_settles_after_delay() {
    let clock = Arc::new(ManualClock::new());
    let mut settler = Settler::new(clock.clone());
    let seen = record(&settler);

    settler.set_phase(Phase::Busy);
    settler.finish();
    clock.advance(Duration::from_millis(300));
    settler.poll();
    assert_eq!(settler.phase.get(), Phase::Done);

    clock.advance(Duration::from_millis(300));
    settler.poll();
    assert_eq!(settler.phase.get(), Phase::Idle);
    assert_eq!(*seen.lock(), vec![Phase::Busy, Phase::Done, Phase::Idle]);
}

#[test]
fn test_interrupt_cancels_pending_settle() {
    let clock = Arc::new(ManualClock::new());
    let mut settler = Settler::new(clock.clone());
    let seen = record(&settler);

    settler.finish();
    settler.interrupt();
    clock.advance(Duration::from_secs(2));
    settler.poll();

    assert_eq!(settler.phase.get(), Phase::Busy);
    assert_eq!(*seen.lock(), vec![Phase::Done, Phase::Busy]);
    assert_eq!(settler.timers.time_until_next(clock.now()), None);
}

#[test]
fn test_redundant_phase_is_not_emitted() {
    let clock = Arc::new(ManualClock::new());
    let settler = Settler::new(clock);
    let seen = record(&settler);

    settler.set_phase(Phase::Busy);
    settler.set_phase(Phase::Busy);
    settler.set_phase(Phase::Idle);

    assert_eq!(settler.phase.get(), Phase::Idle);
    assert_eq!(*seen.lock(), vec![Phase::Busy, Phase::Idle]);
}
