//! The header's state machine and animated height.

use std::time::Duration;

use chrono::{DateTime, Local};

use lattice_refresh_core::logging::targets;
use lattice_refresh_core::{Property, SharedClock, Signal, TimerId, TimerManager};

use super::state::RefreshState;
use crate::animation::HeightAnimation;
use crate::config::RefreshConfig;

/// Placeholder shown by [`HeaderStateMachine::refresh_time_label`] before the
/// first completed refresh.
pub const NEVER_REFRESHED_LABEL: &str = "Last updated: never";

/// Drives the pull-to-refresh header.
///
/// The machine owns the header's visible height and refresh state. Heights
/// are clamped to the collapsed height, so a collapsed header keeps a
/// non-zero footprint in the layout. Animated heights and the delayed return
/// to [`RefreshState::Normal`] advance only when [`tick`](Self::tick) is
/// called.
///
/// # Signals
///
/// - `state_changed(RefreshState)`: emitted on every real state transition
/// - `visible_height_changed(u32)`: emitted whenever the height changes
pub struct HeaderStateMachine {
    config: RefreshConfig,
    clock: SharedClock,
    state: Property<RefreshState>,
    visible_height: Property<u32>,
    animation: Option<HeightAnimation>,
    timers: TimerManager,
    settle_timer: Option<TimerId>,
    last_refreshed: Option<DateTime<Local>>,

    /// Emitted when the refresh state changes.
    pub state_changed: Signal<RefreshState>,
    /// Emitted when the visible height changes.
    pub visible_height_changed: Signal<u32>,
}

impl HeaderStateMachine {
    /// Create a collapsed header in the `Normal` state.
    pub fn new(config: RefreshConfig, clock: SharedClock) -> Self {
        let collapsed = config.collapsed_height.max(1);
        Self {
            config,
            clock,
            state: Property::new(RefreshState::Normal),
            visible_height: Property::new(collapsed),
            animation: None,
            timers: TimerManager::new(),
            settle_timer: None,
            last_refreshed: None,
            state_changed: Signal::new(),
            visible_height_changed: Signal::new(),
        }
    }

    /// The configuration, including presentation timings such as the
    /// indicator rotation.
    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// The current refresh state.
    #[inline]
    pub fn state(&self) -> RefreshState {
        self.state.get()
    }

    /// The current visible height.
    #[inline]
    pub fn visible_height(&self) -> u32 {
        self.visible_height.get()
    }

    /// The resting height of a collapsed header.
    #[inline]
    pub fn collapsed_height(&self) -> u32 {
        self.config.collapsed_height.max(1)
    }

    /// Height past which a release triggers a refresh.
    #[inline]
    pub fn activation_threshold(&self) -> u32 {
        self.config.activation_threshold
    }

    /// Whether the visible height is strictly past the activation threshold.
    #[inline]
    pub fn exceeds_threshold(&self) -> bool {
        self.visible_height() > self.activation_threshold()
    }

    /// Whether the header is taller than its collapsed height.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.visible_height() > self.collapsed_height()
    }

    /// Whether a height animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether a delayed return to `Normal` is scheduled.
    pub fn has_pending_settle(&self) -> bool {
        self.settle_timer.is_some_and(|id| self.timers.is_active(id))
    }

    /// When the last refresh completed, if ever.
    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    /// The "last updated" line shown under the status text.
    pub fn refresh_time_label(&self) -> String {
        match self.last_refreshed {
            Some(at) => format!("Last updated: {}", at.format("%-H:%M")),
            None => NEVER_REFRESHED_LABEL.to_string(),
        }
    }

    /// Set the visible height directly, stopping any running animation.
    ///
    /// Values below the collapsed height are raised to it.
    pub fn set_visible_height(&mut self, height: u32) {
        self.animation = None;
        self.apply_height(height);
    }

    /// Follow a drag: `distance` is the damped pull distance, which may be
    /// negative when the finger moves back past its starting point.
    ///
    /// Ignored while refreshing.
    #[tracing::instrument(skip(self), target = "lattice_refresh::header", level = "trace")]
    pub fn on_move(&mut self, distance: i32) {
        if self.state() == RefreshState::Refreshing {
            tracing::trace!(target: targets::HEADER, "move ignored while refreshing");
            return;
        }

        self.cancel_pending_settle();
        self.set_visible_height(u32::try_from(distance).unwrap_or(0));

        if self.exceeds_threshold() {
            self.set_state(RefreshState::ReleaseToRefresh);
        } else {
            self.set_state(RefreshState::Normal);
        }
    }

    /// Finish a drag.
    ///
    /// Returns `true` when the header was pulled past the threshold: the
    /// machine is then `Refreshing` and settles at the threshold height.
    /// Otherwise the header collapses and `false` is returned.
    pub fn on_release(&mut self) -> bool {
        if self.state() == RefreshState::Refreshing {
            tracing::trace!(target: targets::HEADER, "release ignored while refreshing");
            return false;
        }

        if self.exceeds_threshold() {
            self.set_state(RefreshState::Refreshing);
            let settle = self.config.release_settle();
            self.animate_to(self.activation_threshold(), settle);
            true
        } else {
            self.collapse();
            false
        }
    }

    /// Collapse after an aborted pull and return to `Normal`.
    ///
    /// Does nothing while refreshing. A `Completed` header whose settle is
    /// still pending keeps its state until the settle fires.
    pub fn collapse(&mut self) {
        let state = self.state();
        if state == RefreshState::Refreshing {
            tracing::trace!(target: targets::HEADER, "collapse ignored while refreshing");
            return;
        }

        let settle = self.config.release_settle();
        self.animate_to(self.collapsed_height(), settle);
        if !(state == RefreshState::Completed && self.has_pending_settle()) {
            self.set_state(RefreshState::Normal);
        }
    }

    /// Enter `Refreshing` without a drag, expanding the header to the
    /// threshold height.
    ///
    /// Returns `false` if already refreshing.
    pub fn begin_refresh(&mut self) -> bool {
        if self.state() == RefreshState::Refreshing {
            tracing::trace!(target: targets::HEADER, "already refreshing");
            return false;
        }

        self.cancel_pending_settle();
        let expand = self.config.programmatic_expand();
        self.animate_to(self.activation_threshold(), expand);
        self.set_state(RefreshState::Refreshing);
        true
    }

    /// Mark the in-flight refresh as finished.
    ///
    /// Records the completion time, collapses the header and schedules the
    /// return to `Normal` after the settle delay. Returns `false` if no
    /// refresh was in flight.
    pub fn refresh_completed(&mut self) -> bool {
        if self.state() != RefreshState::Refreshing {
            tracing::trace!(
                target: targets::HEADER,
                state = ?self.state(),
                "completion ignored outside of refreshing"
            );
            return false;
        }

        self.last_refreshed = Some(Local::now());
        self.set_state(RefreshState::Completed);
        self.settle();
        true
    }

    /// Collapse the header and return to `Normal` after the settle delay.
    pub fn reset(&mut self) {
        self.settle();
    }

    /// Return to `Normal` immediately and collapse the header.
    pub fn abort(&mut self) {
        self.cancel_pending_settle();
        self.set_state(RefreshState::Normal);
        let settle = self.config.release_settle();
        self.animate_to(self.collapsed_height(), settle);
    }

    /// Cancel a scheduled return to `Normal`.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel_pending_settle(&mut self) -> bool {
        let Some(id) = self.settle_timer.take() else {
            return false;
        };
        if self.timers.stop(id).is_ok() {
            tracing::trace!(target: targets::HEADER, "pending settle cancelled");
        }
        true
    }

    /// Advance the height animation and fire due timers.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        if let Some(sample) = self.animation.as_ref().map(|anim| anim.sample(now)) {
            if sample.finished {
                self.animation = None;
            }
            self.apply_height(sample.height);
        }

        for id in self.timers.process_expired(now) {
            if self.settle_timer == Some(id) {
                self.settle_timer = None;
                self.set_state(RefreshState::Normal);
            }
        }
    }

    /// Time until the next scheduled event, for hosts that sleep between
    /// frames. `Some(ZERO)` while an animation is running.
    pub fn time_until_next_tick(&mut self) -> Option<Duration> {
        if self.animation.is_some() {
            return Some(Duration::ZERO);
        }
        self.timers.time_until_next(self.clock.now())
    }

    fn settle(&mut self) {
        let settle = self.config.release_settle();
        self.animate_to(self.collapsed_height(), settle);

        self.cancel_pending_settle();
        let now = self.clock.now();
        let delay = self.config.completion_settle_delay();
        self.settle_timer = Some(self.timers.start_one_shot(now, delay));
    }

    fn animate_to(&mut self, target: u32, duration: Duration) {
        let target = target.max(self.collapsed_height());
        let from = self.visible_height();
        if target == from {
            self.animation = None;
            return;
        }

        let now = self.clock.now();
        self.animation = Some(HeightAnimation::new(
            from,
            target,
            duration,
            self.config.easing,
            now,
        ));
        tracing::trace!(
            target: targets::HEADER,
            from,
            to = target,
            ?duration,
            "height animation started"
        );
    }

    fn apply_height(&mut self, height: u32) {
        let height = height.max(self.collapsed_height());
        if self.visible_height.set(height) {
            self.visible_height_changed.emit(height);
        }
    }

    fn set_state(&mut self, state: RefreshState) {
        if let Some(previous) = self.state.replace(state) {
            tracing::debug!(target: targets::HEADER, from = ?previous, to = ?state, "state changed");
            self.state_changed.emit(state);
        }
    }
}

impl std::fmt::Debug for HeaderStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderStateMachine")
            .field("state", &self.state())
            .field("visible_height", &self.visible_height())
            .field("animating", &self.animation.is_some())
            .field("settle_pending", &self.settle_timer.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(HeaderStateMachine: Send, Sync);
