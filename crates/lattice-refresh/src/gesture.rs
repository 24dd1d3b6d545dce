//! Pull gesture tracking.
//!
//! The [`GestureTracker`] turns raw vertical pointer positions into damped
//! header heights. It only acts while the header row is attached to the
//! layout (the list is scrolled to the top) and no refresh is in flight; the
//! owner decides the latter and reports the former through
//! [`GestureTracker::set_header_visible`].
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lattice_refresh::gesture::{DragEvent, GestureTracker};
//! use lattice_refresh::header::{HeaderStateMachine, RefreshState};
//! use lattice_refresh::{ManualClock, RefreshConfig};
//!
//! let mut header = HeaderStateMachine::new(RefreshConfig::default(), Arc::new(ManualClock::new()));
//! let mut tracker = GestureTracker::new(3.0);
//! tracker.set_header_visible(true);
//!
//! tracker.handle(DragEvent::started(0.0), &mut header);
//! tracker.handle(DragEvent::moved(330.0), &mut header);
//! assert_eq!(header.visible_height(), 110);
//! assert_eq!(header.state(), RefreshState::ReleaseToRefresh);
//! ```

use lattice_refresh_core::logging::targets;

use crate::header::HeaderStateMachine;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer went down.
    Started,
    /// The pointer moved.
    Moved,
    /// The pointer was lifted.
    Ended,
    /// The platform cancelled the pointer sequence.
    Cancelled,
}

/// A vertical pointer event, in raw screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Event phase.
    pub phase: TouchPhase,
    /// Raw vertical position.
    pub y: f32,
}

impl DragEvent {
    /// Creates a new drag event.
    pub fn new(phase: TouchPhase, y: f32) -> Self {
        Self { phase, y }
    }

    /// A pointer-down at `y`.
    pub fn started(y: f32) -> Self {
        Self::new(TouchPhase::Started, y)
    }

    /// A pointer move to `y`.
    pub fn moved(y: f32) -> Self {
        Self::new(TouchPhase::Moved, y)
    }

    /// A pointer-up at `y`.
    pub fn ended(y: f32) -> Self {
        Self::new(TouchPhase::Ended, y)
    }

    /// A cancelled sequence.
    pub fn cancelled() -> Self {
        Self::new(TouchPhase::Cancelled, 0.0)
    }
}

/// One press-move-release sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    last_y: f32,
    accumulated: f32,
}

impl DragSession {
    /// Opens a session at `y`.
    pub fn new(y: f32) -> Self {
        Self {
            last_y: y,
            accumulated: 0.0,
        }
    }

    /// Moves to `y` and returns the total distance since the session opened.
    pub fn move_to(&mut self, y: f32) -> f32 {
        self.accumulated += y - self.last_y;
        self.last_y = y;
        self.accumulated
    }

    /// Last observed position.
    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Raw distance accumulated so far. Negative when dragged upwards.
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }
}

/// What a drag event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureResponse {
    /// The event was consumed and must not scroll the list.
    pub handled: bool,
    /// The release started a refresh.
    pub refresh_triggered: bool,
}

/// Converts pointer movement into header height.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    damping: f32,
    session: Option<DragSession>,
    header_visible: bool,
}

impl GestureTracker {
    /// Create a tracker dividing raw distance by `damping`.
    pub fn new(damping: f32) -> Self {
        Self {
            damping,
            session: None,
            header_visible: false,
        }
    }

    /// The damping divisor.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether the header row is currently attached to the layout.
    #[inline]
    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }

    /// Record an attach (`true`) or detach (`false`) of the header row.
    pub fn set_header_visible(&mut self, visible: bool) {
        if self.header_visible != visible {
            tracing::trace!(target: targets::GESTURE, visible, "header visibility changed");
            self.header_visible = visible;
        }
    }

    /// Drop the open session without touching the header.
    pub fn reset_session(&mut self) {
        self.session = None;
    }

    /// Open a session at `y`.
    ///
    /// A pending settle of the header keeps running until the first move.
    pub fn on_drag_start(&mut self, y: f32) {
        self.session = Some(DragSession::new(y));
    }

    /// Follow the pointer to `y` and resize the header.
    ///
    /// A move without a preceding start opens the session at `y` instead.
    pub fn on_drag_move(&mut self, y: f32, header: &mut HeaderStateMachine) {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!(target: targets::GESTURE, y, "move without start, opening session");
            self.on_drag_start(y);
            return;
        };

        let accumulated = session.move_to(y);
        let distance = (accumulated / self.damping).trunc() as i32;
        header.on_move(distance);
    }

    /// Close the session. Returns `true` if the header entered `Refreshing`.
    pub fn on_drag_release(&mut self, header: &mut HeaderStateMachine) -> bool {
        self.session = None;
        let triggered = header.on_release();
        if triggered {
            tracing::debug!(target: targets::GESTURE, "pull released past threshold");
        }
        triggered
    }

    /// Abandon the session and collapse the header.
    pub fn on_drag_cancel(&mut self, header: &mut HeaderStateMachine) {
        self.session = None;
        header.collapse();
    }

    /// Dispatch `event` by phase.
    ///
    /// The caller gates on the refreshing flag; header visibility is checked
    /// here. A gated-off event closes any open session and collapses the
    /// header it was pulling.
    #[tracing::instrument(skip(self, header), target = "lattice_refresh::gesture", level = "trace")]
    pub fn handle(&mut self, event: DragEvent, header: &mut HeaderStateMachine) -> GestureResponse {
        if !self.header_visible {
            if self.session.take().is_some() {
                tracing::trace!(target: targets::GESTURE, "header detached mid-drag, collapsing");
                header.collapse();
            }
            return GestureResponse::default();
        }

        let mut refresh_triggered = false;
        match event.phase {
            TouchPhase::Started => self.on_drag_start(event.y),
            TouchPhase::Moved => self.on_drag_move(event.y, header),
            TouchPhase::Ended => refresh_triggered = self.on_drag_release(header),
            TouchPhase::Cancelled => self.on_drag_cancel(header),
        }

        GestureResponse {
            handled: header.is_expanded(),
            refresh_triggered,
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DAMPING_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RefreshConfig;
    use crate::header::RefreshState;
    use lattice_refresh_core::ManualClock;
    use std::sync::Arc;
    use std::time::Duration;

    fn setup() -> (GestureTracker, HeaderStateMachine, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let header = HeaderStateMachine::new(RefreshConfig::default(), clock.clone());
        let mut tracker = GestureTracker::default();
        tracker.set_header_visible(true);
        (tracker, header, clock)
    }

    #[test]
    fn test_session_accumulates() {
        let mut session = DragSession::new(10.0);
        assert_eq!(session.move_to(40.0), 30.0);
        assert_eq!(session.move_to(25.0), 15.0);
        assert_eq!(session.last_y(), 25.0);
        assert_eq!(session.accumulated(), 15.0);
    }

    #[test]
    fn test_damped_height() {
        let (mut tracker, mut header, _) = setup();
        tracker.handle(DragEvent::started(100.0), &mut header);
        let response = tracker.handle(DragEvent::moved(160.0), &mut header);
        assert_eq!(header.visible_height(), 20);
        assert!(response.handled);

        tracker.handle(DragEvent::moved(164.0), &mut header);
        assert_eq!(header.visible_height(), 21);
    }

    #[test]
    fn test_upward_drag_passes_through() {
        let (mut tracker, mut header, _) = setup();
        tracker.handle(DragEvent::started(300.0), &mut header);
        let response = tracker.handle(DragEvent::moved(200.0), &mut header);
        assert_eq!(header.visible_height(), 1);
        assert!(!response.handled);
    }

    #[test]
    fn test_release_past_threshold() {
        let (mut tracker, mut header, _) = setup();
        tracker.handle(DragEvent::started(0.0), &mut header);
        tracker.handle(DragEvent::moved(303.0), &mut header);
        assert_eq!(header.state(), RefreshState::ReleaseToRefresh);

        let response = tracker.handle(DragEvent::ended(303.0), &mut header);
        assert!(response.refresh_triggered);
        assert!(response.handled);
        assert_eq!(header.state(), RefreshState::Refreshing);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_cancel_always_collapses() {
        let (mut tracker, mut header, clock) = setup();
        tracker.handle(DragEvent::started(0.0), &mut header);
        tracker.handle(DragEvent::moved(600.0), &mut header);
        let response = tracker.handle(DragEvent::cancelled(), &mut header);
        assert!(!response.refresh_triggered);
        assert_eq!(header.state(), RefreshState::Normal);

        clock.advance(Duration::from_millis(300));
        header.tick();
        assert_eq!(header.visible_height(), 1);
    }

    #[test]
    fn test_hidden_header_ignores_input() {
        let (mut tracker, mut header, _) = setup();
        tracker.handle(DragEvent::started(0.0), &mut header);
        tracker.set_header_visible(false);

        let response = tracker.handle(DragEvent::moved(400.0), &mut header);
        assert_eq!(response, GestureResponse::default());
        assert_eq!(header.visible_height(), 1);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_detach_mid_drag_collapses_header() {
        let (mut tracker, mut header, clock) = setup();
        tracker.handle(DragEvent::started(0.0), &mut header);
        tracker.handle(DragEvent::moved(450.0), &mut header);
        assert_eq!(header.state(), RefreshState::ReleaseToRefresh);

        tracker.set_header_visible(false);
        tracker.handle(DragEvent::moved(460.0), &mut header);
        assert!(tracker.session().is_none());
        assert_eq!(header.state(), RefreshState::Normal);

        clock.advance(Duration::from_millis(300));
        header.tick();
        assert_eq!(header.visible_height(), 1);
    }

    #[test]
    fn test_touch_down_keeps_completed_settle() {
        let (mut tracker, mut header, clock) = setup();
        header.begin_refresh();
        clock.advance(Duration::from_millis(500));
        header.tick();
        header.refresh_completed();

        tracker.handle(DragEvent::started(200.0), &mut header);
        assert!(header.has_pending_settle());
        assert_eq!(header.state(), RefreshState::Completed);

        clock.advance(Duration::from_millis(600));
        header.tick();
        assert_eq!(header.state(), RefreshState::Normal);
        assert_eq!(header.visible_height(), 1);
    }

    #[test]
    fn test_move_cancels_completed_settle() {
        let (mut tracker, mut header, clock) = setup();
        header.begin_refresh();
        clock.advance(Duration::from_millis(500));
        header.tick();
        header.refresh_completed();

        tracker.handle(DragEvent::started(0.0), &mut header);
        tracker.handle(DragEvent::moved(90.0), &mut header);
        assert!(!header.has_pending_settle());
        assert_eq!(header.state(), RefreshState::Normal);
        assert_eq!(header.visible_height(), 30);
    }

    #[test]
    fn test_move_without_start_opens_session() {
        let (mut tracker, mut header, _) = setup();
        tracker.handle(DragEvent::moved(50.0), &mut header);
        assert_eq!(header.visible_height(), 1);
        assert_eq!(tracker.session().map(DragSession::last_y), Some(50.0));

        tracker.handle(DragEvent::moved(110.0), &mut header);
        assert_eq!(header.visible_height(), 20);
    }
}
