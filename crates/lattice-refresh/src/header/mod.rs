//! The pull-to-refresh header.
//!
//! [`HeaderStateMachine`] owns the header's visible height and
//! [`RefreshState`]. Presentation widgets connect to its signals and redraw
//! from [`RefreshState::status_text`] and
//! [`HeaderStateMachine::refresh_time_label`].

mod machine;
mod state;

pub use machine::{HeaderStateMachine, NEVER_REFRESHED_LABEL};
pub use state::RefreshState;
