//! Pull-to-refresh header states.

/// The header's refresh state.
///
/// The normal cycle is `Normal -> ReleaseToRefresh -> Refreshing -> Completed
/// -> Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    /// Idle, or pulled less than the activation threshold.
    #[default]
    Normal,
    /// Pulled past the threshold; releasing now starts a refresh.
    ReleaseToRefresh,
    /// A refresh is in flight.
    Refreshing,
    /// The refresh finished; the header is settling back.
    Completed,
}

impl RefreshState {
    /// Status line shown by the header for this state.
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Normal => "Pull to refresh",
            Self::ReleaseToRefresh => "Release to refresh",
            Self::Refreshing => "Refreshing…",
            Self::Completed => "Refresh complete",
        }
    }

    /// Whether the pull indicator (arrow) is shown. It is swapped for a
    /// progress spinner while refreshing and hidden once complete.
    pub fn shows_indicator(self) -> bool {
        matches!(self, Self::Normal | Self::ReleaseToRefresh)
    }

    /// Whether the progress spinner is shown.
    pub fn shows_progress(self) -> bool {
        matches!(self, Self::Refreshing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_hints() {
        assert_eq!(RefreshState::default(), RefreshState::Normal);
        assert_eq!(RefreshState::Normal.status_text(), "Pull to refresh");
        assert!(RefreshState::ReleaseToRefresh.shows_indicator());
        assert!(!RefreshState::Refreshing.shows_indicator());
        assert!(RefreshState::Refreshing.shows_progress());
        assert!(!RefreshState::Completed.shows_indicator());
        assert!(!RefreshState::Completed.shows_progress());
    }
}
