//! Error types for the refresh controller.

use crate::adapter::ViewType;

/// Result type alias for refresh controller operations.
pub type Result<T> = std::result::Result<T, RefreshError>;

/// Which listener hook an operation tried to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerHook {
    /// `on_refresh`, fired when a pull is released past the threshold.
    Refresh,
    /// `on_load_more`, fired when the footer is bound.
    LoadMore,
}

impl std::fmt::Display for ListenerHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refresh => write!(f, "on_refresh"),
            Self::LoadMore => write!(f, "on_load_more"),
        }
    }
}

/// Errors that can occur in the refresh controller.
///
/// Index errors are integration bugs in the host's rendering layer: they are
/// surfaced as errors rather than clamped so that they show up early.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// An adapter position outside `0..item_count`.
    #[error("Index {index} out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    /// A data index was requested for a sentinel row.
    #[error("Index {index} is a {view_type:?} sentinel, not a content item")]
    NotAnItem { index: usize, view_type: ViewType },

    /// A trigger fired with no listener registered.
    #[error("No listener registered for {hook}")]
    ListenerMissing { hook: ListenerHook },

    /// A configuration value is out of its valid range.
    #[error("Invalid refresh configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("Failed to parse refresh configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl RefreshError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` for errors caused by an out-of-range or mistyped index.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::NotAnItem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RefreshError::IndexOutOfRange { index: 12, count: 12 };
        assert_eq!(err.to_string(), "Index 12 out of range for 12 items");
        assert!(err.is_index_error());

        let err = RefreshError::NotAnItem {
            index: 0,
            view_type: ViewType::Header,
        };
        assert_eq!(
            err.to_string(),
            "Index 0 is a Header sentinel, not a content item"
        );

        let err = RefreshError::ListenerMissing {
            hook: ListenerHook::LoadMore,
        };
        assert_eq!(err.to_string(), "No listener registered for on_load_more");
        assert!(!err.is_index_error());
    }
}
