//! Core traits for list data sources.
//!
//! A data source owns the host's content items. The refresh adapter never
//! stores items itself: it asks the source for its length on every query so
//! that the item count can never go stale.

use lattice_refresh_core::Signal;

/// A flat, ordered sequence of content items.
///
/// Implementations must emit the appropriate [`ListSignals`] whenever the
/// sequence changes.
pub trait ListDataSource: Send + Sync {
    /// Number of content items (sentinels excluded).
    fn len(&self) -> usize;

    /// Returns `true` if there are no content items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change notifications for this source.
    fn signals(&self) -> &ListSignals;
}

/// Signals emitted by list data sources.
///
/// Rows are expressed in the source's own index space. Use
/// [`RefreshAdapter::adapter_position`](crate::RefreshAdapter::adapter_position)
/// to translate them into adapter positions.
pub struct ListSignals {
    /// Emitted just before rows are inserted.
    /// Args: (first row, last row)
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted before the content is replaced wholesale.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the content has been replaced wholesale.
    pub model_reset: Signal<()>,
}

impl Default for ListSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSignals {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}
