//! Generic list model implementation.
//!
//! `ListModel<T>` is the stock [`ListDataSource`]: a vector of items that
//! changes only by wholesale replacement (after a refresh) or by appending a
//! page (after a load-more).

use parking_lot::RwLock;

use lattice_refresh_core::logging::targets;

use super::traits::{ListDataSource, ListSignals};

/// A list of content items with change notifications.
///
/// # Example
///
/// ```
/// use lattice_refresh::model::{ListDataSource, ListModel};
///
/// let model = ListModel::new(vec!["a".to_string(), "b".to_string()]);
///
/// model.signals().rows_inserted.connect(|(first, last)| {
///     println!("rows {first}..={last} inserted");
/// });
///
/// model.append(vec!["c".to_string()]);
/// assert_eq!(model.len(), 3);
/// ```
pub struct ListModel<T> {
    items: RwLock<Vec<T>>,
    signals: ListSignals,
}

impl<T: Send + Sync> ListModel<T> {
    /// Creates a list model holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            signals: ListSignals::new(),
        }
    }

    /// Creates an empty list model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replaces all items. Emits the reset signals.
    pub fn replace(&self, items: Vec<T>) {
        let count = items.len();
        self.signals.emit_reset(|| {
            *self.items.write() = items;
        });
        tracing::debug!(target: targets::MODEL, count, "model replaced");
    }

    /// Appends `items` after the existing ones.
    ///
    /// Emits `rows_inserted` with `first` equal to the previous length. An
    /// empty batch changes nothing and emits nothing.
    pub fn append(&self, items: Vec<T>) {
        if items.is_empty() {
            tracing::trace!(target: targets::MODEL, "append of empty batch ignored");
            return;
        }

        let first = self.items.read().len();
        let last = first + items.len() - 1;
        self.signals.emit_rows_inserted(first, last, || {
            self.items.write().extend(items);
        });
        tracing::debug!(target: targets::MODEL, first, last, "rows appended");
    }

    /// Returns a read guard over the items.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Runs `f` on the item at `index`, if it exists.
    pub fn with_item<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.items.read().get(index).map(f)
    }
}

impl<T: Clone + Send + Sync> ListModel<T> {
    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }
}

impl<T: Send + Sync> ListDataSource for ListModel<T> {
    fn len(&self) -> usize {
        self.items.read().len()
    }

    fn signals(&self) -> &ListSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(ListModel<String>: Send, Sync);
