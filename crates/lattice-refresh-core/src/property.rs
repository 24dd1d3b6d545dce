//! Change-tracking properties.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Pair a property with a [`Signal`](crate::Signal) and emit only
//! when [`Property::set`] returns `true`; that makes redundant writes
//! idempotent for every listener.
//!
//! ```
//! use lattice_refresh_core::{Property, Signal};
//!
//! struct Indicator {
//!     value: Property<u32>,
//!     value_changed: Signal<u32>,
//! }
//!
//! impl Indicator {
//!     fn set_value(&self, value: u32) {
//!         if self.value.set(value) {
//!             self.value_changed.emit(value);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value with change detection.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// If the new value equals the current one nothing is written and
    /// `false` is returned.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Replace the value, returning the previous one if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.value.read()).finish()
    }
}
