//! Content models for refreshable lists.
//!
//! The host owns its content through a [`ListDataSource`]; the refresh adapter
//! only ever reads the length. [`ListModel`] is the ready-made implementation.
//!
//! # Signals
//!
//! - `model_about_to_reset` / `model_reset`: content replaced (after a refresh)
//! - `rows_about_to_be_inserted` / `rows_inserted`: a page appended (after a
//!   load-more), starting at the previous length

mod list_model;
mod traits;

pub use list_model::ListModel;
pub use traits::{ListDataSource, ListSignals};
