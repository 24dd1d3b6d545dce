//! Adapter exposing a data source with header and footer sentinels.
//!
//! [`PositionMapper`] does the index arithmetic; [`RefreshAdapter`] composes
//! it with the header state machine, the gesture tracker and the host's
//! listener.

mod position;
mod refresh_adapter;

pub use position::{PositionMapper, ViewType};
pub use refresh_adapter::{Binding, RefreshAdapter};
