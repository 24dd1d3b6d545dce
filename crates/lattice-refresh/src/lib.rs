//! Lattice Refresh - pull-to-refresh and load-more for virtualized lists.
//!
//! The crate is headless. It wraps a host's [`ListDataSource`](model::ListDataSource)
//! with a header row above the content and a footer row below it, turns
//! vertical drags into header heights, and tells the host when to refresh or
//! fetch the next page. Rendering and scrolling stay with the host.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lattice_refresh::gesture::DragEvent;
//! use lattice_refresh::model::ListModel;
//! use lattice_refresh::{CallbackListener, ManualClock, RefreshAdapter, RefreshConfig, RefreshState, ViewType};
//!
//! let model = Arc::new(ListModel::new(vec!["first".to_string()]));
//! let mut adapter = RefreshAdapter::new(model, RefreshConfig::default(), Arc::new(ManualClock::new()));
//! adapter.set_listener(CallbackListener::new(|| println!("refresh"), || println!("load more")));
//!
//! adapter.on_view_attached(ViewType::Header);
//! adapter.handle_drag(DragEvent::started(0.0)).unwrap();
//! adapter.handle_drag(DragEvent::moved(330.0)).unwrap();
//! adapter.handle_drag(DragEvent::ended(330.0)).unwrap();
//!
//! assert!(adapter.is_refreshing());
//! assert_eq!(adapter.refresh_state(), RefreshState::Refreshing);
//! ```

pub mod adapter;
pub mod animation;
pub mod config;
pub mod error;
pub mod gesture;
pub mod header;
pub mod listener;
pub mod model;
pub mod prelude;

pub use adapter::{Binding, PositionMapper, RefreshAdapter, ViewType};
pub use config::RefreshConfig;
pub use error::{ListenerHook, RefreshError, Result};
pub use header::RefreshState;
pub use listener::{CallbackListener, RefreshListener};

pub use lattice_refresh_core::{
    Clock, ConnectionId, ManualClock, Property, SharedClock, Signal, SystemClock,
};
