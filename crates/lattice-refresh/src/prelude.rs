//! Prelude module for Lattice Refresh.
//!
//! ```
//! use lattice_refresh::prelude::*;
//! ```

// ============================================================================
// Adapter
// ============================================================================

pub use crate::adapter::{Binding, RefreshAdapter, ViewType};
pub use crate::listener::{CallbackListener, RefreshListener};

// ============================================================================
// Header and Input
// ============================================================================

pub use crate::gesture::{DragEvent, TouchPhase};
pub use crate::header::RefreshState;

// ============================================================================
// Models
// ============================================================================

pub use crate::model::{ListDataSource, ListModel};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::RefreshConfig;
pub use crate::error::{RefreshError, Result};

// ============================================================================
// Core
// ============================================================================

pub use lattice_refresh_core::{ManualClock, Signal, SystemClock};
