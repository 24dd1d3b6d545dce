//! The refresh adapter.
//!
//! `RefreshAdapter` wraps a host [`ListDataSource`] and presents it to a
//! virtualized list with a pull-to-refresh header above the content and a
//! load-more footer below it.

use std::sync::Arc;

use lattice_refresh_core::SharedClock;
use lattice_refresh_core::logging::targets;

use super::position::{PositionMapper, ViewType};
use crate::config::RefreshConfig;
use crate::error::{ListenerHook, RefreshError, Result};
use crate::gesture::{DragEvent, GestureTracker, TouchPhase};
use crate::header::{HeaderStateMachine, RefreshState};
use crate::listener::RefreshListener;
use crate::model::ListDataSource;

/// What the host should render for a bound row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The header row.
    Header,
    /// The footer row. `load_more_triggered` is `true` if this bind started
    /// a load-more.
    Footer { load_more_triggered: bool },
    /// A content row backed by the item at `data_index`.
    Item { data_index: usize },
}

/// Pull-to-refresh and load-more controller for a list.
///
/// The adapter never stores content. Every query reads the data source's
/// current length, so the count and the mapping are always consistent with
/// the content.
///
/// All calls must come from the host's UI thread, including the completion
/// notifications.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lattice_refresh::model::ListModel;
/// use lattice_refresh::{
///     Binding, CallbackListener, ManualClock, RefreshAdapter, RefreshConfig, ViewType,
/// };
///
/// let model = Arc::new(ListModel::new(vec!["a".to_string(), "b".to_string()]));
/// let mut adapter = RefreshAdapter::new(model, RefreshConfig::default(), Arc::new(ManualClock::new()));
/// adapter.set_listener(CallbackListener::new(|| {}, || println!("next page")));
///
/// assert_eq!(adapter.item_count(), 4);
/// assert_eq!(adapter.view_type_at(0).unwrap(), ViewType::Header);
/// assert_eq!(adapter.bind_view(1).unwrap(), Binding::Item { data_index: 0 });
/// assert!(!adapter.is_loading());
/// adapter.bind_view(3).unwrap();
/// assert!(adapter.is_loading());
/// ```
pub struct RefreshAdapter<S: ListDataSource> {
    source: Arc<S>,
    mapper: PositionMapper,
    header: HeaderStateMachine,
    gesture: GestureTracker,
    listener: Option<Box<dyn RefreshListener>>,
    is_refreshing: bool,
    is_loading: bool,
}

impl<S: ListDataSource> RefreshAdapter<S> {
    /// Create an adapter over `source`.
    pub fn new(source: Arc<S>, config: RefreshConfig, clock: SharedClock) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(target: targets::ADAPTER, %err, "using refresh configuration anyway");
        }

        let mapper = PositionMapper::new(config.header_enabled, config.footer_enabled);
        let gesture = GestureTracker::new(config.damping_factor);
        Self {
            source,
            mapper,
            header: HeaderStateMachine::new(config, clock),
            gesture,
            listener: None,
            is_refreshing: false,
            is_loading: false,
        }
    }

    /// The wrapped data source.
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// The header state machine.
    pub fn header(&self) -> &HeaderStateMachine {
        &self.header
    }

    /// The position mapper.
    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    /// Register the receiver of refresh and load-more requests, replacing
    /// any previous one.
    pub fn set_listener(&mut self, listener: impl RefreshListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is registered.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // =========================================================================
    // Positions
    // =========================================================================

    /// Total number of rows, sentinels included.
    pub fn item_count(&self) -> usize {
        self.mapper.item_count(self.source.len())
    }

    /// The view type at `index`.
    pub fn view_type_at(&self, index: usize) -> Result<ViewType> {
        self.mapper.view_type_at(index, self.source.len())
    }

    /// The content index at `index`, which must be an item row.
    pub fn data_index_at(&self, index: usize) -> Result<usize> {
        self.mapper.data_index_at(index, self.source.len())
    }

    /// The adapter position of content index `data_index`.
    ///
    /// Use this to forward the source's row notifications to the list view.
    pub fn adapter_position(&self, data_index: usize) -> usize {
        self.mapper.adapter_position(data_index)
    }

    /// Whether the row at `index` spans the full cross axis.
    pub fn is_full_span(&self, index: usize) -> Result<bool> {
        self.mapper.is_full_span(index, self.source.len())
    }

    /// Span of the row at `index` in a grid with `span_count` columns.
    pub fn span_size(&self, index: usize, span_count: usize) -> Result<usize> {
        self.mapper.span_size(index, self.source.len(), span_count)
    }

    /// Enable or disable the header row. Takes effect on the next query; an
    /// open drag session is left alone.
    pub fn set_header_enabled(&mut self, enabled: bool) {
        tracing::debug!(target: targets::ADAPTER, enabled, "header sentinel toggled");
        self.mapper.set_header_enabled(enabled);
    }

    /// Enable or disable the footer row. Takes effect on the next query.
    pub fn set_footer_enabled(&mut self, enabled: bool) {
        tracing::debug!(target: targets::ADAPTER, enabled, "footer sentinel toggled");
        self.mapper.set_footer_enabled(enabled);
    }

    /// Bind the row at `index`.
    ///
    /// Binding the footer requests the next page through `on_load_more`,
    /// unless a load is already in flight.
    #[tracing::instrument(skip(self), target = "lattice_refresh::adapter", level = "trace")]
    pub fn bind_view(&mut self, index: usize) -> Result<Binding> {
        match self.view_type_at(index)? {
            ViewType::Header => Ok(Binding::Header),
            ViewType::Item => Ok(Binding::Item {
                data_index: index - self.mapper.header_offset(),
            }),
            ViewType::Footer => {
                let load_more_triggered = self.request_load_more()?;
                Ok(Binding::Footer {
                    load_more_triggered,
                })
            }
        }
    }

    fn request_load_more(&mut self) -> Result<bool> {
        if self.is_loading {
            tracing::trace!(target: targets::ADAPTER, "footer bound while loading");
            return Ok(false);
        }

        let Some(listener) = self.listener.as_deref() else {
            return Self::listener_missing(ListenerHook::LoadMore).map(|()| false);
        };

        self.is_loading = true;
        tracing::debug!(target: targets::ADAPTER, "load more requested");
        listener.on_load_more();
        Ok(true)
    }

    // =========================================================================
    // Visibility and input
    // =========================================================================

    /// Report that a row of type `view_type` was attached to the layout.
    pub fn on_view_attached(&mut self, view_type: ViewType) {
        if view_type == ViewType::Header {
            self.gesture.set_header_visible(true);
        }
    }

    /// Report that a row of type `view_type` was detached from the layout.
    pub fn on_view_detached(&mut self, view_type: ViewType) {
        if view_type == ViewType::Header {
            self.gesture.set_header_visible(false);
        }
    }

    /// Whether the header row is attached to the layout.
    pub fn is_header_visible(&self) -> bool {
        self.gesture.is_header_visible()
    }

    /// Feed a pointer event. Returns `true` when the event was consumed and
    /// must not scroll the list.
    ///
    /// Input is ignored while refreshing, while the header is disabled and
    /// while the header row is detached. A disabled header keeps the open
    /// drag session, so the pull resumes where it left off once re-enabled.
    pub fn handle_drag(&mut self, event: DragEvent) -> Result<bool> {
        if self.is_refreshing {
            self.gesture.reset_session();
            return Ok(false);
        }
        if !self.mapper.header_enabled() {
            tracing::trace!(target: targets::ADAPTER, phase = ?event.phase, "drag ignored, header disabled");
            return Ok(false);
        }

        if event.phase == TouchPhase::Ended
            && self.gesture.is_header_visible()
            && self.header.exceeds_threshold()
            && self.listener.is_none()
        {
            self.gesture.on_drag_cancel(&mut self.header);
            return Self::listener_missing(ListenerHook::Refresh).map(|()| false);
        }

        let response = self.gesture.handle(event, &mut self.header);
        if response.refresh_triggered {
            self.is_refreshing = true;
            if let Some(listener) = self.listener.as_deref() {
                tracing::debug!(target: targets::ADAPTER, "refresh requested by pull");
                listener.on_refresh();
            }
        }
        Ok(response.handled)
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// Start (`true`) or reset (`false`) a refresh without a pull.
    ///
    /// Starting does not call `on_refresh`; the host is expected to kick off
    /// the fetch itself. Starting while already refreshing does nothing.
    pub fn set_refreshing(&mut self, refreshing: bool) {
        if refreshing {
            if self.header.begin_refresh() {
                self.gesture.reset_session();
                self.is_refreshing = true;
                tracing::debug!(target: targets::ADAPTER, "programmatic refresh started");
            }
        } else {
            self.is_refreshing = false;
            self.header.reset();
            tracing::debug!(target: targets::ADAPTER, "refresh reset");
        }
    }

    /// The refresh finished. The header shows its completed state, then
    /// returns to normal after the settle delay.
    pub fn notify_refresh_completed(&mut self) {
        self.is_refreshing = false;
        if self.header.refresh_completed() {
            tracing::debug!(target: targets::ADAPTER, "refresh completed");
        }
    }

    /// The load-more finished. The next footer bind may request another page.
    pub fn notify_load_more_completed(&mut self) {
        if self.is_loading {
            tracing::debug!(target: targets::ADAPTER, "load more completed");
        }
        self.is_loading = false;
    }

    /// A fetch failed. Clears both flags and returns the header to normal
    /// immediately.
    pub fn notify_net_error(&mut self) {
        tracing::debug!(
            target: targets::ADAPTER,
            refreshing = self.is_refreshing,
            loading = self.is_loading,
            "network error reported"
        );
        self.is_refreshing = false;
        self.is_loading = false;
        self.gesture.reset_session();
        self.header.abort();
    }

    /// Whether a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// Whether a load-more is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The header's refresh state.
    pub fn refresh_state(&self) -> RefreshState {
        self.header.state()
    }

    /// Advance header animations and scheduled transitions. Call once per
    /// frame.
    pub fn tick(&mut self) {
        self.header.tick();
    }

    fn listener_missing(hook: ListenerHook) -> Result<()> {
        if cfg!(debug_assertions) {
            Err(RefreshError::ListenerMissing { hook })
        } else {
            tracing::warn!(target: targets::ADAPTER, %hook, "no listener registered");
            Ok(())
        }
    }
}

impl<S: ListDataSource> std::fmt::Debug for RefreshAdapter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshAdapter")
            .field("len", &self.source.len())
            .field("mapper", &self.mapper)
            .field("header", &self.header)
            .field("is_refreshing", &self.is_refreshing)
            .field("is_loading", &self.is_loading)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(RefreshAdapter<crate::model::ListModel<String>>: Send, Sync);
