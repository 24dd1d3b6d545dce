//! The callbacks the controller emits into the host.

/// Receives refresh and load-more requests.
///
/// Both hooks run synchronously on the UI thread, inside the adapter call that
/// triggered them. Implementations should only kick off the fetch (on whatever
/// execution context the host prefers) and report back later through
/// [`RefreshAdapter::notify_refresh_completed`],
/// [`RefreshAdapter::notify_load_more_completed`] or
/// [`RefreshAdapter::notify_net_error`].
///
/// [`RefreshAdapter::notify_refresh_completed`]: crate::RefreshAdapter::notify_refresh_completed
/// [`RefreshAdapter::notify_load_more_completed`]: crate::RefreshAdapter::notify_load_more_completed
/// [`RefreshAdapter::notify_net_error`]: crate::RefreshAdapter::notify_net_error
pub trait RefreshListener: Send + Sync {
    /// A pull was released past the activation threshold.
    fn on_refresh(&self);

    /// The footer sentinel was bound; the host should fetch the next page.
    fn on_load_more(&self);
}

/// A [`RefreshListener`] built from two closures.
///
/// ```
/// use lattice_refresh::{CallbackListener, RefreshListener};
///
/// let listener = CallbackListener::new(
///     || println!("refresh"),
///     || println!("load more"),
/// );
/// listener.on_refresh();
/// ```
pub struct CallbackListener<R, L> {
    on_refresh: R,
    on_load_more: L,
}

impl<R, L> CallbackListener<R, L>
where
    R: Fn() + Send + Sync,
    L: Fn() + Send + Sync,
{
    /// Create a listener from a refresh and a load-more closure.
    pub fn new(on_refresh: R, on_load_more: L) -> Self {
        Self {
            on_refresh,
            on_load_more,
        }
    }
}

impl<R, L> RefreshListener for CallbackListener<R, L>
where
    R: Fn() + Send + Sync,
    L: Fn() + Send + Sync,
{
    fn on_refresh(&self) {
        (self.on_refresh)()
    }

    fn on_load_more(&self) {
        (self.on_load_more)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_callback_listener_routes_hooks() {
        let refreshes = Arc::new(AtomicUsize::new(0));
        let loads = Arc::new(AtomicUsize::new(0));

        let r = refreshes.clone();
        let l = loads.clone();
        let listener = CallbackListener::new(
            move || {
                r.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                l.fetch_add(1, Ordering::SeqCst);
            },
        );

        listener.on_refresh();
        listener.on_load_more();
        listener.on_load_more();

        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
