//! A headless feed driven through a full refresh and load-more cycle.
//!
//! The host answers every request after a two second delay, the way a network
//! fetch would. Time runs on a manual clock advanced in 16 ms frames, so the
//! demo finishes instantly.
//!
//! Run with: cargo run -p lattice-refresh --example feed_demo
//! Set `RUST_LOG=trace` to see every ignored event as well.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter, fmt};

use lattice_refresh::gesture::DragEvent;
use lattice_refresh::model::{ListDataSource, ListModel};
use lattice_refresh::{
    Binding, ManualClock, RefreshAdapter, RefreshConfig, RefreshListener, ViewType,
};
use lattice_refresh_core::logging::is_lattice_target;

const FRAME: Duration = Duration::from_millis(16);
const FETCH_DELAY: Duration = Duration::from_secs(2);
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Refresh,
    LoadMore,
}

/// Queues requests for the host loop to answer later.
#[derive(Clone, Default)]
struct RequestQueue(Arc<Mutex<Vec<Request>>>);

impl RefreshListener for RequestQueue {
    fn on_refresh(&self) {
        self.0.lock().push(Request::Refresh);
    }

    fn on_load_more(&self) {
        self.0.lock().push(Request::LoadMore);
    }
}

struct Feed {
    model: Arc<ListModel<String>>,
    adapter: RefreshAdapter<ListModel<String>>,
    clock: Arc<ManualClock>,
    requests: RequestQueue,
    in_flight: Vec<(Duration, Request)>,
    elapsed: Duration,
    generation: usize,
}

impl Feed {
    fn new() -> Self {
        let model = Arc::new(ListModel::new(page(0)));
        let clock = Arc::new(ManualClock::new());
        let mut adapter = RefreshAdapter::new(model.clone(), RefreshConfig::default(), clock.clone());

        let requests = RequestQueue::default();
        adapter.set_listener(requests.clone());

        adapter.header().state_changed.connect(|state| {
            println!("  header: {}", state.status_text());
        });

        Self {
            model,
            adapter,
            clock,
            requests,
            in_flight: Vec::new(),
            elapsed: Duration::ZERO,
            generation: 0,
        }
    }

    /// Advance one frame: tick animations, then answer any fetch that is due.
    fn frame(&mut self) {
        self.clock.advance(FRAME);
        self.elapsed += FRAME;
        self.adapter.tick();

        for request in self.requests.0.lock().drain(..) {
            self.in_flight.push((self.elapsed + FETCH_DELAY, request));
        }

        let now = self.elapsed;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.in_flight.drain(..).partition(|(at, _)| *at <= now);
        self.in_flight = waiting;

        for (_, request) in due {
            match request {
                Request::Refresh => {
                    self.generation += 1;
                    self.model.replace(page(self.generation * 100));
                    self.adapter.notify_refresh_completed();
                    println!("  {}", self.adapter.header().refresh_time_label());
                }
                Request::LoadMore => {
                    let start = self.model.len();
                    self.model.append(page(start));
                    self.adapter.notify_load_more_completed();
                }
            }
        }
    }

    fn run_for(&mut self, duration: Duration) {
        let frames = duration.as_millis() / FRAME.as_millis();
        for _ in 0..frames {
            self.frame();
        }
    }

    fn drag(&mut self, event: DragEvent) {
        match self.adapter.handle_drag(event) {
            Ok(consumed) => {
                if consumed {
                    self.frame();
                }
            }
            Err(err) => eprintln!("  drag failed: {err}"),
        }
    }

    /// Bind every row, as a list scrolled to the bottom would.
    fn bind_all(&mut self) {
        for index in 0..self.adapter.item_count() {
            match self.adapter.bind_view(index) {
                Ok(Binding::Footer {
                    load_more_triggered: true,
                }) => println!("  footer bound at {index}, loading next page"),
                Ok(_) => {}
                Err(err) => eprintln!("  bind failed: {err}"),
            }
        }
    }
}

fn page(start: usize) -> Vec<String> {
    (start..start + PAGE_SIZE).map(|n| format!("post #{n}")).collect()
}

fn main() {
    // Initialize logging
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_filter(env)
                .with_filter(filter::filter_fn(|meta| is_lattice_target(meta.target()))),
        )
        .init();

    let mut feed = Feed::new();

    let header_offset = feed.adapter.mapper().header_offset();
    feed.model.signals().rows_inserted.connect(move |(first, last)| {
        println!(
            "  rows {}..={} inserted",
            first + header_offset,
            last + header_offset
        );
    });

    println!("Feed demo");
    println!("=========");
    println!("{} rows, {} posts", feed.adapter.item_count(), feed.model.len());

    println!("\nPull down past the threshold and let go:");
    feed.adapter.on_view_attached(ViewType::Header);
    feed.drag(DragEvent::started(200.0));
    for step in 1..=12 {
        feed.drag(DragEvent::moved(200.0 + step as f32 * 30.0));
    }
    feed.drag(DragEvent::ended(560.0));
    feed.run_for(Duration::from_secs(3));
    println!("  first post is now {:?}", feed.model.get(0));

    println!("\nA short pull just springs back:");
    feed.drag(DragEvent::started(200.0));
    feed.drag(DragEvent::moved(320.0));
    feed.drag(DragEvent::ended(320.0));
    feed.run_for(Duration::from_millis(500));
    println!("  header height {}", feed.adapter.header().visible_height());

    println!("\nScroll to the bottom:");
    feed.adapter.on_view_detached(ViewType::Header);
    feed.bind_all();
    feed.bind_all();
    feed.run_for(Duration::from_secs(3));
    println!("{} rows, {} posts", feed.adapter.item_count(), feed.model.len());

    println!("\nRefresh from code, then lose the network:");
    feed.adapter.set_refreshing(true);
    feed.run_for(Duration::from_millis(600));
    feed.adapter.notify_net_error();
    feed.run_for(Duration::from_millis(600));
    println!(
        "  refreshing: {}, loading: {}, height {}",
        feed.adapter.is_refreshing(),
        feed.adapter.is_loading(),
        feed.adapter.header().visible_height()
    );
}
