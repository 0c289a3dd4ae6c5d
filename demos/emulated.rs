//! # Example: emulated
//!
//! A host on a platform **without** native lifecycle signals drives the
//! emulated bus from its own hook sites.
//!
//! Shows how to:
//! - Implement [`Lifecycle`] on a destination that only cares about
//!   foreground/background.
//! - Register it next to the built-in [`LogObserver`].
//! - Observe the suppressed foreground transition right after launch.
//!
//! ## Flow
//! ```text
//! host hooks ──► LegacyNotifier ──► EmulatedBus ──► LifecycleDispatcher
//!                                                      └─► ObserverSet::apply
//!                                                            ├─► LogObserver
//!                                                            └─► Destination
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example emulated --features logging
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lifecast::{Config, Lifecycle, LogObserver, Monitor, Observer, ObserverSet, PlatformContext};
use tracing_subscriber::EnvFilter;

/// Batches events in memory; flushes on background, restarts its timer on foreground.
#[derive(Default)]
struct Destination {
    queued: AtomicUsize,
}

impl Lifecycle for Destination {
    fn will_enter_foreground(&self, _ctx: &PlatformContext) {
        println!("[destination] foreground: restarting flush timer");
    }

    fn did_enter_background(&self, _ctx: &PlatformContext) {
        let n = self.queued.swap(0, Ordering::AcqRel);
        println!("[destination] background: flushed {n} queued events");
    }
}

impl Observer for Destination {
    fn name(&self) -> &str {
        "destination"
    }

    fn lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let destination = Arc::new(Destination::default());
    let registry = Arc::new(ObserverSet::new(vec![
        Arc::new(LogObserver::new()),
        destination.clone(),
    ]));

    let monitor = Monitor::builder(Config::default())
        .with_registry(registry)
        .with_context(PlatformContext::new("legacy-watch"))
        .build()?;
    let notifier = monitor.notifier().ok_or("expected an emulated source")?;

    notifier.did_finish_launching();
    notifier.will_enter_foreground(); // dropped: never backgrounded
    notifier.did_become_active();

    destination.queued.fetch_add(3, Ordering::AcqRel);
    notifier.will_resign_active();
    notifier.did_enter_background();

    notifier.will_enter_foreground();
    notifier.did_become_active();

    println!("was_backgrounded={}", monitor.dispatcher().was_backgrounded());
    Ok(())
}
