//! # Example: native
//!
//! A host on a platform **with** native lifecycle signals. Platform glue runs
//! on its own thread and delivers native signal names; the pump serializes
//! them onto one task.
//!
//! ## Flow
//! ```text
//! platform thread ──► NativeSender ──► [queue] ──► NativeBus::run ──► LifecycleDispatcher
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=lifecast=debug cargo run --example native
//! ```

use std::sync::Arc;
use std::time::Duration;

use lifecast::{Config, Lifecycle, LifecyclePhase, Monitor, Observer, ObserverSet, PlatformContext};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

struct Printer;

impl Lifecycle for Printer {
    fn did_finish_launching(&self, ctx: &PlatformContext) {
        println!("[printer] launched on {}", ctx.platform());
    }

    fn will_enter_foreground(&self, _ctx: &PlatformContext) {
        println!("[printer] foreground");
    }

    fn did_enter_background(&self, _ctx: &PlatformContext) {
        println!("[printer] background");
    }
}

impl Observer for Printer {
    fn name(&self) -> &str {
        "printer"
    }

    fn lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }
}

/// Not lifecycle-capable: never called.
struct Metrics;

impl Observer for Metrics {
    fn name(&self) -> &str {
        "metrics"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let registry = Arc::new(ObserverSet::new(vec![Arc::new(Printer), Arc::new(Metrics)]));
    let cfg = Config {
        native_signals: true,
        ..Config::default()
    };
    let monitor = Monitor::builder(cfg)
        .with_registry(registry)
        .with_context(PlatformContext::new("native-demo"))
        .build()?;

    let bus = Arc::clone(monitor.native().ok_or("expected a native source")?);
    let sender = bus.sender();

    let glue = std::thread::spawn(move || {
        for phase in [
            LifecyclePhase::DidFinishLaunching,
            LifecyclePhase::WillEnterForeground,
            LifecyclePhase::DidBecomeActive,
            LifecyclePhase::WillResignActive,
            LifecyclePhase::DidEnterBackground,
            LifecyclePhase::WillEnterForeground,
        ] {
            if let Err(e) = sender.deliver_phase(phase) {
                eprintln!("[glue] {phase} not delivered: {e}");
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    });

    let token = CancellationToken::new();
    let pump = {
        let bus = Arc::clone(&bus);
        let token = token.clone();
        tokio::spawn(async move { bus.run(token).await })
    };

    tokio::time::sleep(Duration::from_millis(300)).await;
    token.cancel();
    pump.await??;
    glue.join().map_err(|_| "platform glue panicked")?;

    println!("was_backgrounded={}", monitor.dispatcher().was_backgrounded());
    Ok(())
}
