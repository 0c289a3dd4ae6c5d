//! # LogObserver — lifecycle phase logger
//!
//! A minimal observer that logs every lifecycle phase it receives.
//! Use it for debugging or demos.
//!
//! ## Example output
//! ```text
//! INFO lifecast::observers::log: lifecycle phase="did_finish_launching" platform="watch"
//! INFO lifecast::observers::log: lifecycle phase="did_enter_background" platform="watch"
//! ```

use tracing::info;

use crate::lifecycle::{Lifecycle, LifecyclePhase, Observer, PlatformContext};

/// Lifecycle logging observer.
#[derive(Default)]
pub struct LogObserver;

impl LogObserver {
    /// Construct a new [`LogObserver`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn log(phase: LifecyclePhase, ctx: &PlatformContext) {
        info!(phase = phase.as_label(), platform = ctx.platform(), "lifecycle");
    }
}

impl Lifecycle for LogObserver {
    fn did_finish_launching(&self, ctx: &PlatformContext) {
        Self::log(LifecyclePhase::DidFinishLaunching, ctx);
    }

    fn did_become_active(&self, ctx: &PlatformContext) {
        Self::log(LifecyclePhase::DidBecomeActive, ctx);
    }

    fn will_resign_active(&self, ctx: &PlatformContext) {
        Self::log(LifecyclePhase::WillResignActive, ctx);
    }

    fn will_enter_foreground(&self, ctx: &PlatformContext) {
        Self::log(LifecyclePhase::WillEnterForeground, ctx);
    }

    fn did_enter_background(&self, ctx: &PlatformContext) {
        Self::log(LifecyclePhase::DidEnterBackground, ctx);
    }
}

impl Observer for LogObserver {
    fn name(&self) -> &str {
        "LogObserver"
    }

    fn lifecycle(&self) -> Option<&dyn Lifecycle> {
        Some(self)
    }
}
