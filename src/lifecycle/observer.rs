//! # Observer and lifecycle capability traits.
//!
//! Every entity in an [`ObserverRegistry`](crate::ObserverRegistry) is an
//! [`Observer`]. Only observers that opt in through [`Observer::lifecycle`]
//! receive lifecycle phases; the rest are skipped silently.
//!
//! ## Example
//! ```rust
//! use lifecast::{Lifecycle, Observer, PlatformContext};
//!
//! struct Uploader;
//!
//! impl Lifecycle for Uploader {
//!     fn did_enter_background(&self, _ctx: &PlatformContext) {
//!         // flush pending batches
//!     }
//! }
//!
//! impl Observer for Uploader {
//!     fn name(&self) -> &str { "uploader" }
//!     fn lifecycle(&self) -> Option<&dyn Lifecycle> { Some(self) }
//! }
//! ```

use super::PlatformContext;

/// Lifecycle capability.
///
/// All handlers default to no-ops; implement only the phases you care about.
/// Handlers are called synchronously on the thread that drains the dispatcher
/// and should return quickly. A panic inside a handler is caught and logged;
/// it never reaches other observers.
pub trait Lifecycle {
    /// Application finished launching.
    fn did_finish_launching(&self, _ctx: &PlatformContext) {}

    /// Application became active.
    fn did_become_active(&self, _ctx: &PlatformContext) {}

    /// Application is about to resign active.
    fn will_resign_active(&self, _ctx: &PlatformContext) {}

    /// Application is about to enter the foreground after a real backgrounding.
    fn will_enter_foreground(&self, _ctx: &PlatformContext) {}

    /// Application entered the background.
    fn did_enter_background(&self, _ctx: &PlatformContext) {}
}

/// Contract for registered observers (plugins).
pub trait Observer: Send + Sync + 'static {
    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Typed capability probe.
    ///
    /// Return `Some(self)` to receive lifecycle phases.
    fn lifecycle(&self) -> Option<&dyn Lifecycle> {
        None
    }
}
