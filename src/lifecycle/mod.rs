//! Shared lifecycle vocabulary.
//!
//! ## Contents
//! - [`LifecyclePhase`] the five canonical application-state transitions
//! - [`Lifecycle`] the optional capability an observer implements to receive them
//! - [`Observer`] anything registered with an [`ObserverRegistry`](crate::ObserverRegistry)
//! - [`PlatformContext`] opaque token handed to every lifecycle handler
//!
//! ## Capability probing
//! ```text
//! registry.apply(visitor)
//!     └─► visitor(&dyn Observer)
//!            ├─ observer.lifecycle() == None        ─► skipped
//!            └─ observer.lifecycle() == Some(target) ─► phase.notify(target, ctx)
//! ```

mod context;
mod observer;
mod phase;

pub use context::PlatformContext;
pub use observer::{Lifecycle, Observer};
pub use phase::LifecyclePhase;
