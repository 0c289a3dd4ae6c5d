//! # Observer registries and built-in observers.
//!
//! The dispatcher never owns observers. It borrows them, one dispatch at a
//! time, through [`ObserverRegistry::apply`].
//!
//! ## Architecture
//! ```text
//! LifecycleDispatcher ── apply(visitor) ──► ObserverRegistry
//!                                              ├──► visitor(&dyn Observer)  Analytics destination
//!                                              ├──► visitor(&dyn Observer)  LogObserver
//!                                              └──► visitor(&dyn Observer)  Custom plugin
//! ```
//!
//! - [`ObserverSet`]: default registry (snapshot iteration, add/remove at any time)
//! - [`LogObserver`]: logs every phase through `tracing` (feature `logging`)

mod registry;

#[cfg(feature = "logging")]
mod log;

#[cfg(feature = "logging")]
pub use log::LogObserver;
pub use registry::{ObserverRegistry, ObserverSet};
