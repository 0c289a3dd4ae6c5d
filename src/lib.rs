//! # lifecast
//!
//! **Lifecast** normalizes platform application-lifecycle signals into one
//! uniform protocol and fans it out to registered observers (plugins).
//!
//! It picks the right signal source for the platform, maps each raw signal to
//! one of five [`LifecyclePhase`]s, drops the spurious foreground transition a
//! platform reports right after launch, and delivers every phase to each
//! observer that implements [`Lifecycle`], isolating observer panics.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   host hook sites            platform glue (any thread)
//!         │                              │
//!         ▼                              ▼
//!   ┌───────────────┐            ┌───────────────┐
//!   │LegacyNotifier │            │ NativeSender  │
//!   └──────┬────────┘            └──────┬────────┘
//!          ▼                            ▼
//!   ┌───────────────┐            ┌───────────────┐
//!   │  EmulatedBus  │            │   NativeBus   │ ◄── run(token) pump
//!   └──────┬────────┘            └──────┬────────┘
//!          └──────────┬─────────────────┘
//!                     │ post(name)   (exactly one, chosen by SignalSource::select)
//!                     ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  LifecycleDispatcher                                              │
//! │  - name → phase (fixed bijection, unmapped names ignored)         │
//! │  - was_backgrounded (false → true on DidEnterBackground, terminal)│
//! │  - WillEnterForeground suppressed while never backgrounded        │
//! └─────────────────────────────┬─────────────────────────────────────┘
//!                               ▼
//!                ObserverRegistry::apply(visitor)
//!                  ┌────────────┼────────────┐
//!                  ▼            ▼            ▼
//!              observer1    observer2    observerN
//!           (lifecycle())  (no capability: skipped)
//! ```
//!
//! ## Features
//! | Area               | Description                                                | Key types / traits                          |
//! |--------------------|------------------------------------------------------------|---------------------------------------------|
//! | **Vocabulary**     | Five phases and the optional observer capability.          | [`LifecyclePhase`], [`Lifecycle`], [`Observer`] |
//! | **Transport**      | Swappable named-signal buses.                              | [`SignalBus`], [`EmulatedBus`], [`NativeBus`] |
//! | **Dispatch**       | Suppression, state and panic-isolated fan-out.             | [`LifecycleDispatcher`]                     |
//! | **Registry**       | Injected observer collection.                              | [`ObserverRegistry`], [`ObserverSet`]       |
//! | **Wiring**         | One-time source selection and construction.                | [`Config`], [`MonitorBuilder`], [`Monitor`] |
//! | **Errors**         | Typed construction and bus errors.                         | [`DispatchError`], [`BusError`]             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecast::{Config, Lifecycle, Monitor, Observer, ObserverSet, PlatformContext};
//!
//! struct Uploader;
//!
//! impl Lifecycle for Uploader {
//!     fn did_enter_background(&self, _ctx: &PlatformContext) {
//!         println!("flush");
//!     }
//! }
//!
//! impl Observer for Uploader {
//!     fn lifecycle(&self) -> Option<&dyn Lifecycle> { Some(self) }
//! }
//!
//! # fn main() -> Result<(), lifecast::DispatchError> {
//! let registry = Arc::new(ObserverSet::new(vec![Arc::new(Uploader)]));
//! let monitor = Monitor::builder(Config::default())
//!     .with_registry(registry)
//!     .build()?;
//!
//! // Platform without native signals: the host drives the emulated bus.
//! let notifier = monitor.notifier().expect("emulated source");
//! notifier.did_finish_launching();
//! notifier.will_enter_foreground(); // suppressed: never backgrounded
//! notifier.did_enter_background();  // prints "flush"
//! # Ok(())
//! # }
//! ```
mod core;
mod error;
mod lifecycle;
mod observers;
mod signals;

// ---- Public re-exports ----

pub use crate::core::{Config, LifecycleDispatcher, Monitor, MonitorBuilder};
pub use error::{BusError, DispatchError};
pub use lifecycle::{Lifecycle, LifecyclePhase, Observer, PlatformContext};
pub use observers::{ObserverRegistry, ObserverSet};
pub use signals::{
    BusKind, EmulatedBus, LegacyNotifier, NativeBus, NativeSender, SignalBus, SignalHandler,
    SignalName, SignalNames, SignalSource,
};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
