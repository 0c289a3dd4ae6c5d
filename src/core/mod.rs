//! Core runtime: configuration, the lifecycle dispatcher and the monitor builder.
//!
//! ## Wiring
//! ```text
//! Config ──► MonitorBuilder::build()
//!               ├─► SignalSource::select()  ─► NativeBus | EmulatedBus
//!               └─► LifecycleDispatcher     ─► subscribes the five names
//!                        └─► ObserverRegistry::apply(visitor) per delivered phase
//! ```

mod builder;
mod config;
mod dispatcher;

pub use builder::{Monitor, MonitorBuilder};
pub use config::Config;
pub use dispatcher::LifecycleDispatcher;
