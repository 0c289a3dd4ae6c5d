//! Signal transport: names, the bus contract and its two implementations.
//!
//! ## Contents
//! - [`SignalName`], [`SignalNames`] correlation keys and per-bus naming schemes
//! - [`SignalBus`] synchronous publish/subscribe contract
//! - [`EmulatedBus`] + [`LegacyNotifier`] host-driven bus for platforms without native signals
//! - [`NativeBus`] + [`NativeSender`] platform-driven bus, pumped onto one task
//! - [`SignalSource`] one-time selection between the two
//!
//! ## Architecture
//! ```text
//! Host hook sites ──► LegacyNotifier ──► EmulatedBus ──┐
//!                                                      ├──► post(name) ──► handlers (subscription order)
//! Platform glue ──► NativeSender ──► [queue] ──► NativeBus::run ──┘
//! ```

mod bus;
mod emulated;
mod name;
mod native;
mod source;

pub(crate) use bus::HandlerTable;
pub use bus::{BusKind, SignalBus, SignalHandler};
pub use emulated::{EmulatedBus, LegacyNotifier};
pub use name::{SignalName, SignalNames};
pub use native::{NativeBus, NativeSender};
pub use source::SignalSource;
