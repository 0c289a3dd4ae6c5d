//! Error types used by the signal buses and the lifecycle dispatcher.
//!
//! - [`BusError`] — failures of a [`SignalBus`](crate::SignalBus) implementation.
//! - [`DispatchError`] — failures while constructing a [`LifecycleDispatcher`](crate::LifecycleDispatcher).
//!
//! Observer faults are **not** errors: they are caught and logged at the
//! per-observer dispatch boundary and never surface to the caller.

use thiserror::Error;

use crate::lifecycle::LifecyclePhase;
use crate::signals::SignalName;

/// # Errors produced by signal buses.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The bus no longer delivers signals (its pump has exited).
    #[error("signal bus closed")]
    Closed,

    /// The native delivery queue was full; the signal was dropped.
    #[error("native signal queue full; dropped '{name}'")]
    QueueFull {
        /// Name of the dropped signal.
        name: SignalName,
    },

    /// [`NativeBus::run`](crate::NativeBus::run) was started a second time.
    #[error("native signal pump already running")]
    AlreadyRunning,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use lifecast::BusError;
    ///
    /// assert_eq!(BusError::Closed.as_label(), "bus_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::Closed => "bus_closed",
            BusError::QueueFull { .. } => "bus_queue_full",
            BusError::AlreadyRunning => "bus_already_running",
        }
    }
}

/// # Errors produced while constructing a dispatcher.
///
/// All of them are fatal: a dispatcher that could not subscribe to its five
/// signals is never handed out.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Two phases share one signal name in the bus naming scheme.
    #[error("signal '{name}' is mapped to both {first:?} and {second:?}")]
    DuplicateSignal {
        /// The shared signal name.
        name: SignalName,
        /// Phase that claimed the name first.
        first: LifecyclePhase,
        /// Phase that tried to claim it again.
        second: LifecyclePhase,
    },

    /// Subscribing to one of the five signals failed.
    #[error("subscribe to '{name}' failed: {source}")]
    Subscribe {
        /// Signal being subscribed.
        name: SignalName,
        /// Underlying bus failure.
        #[source]
        source: BusError,
    },

    /// The builder was asked to build without an observer registry.
    #[error("no observer registry configured")]
    MissingRegistry,
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use lifecast::DispatchError;
    ///
    /// assert_eq!(DispatchError::MissingRegistry.as_label(), "dispatch_missing_registry");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::DuplicateSignal { .. } => "dispatch_duplicate_signal",
            DispatchError::Subscribe { .. } => "dispatch_subscribe_failed",
            DispatchError::MissingRegistry => "dispatch_missing_registry",
        }
    }
}
