//! # Signal bus contract.
//!
//! [`SignalBus`] abstracts the platform's named-signal transport.
//!
//! ## Rules
//! - **Synchronous**: `post()` runs every handler of that name on the calling
//!   thread, in subscription order, before returning.
//! - **Silent when idle**: posting a name nobody subscribed to is a no-op.
//! - **No unsubscribe**: subscriptions live as long as the bus.
//! - **Re-entrant**: handler lists are snapshotted before invocation, so a
//!   handler may post or subscribe without deadlocking the bus.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::BusError;

use super::{SignalName, SignalNames};

/// Callback invoked once per posted occurrence of a subscribed name.
pub type SignalHandler = Arc<dyn Fn(&SignalName) + Send + Sync>;

/// Which implementation backs a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    /// Platform-driven lifecycle signals.
    Native,
    /// Host-driven emulation.
    Emulated,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BusKind::Native => "native",
            BusKind::Emulated => "emulated",
        })
    }
}

/// Named-signal publish/subscribe transport.
pub trait SignalBus: Send + Sync {
    /// Naming scheme carried by this bus.
    fn names(&self) -> &SignalNames;

    /// Implementation kind (for logs).
    fn kind(&self) -> BusKind;

    /// Registers `handler` for every future post of `name`.
    fn subscribe(&self, name: SignalName, handler: SignalHandler) -> Result<(), BusError>;

    /// Runs all handlers subscribed to `name`, synchronously, in subscription order.
    fn post(&self, name: &SignalName);
}

/// Subscription table shared by both bus implementations.
#[derive(Default)]
pub(crate) struct HandlerTable {
    handlers: RwLock<HashMap<SignalName, Vec<SignalHandler>>>,
}

impl HandlerTable {
    pub(crate) fn subscribe(&self, name: SignalName, handler: SignalHandler) {
        let mut g = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        g.entry(name).or_default().push(handler);
    }

    /// Invokes the handlers of `name`; returns how many ran.
    pub(crate) fn post(&self, name: &SignalName) -> usize {
        let snapshot: Vec<SignalHandler> = {
            let g = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
            match g.get(name) {
                Some(list) => list.clone(),
                None => return 0,
            }
        };
        for handler in &snapshot {
            handler(name);
        }
        snapshot.len()
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self, name: &SignalName) -> usize {
        let g = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        g.get(name).map_or(0, Vec::len)
    }
}
