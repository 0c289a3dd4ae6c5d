//! # Signal source selection.
//!
//! The choice between native and emulated signals is made **once**, from
//! [`Config::native_signals`](crate::Config), when the monitor is built. It is
//! never re-evaluated and the two sources are never mixed.

use std::sync::Arc;

use crate::core::Config;

use super::{BusKind, EmulatedBus, LegacyNotifier, NativeBus, SignalBus};

/// The bus implementation picked for this process.
#[derive(Clone)]
pub enum SignalSource {
    /// Platform delivers lifecycle signals itself.
    Native(Arc<NativeBus>),
    /// Host drives the bus through a [`LegacyNotifier`].
    Emulated(Arc<EmulatedBus>),
}

impl SignalSource {
    /// Capability check: native when the platform supports lifecycle signals.
    pub fn select(cfg: &Config) -> Self {
        if cfg.native_signals {
            SignalSource::Native(Arc::new(NativeBus::new(cfg.native_queue_capacity_clamped())))
        } else {
            SignalSource::Emulated(Arc::new(EmulatedBus::new()))
        }
    }

    /// The selected bus behind the common contract.
    pub fn bus(&self) -> Arc<dyn SignalBus> {
        match self {
            SignalSource::Native(bus) => bus.clone(),
            SignalSource::Emulated(bus) => bus.clone(),
        }
    }

    /// Implementation kind.
    pub fn kind(&self) -> BusKind {
        match self {
            SignalSource::Native(_) => BusKind::Native,
            SignalSource::Emulated(_) => BusKind::Emulated,
        }
    }

    /// Host entry points, when the source is emulated.
    pub fn notifier(&self) -> Option<LegacyNotifier> {
        match self {
            SignalSource::Emulated(bus) => Some(LegacyNotifier::new(Arc::clone(bus))),
            SignalSource::Native(_) => None,
        }
    }

    /// The native bus, when the source is native.
    pub fn native(&self) -> Option<&Arc<NativeBus>> {
        match self {
            SignalSource::Native(bus) => Some(bus),
            SignalSource::Emulated(_) => None,
        }
    }
}
