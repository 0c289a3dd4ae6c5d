//! # Emulated signal bus.
//!
//! For platforms without native lifecycle signals the host drives the bus
//! itself: it calls the matching [`LegacyNotifier`] method from each of its
//! own lifecycle hook sites, and the notifier posts the emulated signal name.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecast::{EmulatedBus, LegacyNotifier, SignalBus};
//!
//! let bus = Arc::new(EmulatedBus::new());
//! let notifier = LegacyNotifier::new(Arc::clone(&bus));
//!
//! // from the host's own launch hook:
//! notifier.did_finish_launching();
//! ```

use std::sync::Arc;

use tracing::trace;

use crate::error::BusError;
use crate::lifecycle::LifecyclePhase;

use super::{BusKind, HandlerTable, SignalBus, SignalHandler, SignalName, SignalNames};

/// In-memory bus posted to directly by the host.
pub struct EmulatedBus {
    names: SignalNames,
    table: HandlerTable,
}

impl EmulatedBus {
    /// Creates a bus carrying [`SignalNames::emulated`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(SignalNames::emulated())
    }

    /// Creates a bus carrying a custom naming scheme.
    #[must_use]
    pub fn with_names(names: SignalNames) -> Self {
        Self {
            names,
            table: HandlerTable::default(),
        }
    }
}

impl Default for EmulatedBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus for EmulatedBus {
    fn names(&self) -> &SignalNames {
        &self.names
    }

    fn kind(&self) -> BusKind {
        BusKind::Emulated
    }

    fn subscribe(&self, name: SignalName, handler: SignalHandler) -> Result<(), BusError> {
        self.table.subscribe(name, handler);
        Ok(())
    }

    fn post(&self, name: &SignalName) {
        let ran = self.table.post(name);
        trace!(signal = %name, handlers = ran, "emulated signal posted");
    }
}

/// Host-facing entry points of the emulated bus.
///
/// Each method posts one emulated signal. Call them from the host's own
/// lifecycle callbacks; nothing else drives an emulated bus.
#[derive(Clone)]
pub struct LegacyNotifier {
    bus: Arc<EmulatedBus>,
}

impl LegacyNotifier {
    /// Wraps `bus`.
    pub fn new(bus: Arc<EmulatedBus>) -> Self {
        Self { bus }
    }

    /// Posts the signal of `phase`.
    pub fn notify(&self, phase: LifecyclePhase) {
        self.bus.post(self.bus.names.get(phase));
    }

    /// Host finished launching.
    pub fn did_finish_launching(&self) {
        self.notify(LifecyclePhase::DidFinishLaunching);
    }

    /// Host became active.
    pub fn did_become_active(&self) {
        self.notify(LifecyclePhase::DidBecomeActive);
    }

    /// Host is about to resign active.
    pub fn will_resign_active(&self) {
        self.notify(LifecyclePhase::WillResignActive);
    }

    /// Host is about to enter the foreground.
    pub fn will_enter_foreground(&self) {
        self.notify(LifecyclePhase::WillEnterForeground);
    }

    /// Host entered the background.
    pub fn did_enter_background(&self) {
        self.notify(LifecyclePhase::DidEnterBackground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_bus() -> (Arc<EmulatedBus>, Arc<Mutex<Vec<String>>>) {
        let bus = Arc::new(EmulatedBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        for (_, name) in bus.names().iter() {
            let seen = Arc::clone(&seen);
            bus.subscribe(
                name.clone(),
                Arc::new(move |n: &SignalName| seen.lock().unwrap().push(n.to_string())),
            )
            .unwrap();
        }
        (bus, seen)
    }

    #[test]
    fn test_notifier_posts_emulated_names() {
        let (bus, seen) = recording_bus();
        let notifier = LegacyNotifier::new(Arc::clone(&bus));

        notifier.did_finish_launching();
        notifier.did_become_active();
        notifier.will_resign_active();
        notifier.did_enter_background();
        notifier.will_enter_foreground();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "dev.lifecast.application.didFinishLaunching",
                "dev.lifecast.application.didBecomeActive",
                "dev.lifecast.application.willResignActive",
                "dev.lifecast.application.didEnterBackground",
                "dev.lifecast.application.willEnterForeground",
            ]
        );
    }

    #[test]
    fn test_unrelated_post_reaches_nobody() {
        let (bus, seen) = recording_bus();
        bus.post(&SignalName::from("com.example.somethingElse"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_subscribe_never_fails() {
        let bus = EmulatedBus::default();
        assert!(bus.subscribe(SignalName::from("any"), Arc::new(|_| {})).is_ok());
        assert_eq!(bus.kind(), BusKind::Emulated);
    }
}
