//! # Signal names and naming schemes.
//!
//! A [`SignalName`] is an opaque, namespaced string. Each bus carries exactly
//! one [`SignalNames`] scheme: five names, one per [`LifecyclePhase`].
//!
//! ## Stable names
//! | Phase               | Emulated                                        | Native                                    |
//! |---------------------|-------------------------------------------------|-------------------------------------------|
//! | DidFinishLaunching  | `dev.lifecast.application.didFinishLaunching`   | `platform.application.didFinishLaunching` |
//! | DidBecomeActive     | `dev.lifecast.application.didBecomeActive`      | `platform.application.didBecomeActive`    |
//! | WillResignActive    | `dev.lifecast.application.willResignActive`     | `platform.application.willResignActive`   |
//! | WillEnterForeground | `dev.lifecast.application.willEnterForeground`  | `platform.application.willEnterForeground`|
//! | DidEnterBackground  | `dev.lifecast.application.didEnterBackground`   | `platform.application.didEnterBackground` |
//!
//! External code may post the emulated names directly; they will not change.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::lifecycle::LifecyclePhase;

/// Opaque signal identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalName(Arc<str>);

impl SignalName {
    /// Creates a signal name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// String form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SignalName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SignalName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for SignalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// Namespace prefix of the emulated bus.
pub const EMULATED_PREFIX: &str = "dev.lifecast.application";
/// Namespace prefix of the native bus.
pub const NATIVE_PREFIX: &str = "platform.application";

/// Naming scheme of one bus: one signal name per phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalNames {
    did_finish_launching: SignalName,
    did_become_active: SignalName,
    will_resign_active: SignalName,
    will_enter_foreground: SignalName,
    did_enter_background: SignalName,
}

impl SignalNames {
    /// Builds a scheme by prefixing the event names with `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        let name = |event: &str| SignalName::new(format!("{prefix}.{event}"));
        Self {
            did_finish_launching: name("didFinishLaunching"),
            did_become_active: name("didBecomeActive"),
            will_resign_active: name("willResignActive"),
            will_enter_foreground: name("willEnterForeground"),
            did_enter_background: name("didEnterBackground"),
        }
    }

    /// Builds a scheme from explicit names, in [`LifecyclePhase::ALL`] order.
    ///
    /// Uniqueness is checked when a dispatcher subscribes, not here.
    pub fn from_names(names: [SignalName; 5]) -> Self {
        let [
            did_finish_launching,
            did_become_active,
            will_resign_active,
            will_enter_foreground,
            did_enter_background,
        ] = names;
        Self {
            did_finish_launching,
            did_become_active,
            will_resign_active,
            will_enter_foreground,
            did_enter_background,
        }
    }

    /// Scheme carried by [`EmulatedBus`](crate::EmulatedBus).
    pub fn emulated() -> Self {
        Self::with_prefix(EMULATED_PREFIX)
    }

    /// Scheme carried by [`NativeBus`](crate::NativeBus).
    pub fn native() -> Self {
        Self::with_prefix(NATIVE_PREFIX)
    }

    /// Signal name of `phase`.
    pub fn get(&self, phase: LifecyclePhase) -> &SignalName {
        match phase {
            LifecyclePhase::DidFinishLaunching => &self.did_finish_launching,
            LifecyclePhase::DidBecomeActive => &self.did_become_active,
            LifecyclePhase::WillResignActive => &self.will_resign_active,
            LifecyclePhase::WillEnterForeground => &self.will_enter_foreground,
            LifecyclePhase::DidEnterBackground => &self.did_enter_background,
        }
    }

    /// Iterates `(phase, name)` pairs in [`LifecyclePhase::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LifecyclePhase, &SignalName)> + '_ {
        LifecyclePhase::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}
