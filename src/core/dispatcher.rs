//! # Lifecycle dispatcher.
//!
//! [`LifecycleDispatcher`] turns raw bus signals into lifecycle phases and
//! fans each phase out to every observer that implements [`Lifecycle`].
//!
//! ## Per-signal flow
//! ```text
//! bus.post(name)
//!   └─► receive(name)
//!         ├─ name not one of the five ─────────► ignored (trace)
//!         └─ phase ─► delivery lock ─► inbox ─► drain
//!                                └─► deliver(phase)
//!                                      ├─ WillEnterForeground && !was_backgrounded ─► suppressed
//!                                      ├─ DidEnterBackground ─► was_backgrounded = true
//!                                      └─ registry.apply(visitor)
//!                                            ├─ observer.lifecycle() == None ─► skipped
//!                                            └─ catch_unwind(phase.notify(..))
//!                                                  └─ panic ─► error!, next observer
//! ```
//!
//! ## Suppression
//! The platform fires a foreground transition right after launch, although the
//! application was never in the background. Until the first
//! `DidEnterBackground` every `WillEnterForeground` is dropped. The flag only
//! ever goes `false -> true`; it is set before observers see the background
//! phase, and no observer fault can reset it.
//!
//! ## Serialization
//! A caller holds the delivery lock for its whole drain, so state read/write
//! and traversal never interleave. A post from another thread blocks on that
//! lock and returns only after its own phase has been delivered. A post from
//! inside an observer handler (the draining thread itself) is queued in the
//! inbox and delivered after the current dispatch finishes.

use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use tracing::{debug, error, info, trace};

use crate::error::DispatchError;
use crate::lifecycle::{LifecyclePhase, Observer, PlatformContext};
use crate::observers::ObserverRegistry;
use crate::signals::{BusKind, SignalBus, SignalName, SignalNames};

/// Receives lifecycle signals from one bus and fans them out to observers.
pub struct LifecycleDispatcher {
    routes: HashMap<SignalName, LifecyclePhase>,
    registry: Arc<dyn ObserverRegistry>,
    context: PlatformContext,
    bus_kind: BusKind,
    was_backgrounded: AtomicBool,
    delivery: Mutex<()>,
    inbox: Mutex<Inbox>,
}

/// Phases posted re-entrantly by the thread holding the delivery lock.
#[derive(Default)]
struct Inbox {
    pending: VecDeque<LifecyclePhase>,
    drainer: Option<ThreadId>,
}

/// Summary of one delivered phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DispatchReport {
    pub(crate) phase: LifecyclePhase,
    pub(crate) delivered: usize,
    pub(crate) skipped: usize,
    pub(crate) faulted: usize,
}

impl LifecycleDispatcher {
    /// Subscribes to the five lifecycle signals of `bus`.
    ///
    /// Equivalent to [`with_context`](Self::with_context) with a default context.
    pub fn new(
        bus: Arc<dyn SignalBus>,
        registry: Arc<dyn ObserverRegistry>,
    ) -> Result<Arc<Self>, DispatchError> {
        Self::with_context(bus, registry, PlatformContext::default())
    }

    /// Subscribes to the five lifecycle signals of `bus`, handing `context`
    /// to every observer handler.
    ///
    /// Subscriptions are permanent; the bus only keeps a weak reference, so
    /// dropping the dispatcher makes its handlers inert.
    ///
    /// # Errors
    /// - [`DispatchError::DuplicateSignal`] if the bus naming scheme is not bijective
    /// - [`DispatchError::Subscribe`] if the bus refuses a subscription
    pub fn with_context(
        bus: Arc<dyn SignalBus>,
        registry: Arc<dyn ObserverRegistry>,
        context: PlatformContext,
    ) -> Result<Arc<Self>, DispatchError> {
        let routes = routes(bus.names())?;
        let me = Arc::new(Self {
            routes,
            registry,
            context,
            bus_kind: bus.kind(),
            was_backgrounded: AtomicBool::new(false),
            delivery: Mutex::new(()),
            inbox: Mutex::new(Inbox::default()),
        });

        for (_, name) in bus.names().iter() {
            let weak = Arc::downgrade(&me);
            bus.subscribe(
                name.clone(),
                Arc::new(move |signal: &SignalName| {
                    if let Some(dispatcher) = weak.upgrade() {
                        dispatcher.receive(signal);
                    }
                }),
            )
            .map_err(|source| DispatchError::Subscribe {
                name: name.clone(),
                source,
            })?;
        }

        debug!(bus = %me.bus_kind, "lifecycle dispatcher subscribed");
        Ok(me)
    }

    /// True once a `DidEnterBackground` has been received.
    #[inline]
    pub fn was_backgrounded(&self) -> bool {
        self.was_backgrounded.load(Ordering::Acquire)
    }

    /// Kind of the bus this dispatcher listens on.
    pub fn bus_kind(&self) -> BusKind {
        self.bus_kind
    }

    /// Entry point for bus handlers.
    fn receive(&self, signal: &SignalName) {
        let Some(&phase) = self.routes.get(signal) else {
            trace!(%signal, "ignoring unmapped signal");
            return;
        };

        let me = thread::current().id();
        {
            let mut inbox = self.lock_inbox();
            if inbox.drainer == Some(me) {
                inbox.pending.push_back(phase);
                return;
            }
        }

        let _delivery = self
            .delivery
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        {
            let mut inbox = self.lock_inbox();
            inbox.drainer = Some(me);
            inbox.pending.push_back(phase);
        }

        let _guard = DrainGuard(self);
        loop {
            let next = self.lock_inbox().pending.pop_front();
            match next {
                Some(phase) => {
                    self.deliver(phase);
                }
                None => break,
            }
        }
    }

    /// Applies suppression and state update, then notifies observers.
    ///
    /// Returns `None` when the phase was suppressed.
    fn deliver(&self, phase: LifecyclePhase) -> Option<DispatchReport> {
        match phase {
            LifecyclePhase::WillEnterForeground if !self.was_backgrounded() => {
                debug!(phase = phase.as_label(), "suppressed: never backgrounded");
                return None;
            }
            LifecyclePhase::DidEnterBackground => {
                if !self.was_backgrounded.swap(true, Ordering::AcqRel) {
                    info!("first background observed; foreground delivery enabled");
                }
            }
            _ => {}
        }

        let mut report = DispatchReport {
            phase,
            delivered: 0,
            skipped: 0,
            faulted: 0,
        };

        self.registry.apply(&mut |observer: &dyn Observer| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| match observer.lifecycle() {
                Some(target) => {
                    phase.notify(target, &self.context);
                    true
                }
                None => false,
            }));
            match outcome {
                Ok(true) => report.delivered += 1,
                Ok(false) => report.skipped += 1,
                Err(panic_err) => {
                    report.faulted += 1;
                    error!(
                        observer = observer.name(),
                        phase = phase.as_label(),
                        reason = %panic_message(&*panic_err),
                        "lifecycle observer panicked"
                    );
                }
            }
        });

        debug!(
            phase = report.phase.as_label(),
            delivered = report.delivered,
            skipped = report.skipped,
            faulted = report.faulted,
            "lifecycle phase dispatched"
        );
        Some(report)
    }

    fn lock_inbox(&self) -> MutexGuard<'_, Inbox> {
        self.inbox.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the drain role before the delivery lock, also when delivery
/// unwinds (a panicking registry). Only the drainer's own re-entrant phases
/// can be pending here.
struct DrainGuard<'a>(&'a LifecycleDispatcher);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        let mut inbox = self.0.lock_inbox();
        inbox.pending.clear();
        inbox.drainer = None;
    }
}

/// Builds the signal → phase bijection of a naming scheme.
fn routes(names: &SignalNames) -> Result<HashMap<SignalName, LifecyclePhase>, DispatchError> {
    let mut routes = HashMap::with_capacity(LifecyclePhase::ALL.len());
    for (phase, name) in names.iter() {
        if let Some(first) = routes.insert(name.clone(), phase) {
            return Err(DispatchError::DuplicateSignal {
                name: name.clone(),
                first,
                second: phase,
            });
        }
    }
    Ok(routes)
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
