//! # Native signal bus.
//!
//! [`NativeBus`] is fed by platform glue (FFI callbacks, a windowing event
//! loop, an OS notification observer) that may run on any thread. The glue
//! hands native signal names to a [`NativeSender`]; [`NativeBus::run`] drains
//! them on one task and posts each in receipt order, so handlers never run
//! concurrently.
//!
//! ## Architecture
//! ```text
//! platform thread A ──┐
//! platform thread B ──┼──► NativeSender::deliver ──► [bounded queue] ──► run() ──► post(name)
//! platform thread N ──┘          (try_send)                            (one task)
//! ```
//!
//! ## Rules
//! - **Non-blocking delivery**: `deliver()` never waits; on a full queue the signal
//!   is dropped (warn) and [`BusError::QueueFull`] returned. Signals are at-most-once.
//! - **Single pump**: `run()` may be started once; a second call fails with
//!   [`BusError::AlreadyRunning`].
//! - **Closing**: when `run()` returns the bus is closed; later subscriptions and
//!   deliveries fail with [`BusError::Closed`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::error::BusError;
use crate::lifecycle::LifecyclePhase;

use super::{BusKind, HandlerTable, SignalBus, SignalHandler, SignalName, SignalNames};

/// Platform-driven bus pumped onto a single task.
pub struct NativeBus {
    names: SignalNames,
    table: HandlerTable,
    tx: mpsc::Sender<SignalName>,
    rx: Mutex<Option<mpsc::Receiver<SignalName>>>,
    closed: AtomicBool,
}

impl NativeBus {
    /// Creates a bus carrying [`SignalNames::native`] with the given queue capacity.
    ///
    /// The minimum capacity is 1 (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_names(SignalNames::native(), capacity)
    }

    /// Creates a bus carrying a custom naming scheme.
    #[must_use]
    pub fn with_names(names: SignalNames, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self {
            names,
            table: HandlerTable::default(),
            tx,
            rx: Mutex::new(Some(rx)),
            closed: AtomicBool::new(false),
        }
    }

    /// Returns a thread-safe handle for the platform glue.
    pub fn sender(&self) -> NativeSender {
        NativeSender {
            tx: self.tx.clone(),
            names: self.names.clone(),
        }
    }

    /// True once the pump has exited.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Drains delivered signals and posts them until `token` is cancelled.
    pub async fn run(&self, token: CancellationToken) -> Result<(), BusError> {
        let mut rx = self
            .rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(BusError::AlreadyRunning)?;

        debug!("native signal pump started");
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                msg = rx.recv() => match msg {
                    Some(name) => self.post(&name),
                    None => break,
                }
            }
        }

        self.closed.store(true, Ordering::Release);
        drop(rx);
        debug!("native signal pump stopped");
        Ok(())
    }
}

impl SignalBus for NativeBus {
    fn names(&self) -> &SignalNames {
        &self.names
    }

    fn kind(&self) -> BusKind {
        BusKind::Native
    }

    fn subscribe(&self, name: SignalName, handler: SignalHandler) -> Result<(), BusError> {
        if self.is_closed() {
            return Err(BusError::Closed);
        }
        self.table.subscribe(name, handler);
        Ok(())
    }

    fn post(&self, name: &SignalName) {
        let ran = self.table.post(name);
        trace!(signal = %name, handlers = ran, "native signal posted");
    }
}

/// Cloneable delivery handle used by platform glue.
#[derive(Clone)]
pub struct NativeSender {
    tx: mpsc::Sender<SignalName>,
    names: SignalNames,
}

impl NativeSender {
    /// Queues a raw native signal name.
    pub fn deliver(&self, name: SignalName) -> Result<(), BusError> {
        match self.tx.try_send(name) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(name)) => {
                warn!(signal = %name, "native signal dropped: queue full");
                Err(BusError::QueueFull { name })
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(BusError::Closed),
        }
    }

    /// Queues the native signal of `phase`.
    pub fn deliver_phase(&self, phase: LifecyclePhase) -> Result<(), BusError> {
        self.deliver(self.names.get(phase).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_pump_posts_in_receipt_order() {
        let bus = Arc::new(NativeBus::new(8));
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel::<String>();
        for (_, name) in bus.names().iter() {
            let seen_tx = seen_tx.clone();
            bus.subscribe(
                name.clone(),
                Arc::new(move |n: &SignalName| {
                    let _ = seen_tx.send(n.to_string());
                }),
            )
            .unwrap();
        }

        let sender = bus.sender();
        sender.deliver_phase(LifecyclePhase::DidFinishLaunching).unwrap();
        sender.deliver_phase(LifecyclePhase::DidEnterBackground).unwrap();
        sender.deliver_phase(LifecyclePhase::WillEnterForeground).unwrap();

        let token = CancellationToken::new();
        let pump = {
            let bus = Arc::clone(&bus);
            let token = token.clone();
            tokio::spawn(async move { bus.run(token).await })
        };

        let mut got = Vec::new();
        for _ in 0..3 {
            got.push(seen_rx.recv().await.unwrap());
        }
        assert_eq!(
            got,
            vec![
                "platform.application.didFinishLaunching",
                "platform.application.didEnterBackground",
                "platform.application.willEnterForeground",
            ]
        );

        token.cancel();
        assert_eq!(pump.await.unwrap(), Ok(()));
        assert!(bus.is_closed());
        assert_eq!(
            bus.subscribe(SignalName::from("late"), Arc::new(|_| {})),
            Err(BusError::Closed)
        );
        assert_eq!(
            sender.deliver_phase(LifecyclePhase::DidBecomeActive),
            Err(BusError::Closed)
        );
    }

    #[test]
    fn test_full_queue_drops_signal() {
        let bus = NativeBus::new(1);
        let sender = bus.sender();

        assert!(sender.deliver_phase(LifecyclePhase::DidBecomeActive).is_ok());
        let err = sender
            .deliver_phase(LifecyclePhase::WillResignActive)
            .unwrap_err();
        assert_eq!(err.as_label(), "bus_queue_full");
        assert_eq!(
            err,
            BusError::QueueFull {
                name: SignalName::from("platform.application.willResignActive")
            }
        );
    }

    #[tokio::test]
    async fn test_second_run_is_rejected() {
        let bus = NativeBus::new(4);
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(bus.run(token.clone()).await, Ok(()));
        assert_eq!(bus.run(token).await, Err(BusError::AlreadyRunning));
    }
}
