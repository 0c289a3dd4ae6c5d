//! # Monitor builder.
//!
//! Wires the pieces together: capability check → signal source → dispatcher.
//!
//! ```text
//! MonitorBuilder::new(cfg)
//!     .with_registry(registry)     (required)
//!     .with_context(ctx)           (optional)
//!     .build()
//!         ├─► SignalSource::select(&cfg)      (once)
//!         └─► LifecycleDispatcher::with_context(bus, registry, ctx)
//! ```

use std::sync::Arc;

use tracing::info;

use crate::error::DispatchError;
use crate::lifecycle::PlatformContext;
use crate::observers::ObserverRegistry;
use crate::signals::{LegacyNotifier, NativeBus, SignalSource};

use super::{Config, LifecycleDispatcher};

/// Builder for a [`Monitor`].
pub struct MonitorBuilder {
    cfg: Config,
    registry: Option<Arc<dyn ObserverRegistry>>,
    context: PlatformContext,
}

impl MonitorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registry: None,
            context: PlatformContext::default(),
        }
    }

    /// Sets the registry whose observers receive lifecycle phases.
    pub fn with_registry(mut self, registry: Arc<dyn ObserverRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the context handed to every observer handler.
    pub fn with_context(mut self, context: PlatformContext) -> Self {
        self.context = context;
        self
    }

    /// Selects the signal source and subscribes the dispatcher to it.
    ///
    /// # Errors
    /// [`DispatchError::MissingRegistry`] without a registry, or any
    /// construction error of [`LifecycleDispatcher`].
    pub fn build(self) -> Result<Monitor, DispatchError> {
        let registry = self.registry.ok_or(DispatchError::MissingRegistry)?;
        let source = SignalSource::select(&self.cfg);
        let dispatcher = LifecycleDispatcher::with_context(source.bus(), registry, self.context)?;

        info!(bus = %source.kind(), "lifecycle monitor ready");
        Ok(Monitor { dispatcher, source })
    }
}

/// A dispatcher bound to the signal source selected for this process.
#[derive(Clone)]
pub struct Monitor {
    dispatcher: Arc<LifecycleDispatcher>,
    source: SignalSource,
}

impl Monitor {
    /// Shorthand for [`MonitorBuilder::new`].
    pub fn builder(cfg: Config) -> MonitorBuilder {
        MonitorBuilder::new(cfg)
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &Arc<LifecycleDispatcher> {
        &self.dispatcher
    }

    /// The selected signal source.
    pub fn source(&self) -> &SignalSource {
        &self.source
    }

    /// Host entry points; `None` on platforms with native signals.
    pub fn notifier(&self) -> Option<LegacyNotifier> {
        self.source.notifier()
    }

    /// Native bus to pump and feed; `None` on emulated platforms.
    pub fn native(&self) -> Option<&Arc<NativeBus>> {
        self.source.native()
    }
}
