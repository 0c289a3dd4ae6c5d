//! # Platform context token.
//!
//! [`PlatformContext`] is handed to every lifecycle handler. The dispatcher
//! never looks inside it; hosts attach whatever platform handle their
//! observers need (an extension object, a window, a runtime handle).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque, cheaply cloneable platform token.
#[derive(Clone)]
pub struct PlatformContext {
    platform: Arc<str>,
    handle: Option<Arc<dyn Any + Send + Sync>>,
}

impl PlatformContext {
    /// Creates a context labelled with the platform name.
    pub fn new(platform: impl Into<Arc<str>>) -> Self {
        Self {
            platform: platform.into(),
            handle: None,
        }
    }

    /// Attaches a platform handle.
    #[must_use]
    pub fn with_handle<T: Any + Send + Sync>(mut self, handle: T) -> Self {
        self.handle = Some(Arc::new(handle));
        self
    }

    /// Platform label.
    #[inline]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the attached handle if it is a `T`.
    pub fn handle<T: Any>(&self) -> Option<&T> {
        self.handle.as_deref()?.downcast_ref::<T>()
    }
}

impl Default for PlatformContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformContext")
            .field("platform", &self.platform)
            .field("has_handle", &self.handle.is_some())
            .finish()
    }
}
