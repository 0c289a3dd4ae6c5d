//! # Monitor configuration.
//!
//! Provides [`Config`], the only tunables of the lifecycle monitor: which
//! signal source the platform supports, and how deep the native queue is.

/// Configuration for [`MonitorBuilder`](crate::MonitorBuilder).
///
/// ## Field semantics
/// - `native_signals`: platform capability flag; `true` selects [`NativeBus`](crate::NativeBus),
///   `false` selects [`EmulatedBus`](crate::EmulatedBus)
/// - `native_queue_capacity`: bounded queue between platform glue and the native pump (min 1)
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether the platform delivers lifecycle signals natively.
    ///
    /// Evaluated once when the monitor is built.
    pub native_signals: bool,

    /// Capacity of the native delivery queue.
    ///
    /// Signals delivered while the queue is full are dropped. Ignored for the
    /// emulated source.
    pub native_queue_capacity: usize,
}

impl Config {
    /// Returns the native queue capacity clamped to a minimum of 1.
    #[inline]
    pub fn native_queue_capacity_clamped(&self) -> usize {
        self.native_queue_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `native_signals = false` (host-driven emulation)
    /// - `native_queue_capacity = 64` (lifecycle traffic is sparse)
    fn default() -> Self {
        Self {
            native_signals: false,
            native_queue_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_clamped() {
        let cfg = Config {
            native_queue_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.native_queue_capacity_clamped(), 1);
        assert_eq!(Config::default().native_queue_capacity_clamped(), 64);
    }
}
