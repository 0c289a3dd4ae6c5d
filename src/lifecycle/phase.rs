//! # Lifecycle phases.
//!
//! [`LifecyclePhase`] is a closed set: every signal a bus carries is either one
//! of these five phases or ignored.

use std::fmt;

use super::{Lifecycle, PlatformContext};

/// Canonical application-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Application finished launching.
    DidFinishLaunching,
    /// Application became active (receives input).
    DidBecomeActive,
    /// Application is about to stop being active.
    WillResignActive,
    /// Application is about to move from background to foreground.
    ///
    /// Subject to suppression: never delivered before the first
    /// [`LifecyclePhase::DidEnterBackground`].
    WillEnterForeground,
    /// Application moved to the background.
    DidEnterBackground,
}

impl LifecyclePhase {
    /// All phases, in subscription order.
    pub const ALL: [LifecyclePhase; 5] = [
        LifecyclePhase::DidFinishLaunching,
        LifecyclePhase::DidBecomeActive,
        LifecyclePhase::WillResignActive,
        LifecyclePhase::WillEnterForeground,
        LifecyclePhase::DidEnterBackground,
    ];

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(self) -> &'static str {
        match self {
            LifecyclePhase::DidFinishLaunching => "did_finish_launching",
            LifecyclePhase::DidBecomeActive => "did_become_active",
            LifecyclePhase::WillResignActive => "will_resign_active",
            LifecyclePhase::WillEnterForeground => "will_enter_foreground",
            LifecyclePhase::DidEnterBackground => "did_enter_background",
        }
    }

    /// Invokes the one handler of `target` matching this phase.
    #[inline]
    pub fn notify(self, target: &dyn Lifecycle, ctx: &PlatformContext) {
        match self {
            LifecyclePhase::DidFinishLaunching => target.did_finish_launching(ctx),
            LifecyclePhase::DidBecomeActive => target.did_become_active(ctx),
            LifecyclePhase::WillResignActive => target.will_resign_active(ctx),
            LifecyclePhase::WillEnterForeground => target.will_enter_foreground(ctx),
            LifecyclePhase::DidEnterBackground => target.did_enter_background(ctx),
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<&'static str>>,
    }

    impl Recorder {
        fn push(&self, label: &'static str) {
            self.calls.lock().unwrap().push(label);
        }
    }

    impl Lifecycle for Recorder {
        fn did_finish_launching(&self, _: &PlatformContext) {
            self.push("launch");
        }
        fn did_become_active(&self, _: &PlatformContext) {
            self.push("active");
        }
        fn will_resign_active(&self, _: &PlatformContext) {
            self.push("resign");
        }
        fn will_enter_foreground(&self, _: &PlatformContext) {
            self.push("foreground");
        }
        fn did_enter_background(&self, _: &PlatformContext) {
            self.push("background");
        }
    }

    #[test]
    fn test_notify_calls_exactly_matching_handler() {
        let expected = ["launch", "active", "resign", "foreground", "background"];
        let ctx = PlatformContext::default();

        for (phase, label) in LifecyclePhase::ALL.into_iter().zip(expected) {
            let rec = Recorder::default();
            phase.notify(&rec, &ctx);
            assert_eq!(*rec.calls.lock().unwrap(), vec![label], "phase {phase}");
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = LifecyclePhase::ALL.iter().map(|p| p.as_label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), LifecyclePhase::ALL.len());
    }
}
