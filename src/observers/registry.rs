//! # Observer registry contract and default implementation.
//!
//! [`ObserverRegistry`] is the seam to whatever owns the plugin collection
//! (typically an analytics engine). [`ObserverSet`] is a ready-made registry
//! for hosts that do not have one.
//!
//! ## Rules
//! - `apply` visits every currently registered observer once; order is not part
//!   of the contract.
//! - A traversal never observes a half-mutated collection: [`ObserverSet`]
//!   iterates a snapshot, so observers added or removed during a dispatch take
//!   effect from the next one.

use std::sync::{Arc, PoisonError, RwLock};

use crate::lifecycle::Observer;

/// Owner of the observer collection.
pub trait ObserverRegistry: Send + Sync {
    /// Invokes `visitor` once per registered observer.
    fn apply(&self, visitor: &mut dyn FnMut(&dyn Observer));
}

/// Snapshot-iterating observer collection.
#[derive(Default)]
pub struct ObserverSet {
    observers: RwLock<Vec<Arc<dyn Observer>>>,
}

impl ObserverSet {
    /// Creates a set with initial observers.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observer>>) -> Self {
        Self {
            observers: RwLock::new(observers),
        }
    }

    /// Registers an observer.
    pub fn add(&self, observer: Arc<dyn Observer>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Removes every observer named `name`; returns whether any was removed.
    pub fn remove(&self, name: &str) -> bool {
        let mut g = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = g.len();
        g.retain(|o| o.name() != name);
        g.len() != before
    }

    /// Names of registered observers, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.snapshot().iter().map(|o| o.name().to_owned()).collect()
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ObserverRegistry for ObserverSet {
    fn apply(&self, visitor: &mut dyn FnMut(&dyn Observer)) {
        for observer in self.snapshot() {
            visitor(observer.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Observer for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_add_remove() {
        let set = ObserverSet::new(vec![Arc::new(Named("a")), Arc::new(Named("b"))]);
        set.add(Arc::new(Named("c")));
        assert_eq!(set.names(), ["a", "b", "c"]);

        assert!(set.remove("b"));
        assert!(!set.remove("b"));
        assert_eq!(set.names(), ["a", "c"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_apply_visits_each_once() {
        let set = ObserverSet::new(vec![Arc::new(Named("a")), Arc::new(Named("b"))]);
        let mut visited = Vec::new();
        set.apply(&mut |o| visited.push(o.name().to_owned()));
        assert_eq!(visited, ["a", "b"]);
    }

    #[test]
    fn test_mutation_during_apply_affects_next_traversal() {
        let set = Arc::new(ObserverSet::new(vec![Arc::new(Named("a"))]));
        let mut visited = 0;
        set.apply(&mut |_| {
            visited += 1;
            set.add(Arc::new(Named("late")));
        });
        assert_eq!(visited, 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_default_name_is_type_name() {
        struct Anonymous;
        impl Observer for Anonymous {}

        let set = ObserverSet::default();
        set.add(Arc::new(Anonymous));
        assert!(set.names()[0].ends_with("Anonymous"));
    }
}
