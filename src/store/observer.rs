//! Observer registries for committed state changes and raw actions.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::mvi::Transition;

/// Handle returned by observer registration, used to remove the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification delivered once per committed state transition.
#[derive(Debug)]
pub struct StateChange<'a, S> {
    /// The newly committed state.
    pub state: &'a S,
    /// Metadata from the update that produced this state. `None` means the
    /// observer should use its own default presentation.
    pub transition: Option<&'a Transition>,
}

type StateObserver<S> = Arc<dyn Fn(&StateChange<'_, S>) + Send + Sync>;
type ActionObserver<A> = Arc<dyn Fn(&A) + Send + Sync>;

pub(crate) struct Observers<S, A> {
    state: RwLock<Vec<(ObserverId, StateObserver<S>)>>,
    actions: RwLock<Vec<(ObserverId, ActionObserver<A>)>>,
}

impl<S, A> Observers<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(Vec::new()),
            actions: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn add_state(&self, observer: StateObserver<S>) -> ObserverId {
        let id = ObserverId::new();
        self.state.write().push((id, observer));
        id
    }

    pub(crate) fn add_action(&self, observer: ActionObserver<A>) -> ObserverId {
        let id = ObserverId::new();
        self.actions.write().push((id, observer));
        id
    }

    /// Remove an observer of either kind. Returns false for unknown ids.
    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut state = self.state.write();
        let before = state.len();
        state.retain(|(existing, _)| *existing != id);
        if state.len() != before {
            return true;
        }
        drop(state);

        let mut actions = self.actions.write();
        let before = actions.len();
        actions.retain(|(existing, _)| *existing != id);
        actions.len() != before
    }

    // Callbacks run on a snapshot so they may register or remove observers.
    pub(crate) fn notify_state(&self, change: &StateChange<'_, S>) {
        let snapshot: Vec<StateObserver<S>> =
            self.state.read().iter().map(|(_, f)| Arc::clone(f)).collect();
        for observer in snapshot {
            observer(change);
        }
    }

    pub(crate) fn notify_action(&self, action: &A) {
        let snapshot: Vec<ActionObserver<A>> =
            self.actions.read().iter().map(|(_, f)| Arc::clone(f)).collect();
        for observer in snapshot {
            observer(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_every_state_observer() {
        let observers: Observers<i32, ()> = Observers::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            observers.add_state(Arc::new(move |change: &StateChange<'_, i32>| {
                assert_eq!(*change.state, 5);
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }

        observers.notify_state(&StateChange {
            state: &5,
            transition: None,
        });
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn remove_handles_both_kinds() {
        let observers: Observers<i32, i32> = Observers::new();
        let state_id = observers.add_state(Arc::new(|_: &StateChange<'_, i32>| {}));
        let action_id = observers.add_action(Arc::new(|_: &i32| {}));

        assert!(observers.remove(state_id));
        assert!(observers.remove(action_id));
        assert!(!observers.remove(action_id));
    }

    #[test]
    fn observer_may_register_during_notification() {
        let observers: Arc<Observers<i32, i32>> = Arc::new(Observers::new());
        let inner = Arc::clone(&observers);
        observers.add_action(Arc::new(move |_: &i32| {
            inner.add_action(Arc::new(|_: &i32| {}));
        }));

        observers.notify_action(&1);
        assert_eq!(observers.actions.read().len(), 2);
    }
}
