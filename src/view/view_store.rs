//! Closure-backed projections of a store.

use std::sync::Arc;

use super::store_like::StoreLike;

/// A read/dispatch facade with no storage of its own.
///
/// Holds closures, never a snapshot, so it is cheap to build on demand and
/// always reflects the parent's current state.
pub struct ViewStore<S, A> {
    read: Arc<dyn Fn() -> S + Send + Sync>,
    dispatch: Arc<dyn Fn(A) + Send + Sync>,
}

impl<S, A> ViewStore<S, A> {
    pub fn new(
        read: impl Fn() -> S + Send + Sync + 'static,
        dispatch: impl Fn(A) + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Arc::new(read),
            dispatch: Arc::new(dispatch),
        }
    }

    /// A view pinned to `state` that ignores every action (previews, tests).
    pub fn constant(state: S) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        Self::new(move || state.clone(), |_| {})
    }
}

impl<S, A> Clone for ViewStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            read: Arc::clone(&self.read),
            dispatch: Arc::clone(&self.dispatch),
        }
    }
}

impl<S: 'static, A: 'static> StoreLike for ViewStore<S, A> {
    type State = S;
    type Action = A;

    fn read(&self) -> S {
        (self.read)()
    }

    fn dispatch(&self, action: A) {
        (self.dispatch)(action)
    }
}
