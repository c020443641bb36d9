//! Cursor traits and their inline closure forms.

use std::sync::Arc;

/// Maps a child component's state and actions into a parent's.
///
/// Implementations are stateless: `get` reads the child slice, `set` writes it
/// back, `tag` wraps a child action as a parent action. For every reachable
/// `outer`, `get(&set(outer, inner)) == inner`, and `set` leaves everything
/// outside the slice untouched.
pub trait Cursor {
    type Outer;
    type Inner;
    type OuterAction;
    type InnerAction;

    fn get(&self, outer: &Self::Outer) -> Self::Inner;
    fn set(&self, outer: Self::Outer, inner: Self::Inner) -> Self::Outer;
    fn tag(&self, action: Self::InnerAction) -> Self::OuterAction;
}

/// Cursor into one element of a keyed collection.
///
/// `get` returns `None` when the key is absent, which happens routinely when
/// an item is removed while an action addressed to it is still in flight.
pub trait KeyedCursor {
    type Outer;
    type Inner;
    type OuterAction;
    type InnerAction;
    type Key;

    fn get(&self, outer: &Self::Outer, key: &Self::Key) -> Option<Self::Inner>;
    fn set(&self, outer: Self::Outer, inner: Self::Inner, key: &Self::Key) -> Self::Outer;
    fn tag(&self, action: Self::InnerAction, key: &Self::Key) -> Self::OuterAction;
}

/// Inline [`Cursor`] built from three closures.
pub struct Lens<O, I, OA, IA> {
    get: Arc<dyn Fn(&O) -> I + Send + Sync>,
    set: Arc<dyn Fn(O, I) -> O + Send + Sync>,
    tag: Arc<dyn Fn(IA) -> OA + Send + Sync>,
}

impl<O, I, OA, IA> Lens<O, I, OA, IA> {
    pub fn new(
        get: impl Fn(&O) -> I + Send + Sync + 'static,
        set: impl Fn(O, I) -> O + Send + Sync + 'static,
        tag: impl Fn(IA) -> OA + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
            tag: Arc::new(tag),
        }
    }
}

impl<O, I, OA, IA> Clone for Lens<O, I, OA, IA> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
            tag: Arc::clone(&self.tag),
        }
    }
}

impl<O, I, OA, IA> Cursor for Lens<O, I, OA, IA> {
    type Outer = O;
    type Inner = I;
    type OuterAction = OA;
    type InnerAction = IA;

    fn get(&self, outer: &O) -> I {
        (self.get)(outer)
    }

    fn set(&self, outer: O, inner: I) -> O {
        (self.set)(outer, inner)
    }

    fn tag(&self, action: IA) -> OA {
        (self.tag)(action)
    }
}

/// Inline [`KeyedCursor`] built from three closures.
pub struct KeyedLens<O, I, OA, IA, K> {
    get: Arc<dyn Fn(&O, &K) -> Option<I> + Send + Sync>,
    set: Arc<dyn Fn(O, I, &K) -> O + Send + Sync>,
    tag: Arc<dyn Fn(IA, &K) -> OA + Send + Sync>,
}

impl<O, I, OA, IA, K> KeyedLens<O, I, OA, IA, K> {
    pub fn new(
        get: impl Fn(&O, &K) -> Option<I> + Send + Sync + 'static,
        set: impl Fn(O, I, &K) -> O + Send + Sync + 'static,
        tag: impl Fn(IA, &K) -> OA + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
            tag: Arc::new(tag),
        }
    }
}

impl<O, I, OA, IA, K> Clone for KeyedLens<O, I, OA, IA, K> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
            tag: Arc::clone(&self.tag),
        }
    }
}

impl<O, I, OA, IA, K> KeyedCursor for KeyedLens<O, I, OA, IA, K> {
    type Outer = O;
    type Inner = I;
    type OuterAction = OA;
    type InnerAction = IA;
    type Key = K;

    fn get(&self, outer: &O, key: &K) -> Option<I> {
        (self.get)(outer, key)
    }

    fn set(&self, outer: O, inner: I, key: &K) -> O {
        (self.set)(outer, inner, key)
    }

    fn tag(&self, action: IA, key: &K) -> OA {
        (self.tag)(action, key)
    }
}
