//! The read/dispatch contract shared by stores and their projections.

use std::sync::Arc;

use crate::cursor::{Cursor, KeyedCursor};
use crate::mvi::Model;
use crate::store::Store;

use super::binding::Binding;
use super::view_store::ViewStore;

/// Anything that can report a current state and accept actions.
///
/// Implemented by [`Store`] and [`ViewStore`], so a projection of a
/// projection behaves exactly like a projection of the root store.
pub trait StoreLike: Clone + Send + Sync + 'static {
    type State;
    type Action;

    fn read(&self) -> Self::State;
    fn dispatch(&self, action: Self::Action);

    /// Project onto the child slice selected by `cursor`.
    ///
    /// The view re-reads the parent on every `read` and tags every action
    /// on its way up.
    fn scope<C>(&self, cursor: C) -> ViewStore<C::Inner, C::InnerAction>
    where
        C: Cursor<Outer = Self::State, OuterAction = Self::Action> + Send + Sync + 'static,
    {
        let cursor = Arc::new(cursor);
        let reader = self.clone();
        let read_cursor = Arc::clone(&cursor);
        let sender = self.clone();
        ViewStore::new(
            move || read_cursor.get(&reader.read()),
            move |action| sender.dispatch(cursor.tag(action)),
        )
    }

    /// Project onto one element of a keyed collection.
    ///
    /// Reads yield `None` once the element is gone; actions sent after that
    /// are dropped by the parent's keyed update.
    fn scope_keyed<C>(&self, cursor: C, key: C::Key) -> ViewStore<Option<C::Inner>, C::InnerAction>
    where
        C: KeyedCursor<Outer = Self::State, OuterAction = Self::Action> + Send + Sync + 'static,
        C::Key: Send + Sync + 'static,
    {
        let cursor = Arc::new(cursor);
        let key = Arc::new(key);
        let reader = self.clone();
        let read_cursor = Arc::clone(&cursor);
        let read_key = Arc::clone(&key);
        let sender = self.clone();
        ViewStore::new(
            move || read_cursor.get(&reader.read(), &read_key),
            move |action| sender.dispatch(cursor.tag(action, &key)),
        )
    }

    /// Two-way binding: reads through `get`, writes dispatch `tag(value)`.
    fn binding<V, G, T>(&self, get: G, tag: T) -> Binding<V>
    where
        G: Fn(&Self::State) -> V + Send + Sync + 'static,
        T: Fn(V) -> Self::Action + Send + Sync + 'static,
    {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(
            move || get(&reader.read()),
            move |value| writer.dispatch(tag(value)),
        )
    }
}

impl<M: Model> StoreLike for Store<M> {
    type State = M::State;
    type Action = M::Action;

    fn read(&self) -> M::State {
        Store::read(self)
    }

    fn dispatch(&self, action: M::Action) {
        Store::dispatch(self, action);
    }
}
