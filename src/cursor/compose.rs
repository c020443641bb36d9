//! Running a child model against a slice of parent state.

use crate::mvi::{Model, Update};

use super::lens::{Cursor, KeyedCursor};

/// Run `M` on the slice `cursor` selects and embed the result back.
///
/// Child effects are re-tagged as parent actions and the child's transition
/// metadata is passed through. Equivalent to the parent handling
/// `cursor.tag(action)` itself, so it can sit inside the parent's `match`.
pub fn update_cursor<M, C>(
    cursor: &C,
    state: C::Outer,
    action: M::Action,
    environment: &M::Environment,
) -> Update<C::Outer, C::OuterAction>
where
    M: Model,
    C: Cursor<Inner = M::State, InnerAction = M::Action> + Clone + Send + Sync + 'static,
    C::OuterAction: Send + 'static,
{
    let inner = cursor.get(&state);
    let tagger = cursor.clone();
    M::update(inner, action, environment)
        .map_state(|inner| cursor.set(state, inner))
        .map_action(move |action| tagger.tag(action))
}

/// Keyed variant of [`update_cursor`] returning `None` when `key` is absent.
pub fn try_update_keyed<M, C>(
    cursor: &C,
    state: &C::Outer,
    action: M::Action,
    environment: &M::Environment,
    key: &C::Key,
) -> Option<Update<C::Outer, C::OuterAction>>
where
    M: Model,
    C: KeyedCursor<Inner = M::State, InnerAction = M::Action> + Clone + Send + Sync + 'static,
    C::Outer: Clone,
    C::OuterAction: Send + 'static,
    C::Key: Clone + Send + Sync + 'static,
{
    let inner = cursor.get(state, key)?;
    let tagger = cursor.clone();
    let tag_key = key.clone();
    Some(
        M::update(inner, action, environment)
            .map_state(|inner| cursor.set(state.clone(), inner, key))
            .map_action(move |action| tagger.tag(action, &tag_key)),
    )
}

/// Run `M` on the element of a keyed collection addressed by `key`.
///
/// A missing key is not an error: the action is dropped and `state` comes
/// back unchanged with no effects and no transition metadata.
pub fn update_keyed<M, C>(
    cursor: &C,
    state: C::Outer,
    action: M::Action,
    environment: &M::Environment,
    key: &C::Key,
) -> Update<C::Outer, C::OuterAction>
where
    M: Model,
    C: KeyedCursor<Inner = M::State, InnerAction = M::Action> + Clone + Send + Sync + 'static,
    C::OuterAction: Send + 'static,
    C::Key: Clone + Send + Sync + 'static,
{
    let Some(inner) = cursor.get(&state, key) else {
        tracing::trace!(action = ?action, "keyed target missing, action dropped");
        return Update::new(state);
    };
    let tagger = cursor.clone();
    let tag_key = key.clone();
    M::update(inner, action, environment)
        .map_state(|inner| cursor.set(state, inner, key))
        .map_action(move |action| tagger.tag(action, &tag_key))
}
