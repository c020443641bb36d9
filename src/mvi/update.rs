//! The value returned by every transition.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::effect::Effect;

/// Opaque presentation metadata attached to a state change.
///
/// The store never inspects it; observers receive it untouched alongside the
/// committed state (for example an animation curve chosen by the host UI).
#[derive(Clone)]
pub struct Transition(Arc<dyn Any + Send + Sync>);

impl Transition {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transition(..)")
    }
}

/// New state, pending effects and optional transition metadata.
///
/// Updates are plain data: combinators consume `self` and return a new value.
#[derive(Debug)]
pub struct Update<S, A> {
    pub state: S,
    pub effects: Vec<Effect<A>>,
    pub transition: Option<Transition>,
}

impl<S, A: Send + 'static> Update<S, A> {
    /// Update with no effects and no transition metadata.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
            transition: None,
        }
    }

    pub fn with_effects(state: S, effects: Vec<Effect<A>>) -> Self {
        Self {
            state,
            effects,
            transition: None,
        }
    }

    /// Append effects after the ones already present.
    pub fn merge_effects(mut self, effects: impl IntoIterator<Item = Effect<A>>) -> Self {
        self.effects.extend(effects);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Re-tag every effect's action.
    pub fn map_action<B, F>(self, tag: F) -> Update<S, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let tag = Arc::new(tag);
        let effects = self
            .effects
            .into_iter()
            .map(|effect| {
                let tag = Arc::clone(&tag);
                effect.map(move |action| tag(action))
            })
            .collect();
        Update {
            state: self.state,
            effects,
            transition: self.transition,
        }
    }

    /// Replace the state, keeping effects and transition metadata.
    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> Update<T, A> {
        Update {
            state: f(self.state),
            effects: self.effects,
            transition: self.transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_effects_or_transition() {
        let update: Update<i32, ()> = Update::new(3);
        assert_eq!(update.state, 3);
        assert!(update.effects.is_empty());
        assert!(update.transition.is_none());
    }

    #[test]
    fn merge_effects_appends_in_order() {
        let update = Update::with_effects(0, vec![Effect::just("a")])
            .merge_effects(vec![Effect::just("b"), Effect::just("c")]);
        assert_eq!(update.effects.len(), 3);
    }

    #[test]
    fn with_transition_is_downcastable() {
        #[derive(Debug, PartialEq)]
        struct Fade(u32);

        let update: Update<i32, ()> = Update::new(1).with_transition(Transition::new(Fade(250)));
        let transition = update.transition.expect("transition set");
        assert!(transition.is::<Fade>());
        assert_eq!(transition.downcast_ref::<Fade>(), Some(&Fade(250)));
        assert!(transition.downcast_ref::<String>().is_none());
    }

    #[test]
    fn map_state_keeps_effects_and_transition() {
        let update = Update::with_effects(2, vec![Effect::just(())])
            .with_transition(Transition::new("slide"))
            .map_state(|n| n * 10);
        assert_eq!(update.state, 20);
        assert_eq!(update.effects.len(), 1);
        assert!(update.transition.is_some());
    }

    #[tokio::test]
    async fn map_action_retags_effects() {
        use crate::mvi::effect::EffectKind;

        let update = Update::with_effects((), vec![Effect::just(4)]).map_action(|n| n + 1);
        let mut effects = update.effects;
        let EffectKind::Once(future) = effects.remove(0).into_kind() else {
            panic!("expected one-shot effect");
        };
        assert_eq!(future.await, 5);
    }
}
