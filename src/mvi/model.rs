//! Model trait for MVI architecture.

use super::action::Action;
use super::state::State;
use super::update::Update;

/// A model owns the transition function for one state type.
///
/// The transition is the only place where state changes are decided. It must
/// be a pure function: `(State, Action, Environment) -> Update`. Any I/O,
/// timer or randomness goes into a returned [`Effect`](super::Effect) instead
/// of running inline.
pub trait Model: 'static {
    /// The state type this model operates on.
    type State: State;

    /// The action type this model handles.
    type Action: Action;

    /// Services available to the transition and captured by effects.
    type Environment: Send + Sync + 'static;

    /// Process an action and return the resulting update.
    fn update(
        state: Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> Update<Self::State, Self::Action>;

    /// Fold `actions` through [`Model::update`] left to right.
    ///
    /// Each step's state feeds the next step, effects are concatenated in
    /// order, and the last step that sets transition metadata wins. A step
    /// without metadata leaves the previous value in place.
    fn update_many<I>(
        state: Self::State,
        actions: I,
        environment: &Self::Environment,
    ) -> Update<Self::State, Self::Action>
    where
        I: IntoIterator<Item = Self::Action>,
    {
        let mut update = Update::new(state);
        for action in actions {
            let Update {
                state,
                mut effects,
                transition,
            } = update;
            let next = Self::update(state, action, environment);
            effects.extend(next.effects);
            update = Update {
                state: next.state,
                effects,
                transition: next.transition.or(transition),
            };
        }
        update
    }
}
