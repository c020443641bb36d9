//! The state/effect engine.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use futures::StreamExt;
use parking_lot::{ReentrantMutex, RwLock};
use tokio::runtime::Handle;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::mvi::{Effect, EffectKind, Model, Update};

use super::builder::StoreBuilder;
use super::effects::EffectTracker;
use super::observer::{ObserverId, Observers, StateChange};

/// Owns the current state and advances it by running the model on actions.
///
/// Cloning a `Store` yields another handle to the same engine. Effect tasks
/// hold only weak references, so dropping the last handle releases the store
/// and aborts whatever effects are still running.
pub struct Store<M: Model> {
    inner: Arc<StoreInner<M>>,
}

impl<M: Model> Clone for Store<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct StoreInner<M: Model> {
    state: RwLock<M::State>,
    environment: M::Environment,
    writer: ReentrantMutex<Writer<M::Action>>,
    observers: Observers<M::State, M::Action>,
    effects: EffectTracker,
    runtime: Handle,
    config: StoreConfig,
}

/// Single-writer section. `draining` is set while some frame on the owning
/// thread is applying actions; nested dispatches only enqueue.
struct Writer<A> {
    draining: Cell<bool>,
    queue: RefCell<VecDeque<A>>,
}

impl<M: Model> Store<M> {
    /// Create a store on the current tokio runtime.
    pub fn new(state: M::State, environment: M::Environment) -> Result<Self, StoreError> {
        StoreBuilder::new(environment).build(state)
    }

    /// Create a store and immediately dispatch `action`.
    pub fn with_action(
        state: M::State,
        action: M::Action,
        environment: M::Environment,
    ) -> Result<Self, StoreError> {
        StoreBuilder::new(environment).build_with_action(state, action)
    }

    /// Create a store whose initial state and effects come from `init`.
    pub fn with_init<F>(environment: M::Environment, init: F) -> Result<Self, StoreError>
    where
        F: FnOnce(&M::Environment) -> Update<M::State, M::Action>,
    {
        StoreBuilder::new(environment).build_with(init)
    }

    pub fn builder(environment: M::Environment) -> StoreBuilder<M> {
        StoreBuilder::new(environment)
    }

    pub(super) fn from_parts(
        update: Update<M::State, M::Action>,
        environment: M::Environment,
        config: StoreConfig,
        runtime: Handle,
    ) -> Self {
        let Update { state, effects, .. } = update;
        let inner = Arc::new(StoreInner {
            state: RwLock::new(state),
            environment,
            writer: ReentrantMutex::new(Writer {
                draining: Cell::new(false),
                queue: RefCell::new(VecDeque::new()),
            }),
            observers: Observers::new(),
            effects: EffectTracker::new(),
            runtime,
            config,
        });
        for effect in effects {
            inner.spawn_effect(effect);
        }
        tracing::debug!(store = %inner.config.label, "store created");
        Self { inner }
    }

    /// Current state.
    pub fn read(&self) -> M::State {
        self.inner.state.read().clone()
    }

    /// Apply `action` and schedule the resulting effects.
    ///
    /// Returns once the state is (possibly) committed and effects are
    /// spawned. A panic in the model propagates to the caller.
    pub fn dispatch(&self, action: M::Action) {
        self.inner.dispatch(action);
    }

    /// Run an externally-sourced effect (one-shot or stream) whose actions
    /// are dispatched like any effect returned by the model.
    pub fn subscribe(&self, effect: Effect<M::Action>) {
        self.inner.spawn_effect(effect);
    }

    /// Register a callback run once per committed state change.
    pub fn observe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&StateChange<'_, M::State>) + Send + Sync + 'static,
    {
        self.inner.observers.add_state(Arc::new(observer))
    }

    /// Register a callback that sees every action before it is applied.
    pub fn observe_actions<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&M::Action) + Send + Sync + 'static,
    {
        self.inner.observers.add_action(Arc::new(observer))
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.inner.observers.remove(id)
    }

    pub fn environment(&self) -> &M::Environment {
        &self.inner.environment
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Number of effect tasks spawned and not yet finished.
    pub fn in_flight_effects(&self) -> usize {
        self.inner.effects.len()
    }

    /// Wait until no effect task is in flight.
    ///
    /// Never resolves while a stream effect that does not end is running.
    pub async fn settled(&self) {
        self.inner.effects.settled().await;
    }
}

impl<M: Model> StoreInner<M> {
    fn dispatch(self: &Arc<Self>, action: M::Action) {
        let writer = self.writer.lock();
        writer.queue.borrow_mut().push_back(action);
        if writer.draining.get() {
            return;
        }

        writer.draining.set(true);
        let writer = scopeguard::guard(writer, |writer| {
            writer.draining.set(false);
            writer.queue.borrow_mut().clear();
        });
        loop {
            let next = writer.queue.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            self.apply(action);
        }
    }

    fn apply(self: &Arc<Self>, action: M::Action) {
        if self.config.log_dispatch {
            tracing::debug!(store = %self.config.label, action = ?action, "dispatch");
        }
        self.observers.notify_action(&action);

        let current = self.state.read().clone();
        let Update {
            state,
            effects,
            transition,
        } = M::update(current, action, &self.environment);

        // Spawned on scope exit, including unwind out of a state observer.
        let _effects = scopeguard::guard(effects, |effects| {
            for effect in effects {
                self.spawn_effect(effect);
            }
        });

        let changed = *self.state.read() != state;
        if changed {
            *self.state.write() = state.clone();
            if self.config.log_dispatch {
                tracing::debug!(store = %self.config.label, state = ?state, "commit");
            }
            self.observers.notify_state(&StateChange {
                state: &state,
                transition: transition.as_ref(),
            });
        } else if self.config.log_dispatch {
            tracing::debug!(store = %self.config.label, "state unchanged, commit skipped");
        }
    }

    fn spawn_effect(self: &Arc<Self>, effect: Effect<M::Action>) {
        let weak = Arc::downgrade(self);
        let label = self.config.label.clone();
        let id = self.effects.spawn(&self.runtime, move |id| async move {
            let finish_label = label.clone();
            let _finish = scopeguard::guard(weak.clone(), move |weak| {
                if let Some(inner) = weak.upgrade() {
                    inner.effects.finish(id);
                    tracing::trace!(store = %finish_label, effect = %id, "effect finished");
                }
            });

            match effect.into_kind() {
                EffectKind::Once(future) => {
                    let action = future.await;
                    deliver(&weak, &label, action);
                }
                EffectKind::Stream(mut stream) => {
                    while let Some(action) = stream.next().await {
                        if !deliver(&weak, &label, action) {
                            break;
                        }
                    }
                }
            }
        });
        tracing::trace!(store = %self.config.label, effect = %id, "effect spawned");
    }
}

/// Feed an effect result back into the store. False once the store is gone.
fn deliver<M: Model>(weak: &Weak<StoreInner<M>>, label: &str, action: M::Action) -> bool {
    match weak.upgrade() {
        Some(inner) => {
            inner.dispatch(action);
            true
        }
        None => {
            tracing::trace!(store = %label, action = ?action, "store dropped, effect result discarded");
            false
        }
    }
}

impl<M: Model> Drop for StoreInner<M> {
    fn drop(&mut self) {
        self.effects.abort_all();
        tracing::debug!(store = %self.config.label, "store released");
    }
}
