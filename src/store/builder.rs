//! Store construction.

use std::path::Path;

use tokio::runtime::Handle;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::mvi::{Model, Update};

use super::Store;

/// Builder for [`Store`] with explicit configuration and runtime.
///
/// ```ignore
/// let store = Store::<CounterModel>::builder(env)
///     .config(StoreConfig::with_label("counter").log_dispatch(true))
///     .build(Counter::default())?;
/// ```
pub struct StoreBuilder<M: Model> {
    environment: M::Environment,
    config: StoreConfig,
    runtime: Option<Handle>,
}

impl<M: Model> StoreBuilder<M> {
    pub fn new(environment: M::Environment) -> Self {
        Self {
            environment,
            config: StoreConfig::default(),
            runtime: None,
        }
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Read configuration from a TOML file (missing file means defaults).
    pub fn load_config(mut self, path: &Path) -> Result<Self, StoreError> {
        self.config = StoreConfig::load_from(path)?;
        Ok(self)
    }

    /// Runtime used to spawn effects. Defaults to the runtime of the calling
    /// thread.
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build a store holding `state`.
    pub fn build(self, state: M::State) -> Result<Store<M>, StoreError> {
        self.build_with(move |_| Update::new(state))
    }

    /// Build a store and immediately dispatch a seed action.
    pub fn build_with_action(
        self,
        state: M::State,
        action: M::Action,
    ) -> Result<Store<M>, StoreError> {
        let store = self.build(state)?;
        store.dispatch(action);
        Ok(store)
    }

    /// Build a store from an initial update computed from the environment.
    ///
    /// The initial effects are scheduled before this returns, so the first
    /// state any caller can observe already has them in flight.
    pub fn build_with<F>(self, init: F) -> Result<Store<M>, StoreError>
    where
        F: FnOnce(&M::Environment) -> Update<M::State, M::Action>,
    {
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|source| StoreError::NoRuntime { source })?,
        };
        self.config.validate()?;

        let update = init(&self.environment);
        Ok(Store::from_parts(
            update,
            self.environment,
            self.config,
            runtime,
        ))
    }
}
