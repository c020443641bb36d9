//! Unidirectional state store with async effects and cursor composition.
//!
//! A [`Store`] owns one state value. Every change goes through
//! [`Store::dispatch`], which runs a pure [`Model::update`] and gets back an
//! [`Update`]: the next state plus effects. The store commits the state only
//! if it differs from the current one, notifies observers, and runs each
//! effect on tokio, dispatching whatever action it resolves to.
//!
//! ```text
//! action ──→ Store::dispatch ──→ Model::update ──→ Update
//!    ↑                                              │
//!    │                         commit if changed ←──┤
//!    └──────────── effect resolves ←── spawn ←──────┘
//! ```
//!
//! Child components plug into a parent through a [`Cursor`]
//! (`update_cursor`, `update_keyed`) and can be handed to views as a
//! [`ViewStore`] that reads and dispatches through the root store.

pub mod config;
pub mod cursor;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod view;

pub use config::{ConfigError, StoreConfig};
pub use cursor::{
    try_update_keyed, update_cursor, update_keyed, Cursor, KeyedCursor, KeyedLens, Lens,
};
pub use error::StoreError;
pub use mvi::{Action, Effect, Model, State, Transition, Update};
pub use store::{ObserverId, StateChange, Store, StoreBuilder};
pub use view::{Binding, StoreLike, ViewStore};
