//! Model-View-Update primitives.
//!
//! This module provides the base traits and values for unidirectional
//! data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Model::update ──→ Update { State, Effects } ──→ Store
//!    ↑                                     │
//!    └──────────── effect results ─────────┘
//! ```
//!
//! - **State**: Immutable, comparable snapshot owned by a store
//! - **Action**: User or system event
//! - **Model**: Pure transition from (state, action, environment) to an update
//! - **Effect**: Async work resolving to actions

mod action;
mod effect;
mod model;
mod state;
mod update;

pub use action::Action;
pub use effect::Effect;
pub(crate) use effect::EffectKind;
pub use model::Model;
pub use state::State;
pub use update::{Transition, Update};
