//! The store: single owner of application state.
//!
//! # Architecture
//!
//! - `engine.rs` - `Store` handle, dispatch loop, commit gate
//! - `builder.rs` - Construction with config and runtime
//! - `effects.rs` - Tracking of in-flight effect tasks
//! - `observer.rs` - State-change and action observers

mod builder;
mod effects;
mod engine;
mod observer;

pub use builder::StoreBuilder;
pub use engine::Store;
pub use observer::{ObserverId, StateChange};
