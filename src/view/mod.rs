//! Scoped projections and bindings over a store.
//!
//! - `store_like.rs` - `StoreLike` trait shared by `Store` and `ViewStore`
//! - `view_store.rs` - Closure-backed projection
//! - `binding.rs` - Read/write pair for host controls

mod binding;
mod store_like;
mod view_store;

pub use binding::Binding;
pub use store_like::StoreLike;
pub use view_store::ViewStore;
