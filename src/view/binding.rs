//! Two-way bindings for host UI controls.

use std::fmt;
use std::sync::Arc;

/// A get/set pair with no state of its own.
///
/// Produced by [`StoreLike::binding`](super::StoreLike::binding): reading
/// projects the current state, writing dispatches an action.
pub struct Binding<V> {
    read: Arc<dyn Fn() -> V + Send + Sync>,
    write: Arc<dyn Fn(V) + Send + Sync>,
}

impl<V> Binding<V> {
    pub fn new(
        read: impl Fn() -> V + Send + Sync + 'static,
        write: impl Fn(V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }

    /// A binding that always reads `value` and discards writes.
    pub fn constant(value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        Self::new(move || value.clone(), |_| {})
    }

    pub fn get(&self) -> V {
        (self.read)()
    }

    pub fn set(&self, value: V) {
        (self.write)(value)
    }
}

impl<V> Clone for Binding<V> {
    fn clone(&self) -> Self {
        Self {
            read: Arc::clone(&self.read),
            write: Arc::clone(&self.write),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Binding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
