//! Base trait for state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view needs)
/// - Comparable (PartialEq drives the store's commit gate)
pub trait State: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}
