//! Base trait for actions (user/system events) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User events (button clicks, key presses)
/// - System events (service responses, timers)
/// - Results of effects fed back into the store
///
/// Actions are processed by models to produce updates.
pub trait Action: Debug + Send + 'static {}

impl<T> Action for T where T: Debug + Send + 'static {}
