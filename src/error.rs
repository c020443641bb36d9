//! Errors surfaced by store construction.
//!
//! Dispatch itself has no error path: anticipated failures are actions, and a
//! panicking transition is a programming defect that propagates to the caller.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No tokio runtime was supplied and none is running on this thread.
    #[error("No tokio runtime available to run effects: {source}")]
    NoRuntime {
        #[source]
        source: tokio::runtime::TryCurrentError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
