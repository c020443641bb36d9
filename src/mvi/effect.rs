//! Effects: deferred work that feeds actions back into a store.
//!
//! An effect never fails. Anything that can go wrong inside it (I/O errors,
//! timeouts, rejected requests) must be translated into an action before the
//! effect resolves, so the store only ever sees actions.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::stream::{BoxStream, Stream};
use futures::{FutureExt, StreamExt};

/// Deferred asynchronous work producing actions.
///
/// The primary form resolves to exactly one action. The stream form is a
/// long-lived subscription delivering one action per item; each delivered
/// action goes through the same dispatch path as a one-shot result.
pub struct Effect<A> {
    kind: EffectKind<A>,
}

pub(crate) enum EffectKind<A> {
    Once(BoxFuture<'static, A>),
    Stream(BoxStream<'static, A>),
}

impl<A: Send + 'static> Effect<A> {
    /// Wrap a future that resolves to a single action.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Self {
            kind: EffectKind::Once(future.boxed()),
        }
    }

    /// Effect that immediately resolves to `action`.
    pub fn just(action: A) -> Self {
        Self::new(futures::future::ready(action))
    }

    /// Wrap a stream of actions (event bridge, ticker, socket...).
    ///
    /// The subscription stays alive until the stream ends or the store that
    /// runs it is dropped.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = A> + Send + 'static,
    {
        Self {
            kind: EffectKind::Stream(stream.boxed()),
        }
    }

    /// Race `future` against a timer, resolving to `on_timeout` if the timer
    /// wins.
    pub fn timeout<F>(duration: Duration, future: F, on_timeout: A) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Self::new(async move {
            match tokio::time::timeout(duration, future).await {
                Ok(action) => action,
                Err(_) => on_timeout,
            }
        })
    }

    /// Transform every action this effect produces.
    ///
    /// Used by cursors to re-tag child actions as parent actions.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self.kind {
            EffectKind::Once(future) => Effect::new(future.map(f)),
            EffectKind::Stream(stream) => Effect::from_stream(stream.map(f)),
        }
    }

    /// True for subscription effects created with [`Effect::from_stream`].
    pub fn is_stream(&self) -> bool {
        matches!(self.kind, EffectKind::Stream(_))
    }

    pub(crate) fn into_kind(self) -> EffectKind<A> {
        self.kind
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EffectKind::Once(_) => f.write_str("Effect::Once"),
            EffectKind::Stream(_) => f.write_str("Effect::Stream"),
        }
    }
}
