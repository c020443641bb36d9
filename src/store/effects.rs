//! Bookkeeping for effect tasks a store has spawned and not yet seen finish.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::AbortHandle;
use uuid::Uuid;

pub(crate) struct EffectTracker {
    tasks: Mutex<HashMap<Uuid, AbortHandle>>,
    idle: Notify,
}

impl EffectTracker {
    pub(crate) fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
            idle: Notify::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Spawn the task built by `make` and record it.
    ///
    /// The map stays locked across the spawn so a task that completes
    /// immediately cannot call [`EffectTracker::finish`] before it is recorded.
    pub(crate) fn spawn<F>(&self, runtime: &Handle, make: impl FnOnce(Uuid) -> F) -> Uuid
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = Uuid::new_v4();
        let mut tasks = self.tasks.lock();
        let handle = runtime.spawn(make(id));
        // A shut-down runtime drops the future unpolled, so no finish call
        // would ever clear the entry.
        if handle.is_finished() {
            tracing::trace!(effect = %id, "runtime shut down, effect dropped");
        } else {
            tasks.insert(id, handle.abort_handle());
        }
        id
    }

    /// Forget a finished task.
    pub(crate) fn finish(&self, id: Uuid) {
        let mut tasks = self.tasks.lock();
        tasks.remove(&id);
        let idle = tasks.is_empty();
        drop(tasks);

        if idle {
            self.idle.notify_waiters();
        }
    }

    /// Resolve once no tracked task remains.
    pub(crate) async fn settled(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.tasks.lock().is_empty() {
                return;
            }
            notified.await;
        }
    }

    pub(crate) fn abort_all(&self) {
        let handles: Vec<AbortHandle> = self.tasks.lock().drain().map(|(_, h)| h).collect();
        for handle in handles {
            handle.abort();
        }
        self.idle.notify_waiters();
    }
}
