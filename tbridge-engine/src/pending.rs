//! The pending-call table: calls awaiting a host response, keyed by
//! callback id.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use tbridge_traits::Result;

pub(crate) type CallbackFn = Box<dyn FnOnce(Result<Value>) + Send>;

/// How the caller consumes the eventual outcome of a call.
///
/// Every public invocation shape normalizes into one of these at the
/// boundary, so the core never inspects argument shapes.
pub(crate) enum Completion {
    /// Awaitable mode: resolve the caller's oneshot receiver.
    Channel(oneshot::Sender<Result<Value>>),
    /// Callback mode: invoke the supplied closure.
    Callback(CallbackFn),
}

/// A registered call that has not yet settled.
pub(crate) struct PendingCall {
    completion: Completion,
    timer: Option<JoinHandle<()>>,
}

impl PendingCall {
    pub(crate) fn new(completion: Completion) -> Self {
        Self {
            completion,
            timer: None,
        }
    }

    pub(crate) fn set_timer(&mut self, handle: JoinHandle<()>) {
        self.timer = Some(handle);
    }

    /// Consume the entry: cancel its timer and fire the continuation.
    pub(crate) fn complete(self, result: Result<Value>) {
        if let Some(timer) = self.timer {
            timer.abort();
        }
        match self.completion {
            Completion::Channel(sender) => {
                // The receiver may have been dropped; nothing left to notify.
                let _ = sender.send(result);
            }
            Completion::Callback(callback) => callback(result),
        }
    }
}

/// Table of outstanding calls.
///
/// A callback id maps to exactly one outstanding call, and entries leave the
/// table *before* their continuation runs, so whichever of success, failure,
/// or timeout fires first wins and later resolution attempts for the same id
/// find nothing.
#[derive(Default)]
pub(crate) struct PendingCallTable {
    calls: Mutex<HashMap<String, PendingCall>>,
}

impl PendingCallTable {
    pub(crate) fn insert(&self, id: String, call: PendingCall) {
        let previous = self.lock().insert(id, call);
        debug_assert!(previous.is_none(), "callback id registered twice");
    }

    pub(crate) fn take(&self, id: &str) -> Option<PendingCall> {
        self.lock().remove(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PendingCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn channel_completion_resolves_the_receiver() {
        let table = PendingCallTable::default();
        let (sender, receiver) = oneshot::channel();
        table.insert("cb_1".to_string(), PendingCall::new(Completion::Channel(sender)));
        assert_eq!(table.len(), 1);

        let entry = table.take("cb_1").unwrap();
        entry.complete(Ok(json!({"ok": true})));

        assert_eq!(receiver.await.unwrap().unwrap(), json!({"ok": true}));
        assert_eq!(table.len(), 0);
    }

    #[tokio::test]
    async fn callback_completion_runs_exactly_once() {
        let table = PendingCallTable::default();
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = invocations.clone();
        let callback: CallbackFn = Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        table.insert("cb_2".to_string(), PendingCall::new(Completion::Callback(callback)));

        table.take("cb_2").unwrap().complete(Ok(json!(1)));
        assert_eq!(invocations.load(Ordering::SeqCst), 1);

        // The entry is gone; a second resolution attempt finds nothing.
        assert!(table.take("cb_2").is_none());
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn take_of_unknown_id_is_none() {
        let table = PendingCallTable::default();
        assert!(table.take("cb_missing").is_none());
    }
}
