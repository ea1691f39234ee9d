//! Callback identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Allocates callback ids unique within one engine instance.
///
/// Ids combine a monotonically increasing counter with a unix-millis
/// component, so even rapid bursts within the same millisecond cannot
/// collide. No ordering semantics beyond uniqueness are guaranteed, and ids
/// from different engine instances may overlap.
pub(crate) struct CallbackIdGenerator {
    counter: AtomicU64,
}

impl CallbackIdGenerator {
    pub(crate) fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    pub(crate) fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("callback_{}_{}", now_millis(), seq)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
