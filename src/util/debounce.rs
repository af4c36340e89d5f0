//! Quiet-interval debouncer for user-driven lookups.
//!
//! Typical use is search-as-you-type: each keystroke calls [`Debouncer::call`],
//! and only the invocation that survives the quiet interval without being
//! superseded actually runs.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delays work until its trigger has been quiet for a fixed interval.
///
/// Every call bumps a generation counter; a scheduled task re-checks the
/// counter after sleeping and runs only if no newer call arrived in the
/// meantime. Cloning shares the counter, so clones supersede each other.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule `f` to run after the quiet interval.
    ///
    /// If `call` is invoked again before the interval elapses, the earlier
    /// invocation is superseded and its future never runs.
    pub fn call<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let counter = Arc::clone(&self.generation);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if counter.load(Ordering::SeqCst) == generation {
                f().await;
            }
        });
    }

    /// Cancel any pending invocation without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
