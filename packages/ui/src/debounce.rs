//! Cancellable delayed tasks for search-as-you-type.
//!
//! Every [`Debouncer::schedule`] cancels the previously scheduled delay and starts a
//! new one. The returned future resolves to `true` only if its delay ran out without
//! being cancelled, so at most one caller per quiet period goes on to do real work.
//! Work started after the delay is not cancelled by later schedules.

use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle};

/// Debounce timer with cancel-and-reschedule semantics.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Start a new delay, cancelling the one in progress.
    ///
    /// The future must be spawned or awaited; it resolves to `false` when a later
    /// `schedule` or [`cancel`](Self::cancel) superseded it.
    pub fn schedule(&mut self) -> impl Future<Output = bool> {
        self.cancel();
        let (delay, handle) = abortable(sleep(self.delay));
        self.pending = Some(handle);
        async move { delay.await.is_ok() }
    }

    /// Cancel the pending delay, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_fire_once_for_final_text() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new(DELAY);
        let mut tasks = Vec::new();

        for query in ["b", "ba", "bat", "batm", "batma", "batman"] {
            let elapsed = debouncer.schedule();
            let fired = fired.clone();
            let query = query.to_string();
            tasks.push(tokio::spawn(async move {
                if elapsed.await {
                    fired.lock().unwrap().push(query);
                }
            }));
            tokio::time::sleep(Duration::from_millis(120)).await;
        }

        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(*fired.lock().unwrap(), vec!["batman".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_periods_fire_each_time() {
        let mut debouncer = Debouncer::new(DELAY);

        assert!(debouncer.schedule().await);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(debouncer.schedule().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_pending_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let elapsed = tokio::spawn(debouncer.schedule());

        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.cancel();

        assert!(!elapsed.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_respected() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = tokio::time::Instant::now();
        assert!(debouncer.schedule().await);
        assert!(start.elapsed() >= DELAY);
    }
}
