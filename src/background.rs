use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Detached tasks that run after the HTTP response has been returned.
///
/// Callers never await a scheduled task and never learn its outcome; a task
/// reports success or failure only through the log. Tasks share the server's
/// Tokio runtime. At shutdown, [`BackgroundTasks::drain`] gives in-flight tasks
/// a bounded grace period; anything still running after that is dropped.
#[derive(Clone)]
pub struct BackgroundTasks {
    in_flight: Arc<watch::Sender<usize>>,
}

struct InFlight(Arc<watch::Sender<usize>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n -= 1);
    }
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundTasks {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            in_flight: Arc::new(tx),
        }
    }

    /// Schedule `task` and return immediately. `label` identifies the task in logs.
    ///
    /// Fails only when called outside a Tokio runtime.
    pub fn spawn<F>(&self, label: &'static str, task: F) -> Result<(), String>
    where
        F: Future<Output = bool> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| format!("No runtime for background task {label}: {e}"))?;

        self.in_flight.send_modify(|n| *n += 1);
        let guard = InFlight(self.in_flight.clone());

        handle.spawn(async move {
            let _guard = guard;
            tracing::debug!("Background task {label} started");
            if task.await {
                tracing::debug!("Background task {label} succeeded");
            } else {
                tracing::warn!("Background task {label} failed");
            }
        });

        Ok(())
    }

    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Wait up to `grace` for in-flight tasks to finish. Returns the number
    /// still running when the wait ended.
    pub async fn drain(&self, grace: Duration) -> usize {
        let mut idle = self.in_flight.subscribe();
        let _ = tokio::time::timeout(grace, idle.wait_for(|n| *n == 0)).await;

        let remaining = self.in_flight();
        if remaining > 0 {
            tracing::warn!("{remaining} background task(s) still running at shutdown");
        }
        remaining
    }
}
