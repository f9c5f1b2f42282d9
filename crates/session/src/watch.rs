//! Recurring session re-checks while a protected view stays mounted.
//!
//! One watcher per mounted view. The task stops itself the first time the
//! guard reports an invalid session (the guard has already torn down and
//! redirected by then), and must be cancelled on unmount so the timer does
//! not outlive the view.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::guard::{Navigator, SessionGuard};
use crate::store::SessionStore;

/// Handle to a spawned recurring session check.
pub struct SessionWatcher {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl SessionWatcher {
    /// Spawn the recurring check.
    ///
    /// The first re-check fires one `interval` after spawning; the
    /// mount-time check is the caller's own `guard.check()`. Ticks are
    /// non-overlapping -- each one is a quick synchronous check.
    pub fn spawn<S, N>(guard: Arc<SessionGuard<S, N>>, interval: Duration) -> Self
    where
        S: SessionStore + 'static,
        N: Navigator + 'static,
    {
        let cancel = CancellationToken::new();
        let cancelled = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of `interval` completes immediately; skip it.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        tracing::debug!(role = %guard.role(), "Session watcher cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        if guard.check().is_err() {
                            tracing::debug!(role = %guard.role(), "Session watcher stopping after teardown");
                            break;
                        }
                    }
                }
            }
        });

        Self { cancel, handle }
    }

    /// Stop the recurring check. Idempotent; call on view unmount.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the background task has exited (cancelled or self-stopped).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to exit.
    pub async fn join(self) {
        // The task has no panicking paths of its own; a JoinError here can
        // only mean it was aborted by runtime shutdown.
        let _ = self.handle.await;
    }
}
