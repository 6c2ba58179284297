//! Background Sweeper
//!
//! Periodic removal of expired pending proofs and stale sessions. Runs
//! independently of request handling; failures are logged, never
//! escalated, since expired rows are also rejected lazily at use time.

use crate::application::config::GameConfig;
use crate::domain::repository::CleanupRepository;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to a running sweeper task
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the task to stop and wait for it to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawn the periodic sweep task over any cleanup-capable repository
pub fn spawn_sweeper<R>(repo: R, config: Arc<GameConfig>) -> SweeperHandle
where
    R: CleanupRepository + Send + Sync + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let interval = config.sweep_interval;
    let retention_ms = config.session_retention_ms();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The immediate first tick: startup already ran a cleanup pass
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match repo.cleanup_expired(retention_ms).await {
                        Ok((proofs, sessions)) => {
                            tracing::debug!(proofs, sessions, "Sweep completed");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Sweep failed, will retry next interval");
                        }
                    }
                }
                _ = shutdown_rx.changed() => {
                    tracing::info!("Sweeper shutting down");
                    break;
                }
            }
        }
    });

    SweeperHandle {
        shutdown: shutdown_tx,
        task,
    }
}
