//! Fixed-delay timers owned by screens
//!
//! A [`DelayedAction`] delivers one message on a channel after a delay. The
//! timer stops when the handle is dropped, so a screen that is unmounted
//! before its delay elapses never emits its action.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Handle for a pending delayed message
///
/// When dropped, the timer is stopped.
#[derive(Debug)]
pub struct DelayedAction {
    label: &'static str,
    stop_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl DelayedAction {
    /// Send `message` on `tx` once `delay` has elapsed
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T>(
        label: &'static str,
        delay: Duration,
        tx: mpsc::UnboundedSender<T>,
        message: T,
    ) -> Self
    where
        T: Send + 'static,
    {
        let (stop_tx, stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if tx.send(message).is_err() {
                        tracing::debug!(label, "receiver closed before delayed action fired");
                    } else {
                        tracing::debug!(label, "delayed action fired");
                    }
                }
                _ = stop_rx => {
                    tracing::debug!(label, "delayed action cancelled");
                }
            }
        });

        tracing::debug!(label, delay_ms = delay.as_millis() as u64, "delayed action scheduled");
        Self {
            label,
            stop_tx: Some(stop_tx),
            handle,
        }
    }

    /// Name given when the timer was scheduled
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the timer task has completed, either by firing or by being cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the timer manually
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = DelayedAction::spawn("test", Duration::from_millis(300), tx, 7u32);

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv().unwrap(), 7);
        assert_eq!(timer.label(), "test");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = DelayedAction::spawn("test", Duration::from_millis(300), tx, ());

        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(timer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        DelayedAction::spawn("test", Duration::from_millis(50), tx, ()).cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_finished_after_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = DelayedAction::spawn("test", Duration::from_millis(10), tx, ());

        assert!(!timer.is_finished());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.recv().await.is_some());
        tokio::task::yield_now().await;
        assert!(timer.is_finished());
    }
}
