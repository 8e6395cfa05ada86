use super::message::AppMessage;
use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Owns the tokio runtime used for deferred work. Pending tasks are aborted
/// when the runtime is dropped, so a navigation scheduled just before exit
/// cannot fire into a torn-down app.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    pending: Vec<tokio::task::JoinHandle<()>>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            pending: Vec::new(),
        })
    }

    /// Schedule the one-shot navigation message after `delay`.
    ///
    /// One call schedules exactly one message; nothing the user types during
    /// the delay (including `clear`) suppresses it.
    pub fn schedule_navigation(&mut self, url: String, delay: Duration) {
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(url = %url, "navigation delay elapsed");
            let _ = tx.send(AppMessage::NavigateDue { url });
        });

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Instant;

    #[test]
    fn test_navigation_fires_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut runtime = AsyncRuntime::new(tx).unwrap();

        let start = Instant::now();
        runtime.schedule_navigation(
            "https://zigbook.net/chapters/00__zigbook_introduction".to_string(),
            Duration::from_millis(50),
        );

        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
        match msg {
            AppMessage::NavigateDue { url } => {
                assert_eq!(url, "https://zigbook.net/chapters/00__zigbook_introduction");
            }
            _ => panic!("expected NavigateDue"),
        }
    }

    #[test]
    fn test_navigation_does_not_fire_early() {
        let (tx, rx) = mpsc::channel();
        let mut runtime = AsyncRuntime::new(tx).unwrap();

        runtime.schedule_navigation("x".to_string(), Duration::from_millis(200));
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn test_drop_cancels_pending_navigation() {
        let (tx, rx) = mpsc::channel();
        let mut runtime = AsyncRuntime::new(tx).unwrap();

        runtime.schedule_navigation("x".to_string(), Duration::from_millis(200));
        drop(runtime);

        // Channel disconnects without ever delivering the message.
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(500)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_finished_handles_are_pruned() {
        let (tx, rx) = mpsc::channel();
        let mut runtime = AsyncRuntime::new(tx).unwrap();

        runtime.schedule_navigation("a".to_string(), Duration::from_millis(10));
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        // Give the task a moment to be marked finished, then schedule again.
        std::thread::sleep(Duration::from_millis(20));
        runtime.schedule_navigation("b".to_string(), Duration::from_millis(200));
        assert_eq!(runtime.pending_len(), 1);
    }
}
