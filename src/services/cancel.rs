use tokio::sync::watch;

/// Owning side of a cooperative cancellation pair. Dropping the handle
/// without calling `cancel` leaves the token uncancelled forever.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Cloneable token observed by the work being cancelled.
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the handle cancels. Never resolves if the handle is
    /// dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn token_observes_cancellation() {
        let (handle, mut token) = cancel_pair();
        assert!(!token.is_cancelled());

        handle.cancel();
        assert!(token.is_cancelled());
        // Resolves immediately once cancelled.
        token.cancelled().await;
    }

    #[tokio::test]
    async fn dropped_handle_never_cancels() {
        let (handle, mut token) = cancel_pair();
        drop(handle);

        let waited = tokio::time::timeout(Duration::from_millis(20), token.cancelled()).await;
        assert!(waited.is_err());
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn clones_share_the_signal() {
        let (handle, token) = cancel_pair();
        let mut observer = token.clone();
        handle.cancel();
        observer.cancelled().await;
        assert!(token.is_cancelled());
    }
}
