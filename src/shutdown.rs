//! Cooperative shutdown signalling for the publish loop.
//!
//! The loop polls the token at each iteration boundary and never stops
//! mid-publish. Requesting shutdown also wakes a loop parked in its pacing
//! delay, so stopping does not wait out the remainder of a long delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Error returned when a pacing delay is cut short.
///
/// The one recoverable condition in the loop: the driver swallows it and
/// continues with the next iteration immediately.
#[derive(Debug, thiserror::Error)]
#[error("Pacing delay was interrupted")]
pub struct PacingInterrupted;

/// Cloneable handle that requests and observes loop shutdown.
#[derive(Clone, Default)]
pub struct ShutdownToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    stopped: AtomicBool,
    wake: Notify,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop at the next iteration boundary.
    pub fn request_shutdown(&self) {
        self.inner.stopped.store(true, Ordering::SeqCst);
        self.inner.wake.notify_waiters();
    }

    /// Wake a sleeper inside [`pace`](Self::pace) without stopping the loop.
    ///
    /// An interrupt delivered while nobody is pacing is dropped.
    pub fn interrupt(&self) {
        self.inner.wake.notify_waiters();
    }

    /// Whether shutdown has been requested.
    pub fn is_shutdown(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    /// Sleep for `delay`, ending early with [`PacingInterrupted`] when the
    /// token is woken or shutdown is requested in the meantime.
    pub async fn pace(&self, delay: Duration) -> Result<(), PacingInterrupted> {
        let woken = self.inner.wake.notified();
        tokio::pin!(woken);
        woken.as_mut().enable();

        // The waiter is registered before this check, so a shutdown
        // requested at any point is either seen here or wakes the select
        if self.is_shutdown() {
            return Err(PacingInterrupted);
        }

        tokio::select! {
            _ = woken => Err(PacingInterrupted),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

/// Install a Ctrl+C handler that requests shutdown on the token.
pub fn install_ctrl_c_handler(token: &ShutdownToken) {
    let token = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received interrupt signal (Ctrl+C)");
                token.request_shutdown();
            }
            Err(e) => {
                tracing::error!("Failed to listen for interrupt signal: {e}");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pace_waits_out_the_delay() {
        let token = ShutdownToken::new();
        let started = tokio::time::Instant::now();

        token.pace(Duration::from_secs(5)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_cuts_delay_short() {
        let token = ShutdownToken::new();
        let waker = token.clone();

        let pacing = tokio::spawn(async move { token.pace(Duration::from_secs(3600)).await });

        // Let the sleeper park before waking it
        tokio::time::sleep(Duration::from_millis(1)).await;
        waker.interrupt();

        let result = pacing.await.unwrap();
        assert!(result.is_err());
        assert!(!waker.is_shutdown());
    }

    #[tokio::test]
    async fn test_pace_parks_until_a_wake_arrives() {
        let token = ShutdownToken::new();

        // The waiter is registered on the first poll, so an interrupt after
        // that single poll must wake the future without it being re-polled
        let mut pace = tokio_test::task::spawn(token.pace(Duration::from_secs(3600)));
        tokio_test::assert_pending!(pace.poll());
        assert!(!pace.is_woken());

        token.interrupt();

        assert!(pace.is_woken());
        tokio_test::assert_ready_err!(pace.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_shutdown_wakes_pacer() {
        let token = ShutdownToken::new();
        let stopper = token.clone();

        let pacing = tokio::spawn(async move { token.pace(Duration::from_secs(3600)).await });

        tokio::time::sleep(Duration::from_millis(1)).await;
        stopper.request_shutdown();

        let result = pacing.await.unwrap();
        assert!(result.is_err());
        assert!(stopper.is_shutdown());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pace_returns_immediately_when_already_stopped() {
        let token = ShutdownToken::new();
        token.request_shutdown();

        let started = tokio::time::Instant::now();
        let result = token.pace(Duration::from_secs(3600)).await;

        assert!(result.is_err());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_before_pace_is_dropped() {
        let token = ShutdownToken::new();
        token.interrupt();

        let started = tokio::time::Instant::now();
        token.pace(Duration::from_secs(5)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
