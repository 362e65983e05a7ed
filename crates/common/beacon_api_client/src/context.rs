use std::{future::Future, time::Duration};

use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::error::Error;

/// Cancellation and deadline scope for a request.
///
/// Cloning shares the same cancellation state. [`RequestContext::child`] creates a context that
/// is cancelled together with its parent but can also be cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets the deadline, keeping an earlier one if already present.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Drives `future` to completion unless the context is cancelled or its deadline passes
    /// first, in which case the future is dropped.
    pub async fn run<T, F>(&self, future: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(Error::Cancelled),
            _ = deadline => Err(Error::DeadlineExceeded),
            result = future => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes() -> anyhow::Result<()> {
        let ctx = RequestContext::new();
        let value = ctx.run(async { Ok::<_, Error>(7) }).await?;
        assert_eq!(value, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_run_rejects_cancelled_context() {
        let ctx = RequestContext::new();
        ctx.cancel();

        let result = ctx.run(async { Ok::<_, Error>(()) }).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_child_is_cancelled_with_parent() {
        let parent = RequestContext::new();
        let child = parent.child();

        parent.cancel();
        assert!(child.is_cancelled());

        let other_child = RequestContext::new();
        let grandchild = other_child.child();
        grandchild.cancel();
        assert!(!other_child.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_enforces_deadline() {
        let ctx = RequestContext::new().with_timeout(Duration::from_secs(1));

        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, Error>(())
            })
            .await;
        assert!(matches!(result, Err(Error::DeadlineExceeded)));
    }

    #[test]
    fn test_with_deadline_keeps_earliest() {
        let now = Instant::now();
        let ctx = RequestContext::new()
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(10));

        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(5)));
    }
}
