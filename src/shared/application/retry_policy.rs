use std::{future::Future, time::Duration};

use crate::shared::domain::model::enums::workflow_domain_error::WorkflowDomainError;

/// Bounded timeout and exponential backoff for persistence calls.
///
/// Only idempotent operations go through [`RetryPolicy::run`]; conditional
/// state transitions use [`RetryPolicy::run_once`] so a lost race is never
/// replayed.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
    attempt_timeout: Duration,
}

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        initial_backoff: Duration,
        max_backoff: Duration,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff: max_backoff.max(initial_backoff),
            attempt_timeout,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    pub async fn run<T, F, Fut>(
        &self,
        operation_name: &str,
        mut operation: F,
    ) -> Result<T, WorkflowDomainError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, WorkflowDomainError>>,
    {
        let mut attempt = 1;
        loop {
            match self.run_once(operation_name, operation()).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt < self.max_attempts => {
                    let backoff = self.backoff_for_attempt(attempt);
                    tracing::warn!(
                        operation = operation_name,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %error,
                        "retrying persistence operation"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    pub async fn run_once<T, Fut>(
        &self,
        operation_name: &str,
        operation: Fut,
    ) -> Result<T, WorkflowDomainError>
    where
        Fut: Future<Output = Result<T, WorkflowDomainError>>,
    {
        match tokio::time::timeout(self.attempt_timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(WorkflowDomainError::SystemFailure(format!(
                "{operation_name} timed out after {}ms",
                self.attempt_timeout.as_millis()
            ))),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            3,
            Duration::from_millis(100),
            Duration::from_secs(2),
            Duration::from_secs(5),
        )
    }
}
