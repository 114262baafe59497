//! Deadline and failure boundary around computation calls.
//!
//! # Responsibilities
//! - Run each computation on the blocking pool, one task per request
//! - Cap the number of computations running at once
//! - Enforce the configured compute deadline (queueing included)
//! - Convert provider panics into `ComputeError::Panicked`
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - A timed-out computation keeps running on its blocking thread until it
//!   returns; it holds its concurrency permit until then and its result is
//!   discarded
//! - Failures are reported once, never retried

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::compute::{Compute, ComputeError, Computation, ComputedValue};
use crate::config::ComputeConfig;

/// Runs computations against a provider under a deadline and concurrency cap.
#[derive(Clone)]
pub struct ComputeRunner {
    compute: Arc<dyn Compute>,
    permits: Arc<Semaphore>,
    deadline: Duration,
}

impl ComputeRunner {
    pub fn new(compute: Arc<dyn Compute>, config: &ComputeConfig) -> Self {
        Self {
            compute,
            permits: Arc::new(Semaphore::new(config.max_concurrent)),
            deadline: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Evaluate `computation` on `n`.
    pub async fn evaluate(
        &self,
        computation: Computation,
        n: i64,
    ) -> Result<ComputedValue, ComputeError> {
        let work = async {
            let permit = self
                .permits
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| ComputeError::Unavailable {
                    operation: computation,
                })?;

            let compute = self.compute.clone();
            let task = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                compute.evaluate(computation, n)
            });

            task.await.unwrap_or_else(|e| {
                tracing::error!(operation = %computation, n, error = %e, "Computation task failed");
                Err(ComputeError::Panicked {
                    operation: computation,
                })
            })
        };

        match timeout(self.deadline, work).await {
            Ok(result) => result,
            Err(_) => {
                let after_ms = u64::try_from(self.deadline.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(operation = %computation, n, after_ms, "Computation timed out");
                Err(ComputeError::TimedOut {
                    operation: computation,
                    after_ms,
                })
            }
        }
    }

    /// Computations that could start right now without waiting.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::NativeCompute;

    struct Sleepy(Duration);

    impl Compute for Sleepy {
        fn is_even(&self, n: i64) -> Result<bool, ComputeError> {
            std::thread::sleep(self.0);
            Ok(n % 2 == 0)
        }

        fn is_prime(&self, _n: i64) -> Result<bool, ComputeError> {
            std::thread::sleep(self.0);
            Ok(false)
        }

        fn factorial(&self, _n: i64) -> Result<u64, ComputeError> {
            panic!("factorial provider exploded");
        }
    }

    fn runner(compute: impl Compute + 'static, timeout_ms: u64, max_concurrent: usize) -> ComputeRunner {
        ComputeRunner::new(
            Arc::new(compute),
            &ComputeConfig {
                timeout_ms,
                max_concurrent,
            },
        )
    }

    #[tokio::test]
    async fn test_passes_result_through() {
        let result = runner(NativeCompute, 1_000, 4)
            .evaluate(Computation::Factorial, 5)
            .await;
        assert_eq!(result, Ok(ComputedValue::Factorial(120)));
    }

    #[tokio::test]
    async fn test_passes_provider_error_through() {
        let result = runner(NativeCompute, 1_000, 4)
            .evaluate(Computation::Factorial, -3)
            .await;
        assert!(matches!(result, Err(ComputeError::NegativeInput { n: -3, .. })));
    }

    #[tokio::test]
    async fn test_deadline_expires() {
        let result = runner(Sleepy(Duration::from_millis(300)), 20, 4)
            .evaluate(Computation::Parity, 2)
            .await;
        assert_eq!(
            result,
            Err(ComputeError::TimedOut {
                operation: Computation::Parity,
                after_ms: 20
            })
        );
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let result = runner(Sleepy(Duration::ZERO), 1_000, 4)
            .evaluate(Computation::Factorial, 3)
            .await;
        assert_eq!(
            result,
            Err(ComputeError::Panicked {
                operation: Computation::Factorial
            })
        );
    }

    #[tokio::test]
    async fn test_permit_held_until_computation_returns() {
        let runner = runner(Sleepy(Duration::from_millis(300)), 20, 1);

        let first = runner.evaluate(Computation::Primality, 7).await;
        assert!(matches!(first, Err(ComputeError::TimedOut { .. })));
        // The abandoned computation still occupies the only slot.
        assert_eq!(runner.available_permits(), 0);

        let second = runner.evaluate(Computation::Primality, 7).await;
        assert!(matches!(second, Err(ComputeError::TimedOut { .. })));

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(runner.available_permits(), 1);
    }
}
