//! Rate-limit retry decorator for image generators.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyloom_core::ImageOptions;
use storyloom_error::{
    ImageError, ImageErrorKind, StoryloomError, StoryloomErrorKind, StoryloomResult,
};
use storyloom_interface::ImageGenerator;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff};
use tracing::warn;

/// Backoff policy for rate-limited image generation.
///
/// Delays double each attempt starting at `base_delay` and never exceed
/// `max_delay`: with the defaults, 2s, 4s, 8s across 3 retries. No jitter
/// is applied, keeping the schedule reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first
    pub max_retries: usize,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(10),
        }
    }
}

/// Wraps any [`ImageGenerator`], retrying rate-limited attempts with
/// exponential backoff.
///
/// Only [`ImageErrorKind::RateLimited`] is retried; every other error class
/// (auth, malformed prompt, 5xx) fails on the first occurrence. Exhausting
/// the policy yields [`ImageErrorKind::RateLimitExhausted`] carrying the
/// total attempt count.
#[derive(Debug, Clone)]
pub struct Retrying<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G> Retrying<G> {
    /// Wrap a generator with the default policy.
    pub fn new(inner: G) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    /// Wrap a generator with an explicit policy.
    pub fn with_policy(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped generator.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

fn is_rate_limited(err: &StoryloomError) -> bool {
    matches!(err.kind(), StoryloomErrorKind::Image(image) if image.kind.is_retryable())
}

#[async_trait]
impl<G: ImageGenerator> ImageGenerator for Retrying<G> {
    async fn generate_image(
        &self,
        prompt: &str,
        options: &ImageOptions,
    ) -> StoryloomResult<String> {
        // ExponentialBackoff yields powers of two; scaling by half the base
        // delay gives base, 2*base, 4*base capped at max_delay.
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(self.policy.base_delay.as_millis() as u64 / 2)
            .max_delay(self.policy.max_delay)
            .take(self.policy.max_retries);
        let attempts = AtomicUsize::new(0);

        let result = Retry::spawn(strategy, || async {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            match self.inner.generate_image(prompt, options).await {
                Ok(url) => Ok(url),
                Err(err) if is_rate_limited(&err) => {
                    warn!(attempt, error = %err, "Image backend rate limited, will retry");
                    Err(RetryError::Transient {
                        err,
                        retry_after: None,
                    })
                }
                Err(err) => Err(RetryError::Permanent(err)),
            }
        })
        .await;

        match result {
            Ok(url) => Ok(url),
            Err(err) if is_rate_limited(&err) => {
                let attempts = attempts.load(Ordering::SeqCst);
                warn!(attempts, "Image backend still rate limited, giving up");
                Err(ImageError::new(ImageErrorKind::RateLimitExhausted { attempts }).into())
            }
            Err(err) => Err(err),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
