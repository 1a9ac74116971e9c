//! Tests for the rate-limit retry decorator.
//!
//! Uses a scripted mock generator instead of live HTTP, and tokio's paused
//! clock so backoff delays are observed as virtual time.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyloom_backends::{RetryPolicy, Retrying};
use storyloom_core::ImageOptions;
use storyloom_error::{ImageError, ImageErrorKind, StoryloomErrorKind, StoryloomResult};
use storyloom_interface::ImageGenerator;

/// Mock image backend that replays a scripted sequence of responses.
struct MockImageBackend {
    script: Mutex<VecDeque<Result<String, ImageErrorKind>>>,
    calls: AtomicUsize,
}

impl MockImageBackend {
    fn new(script: Vec<Result<String, ImageErrorKind>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn rate_limited() -> Result<String, ImageErrorKind> {
        Err(ImageErrorKind::RateLimited("quota exceeded".to_string()))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for MockImageBackend {
    async fn generate_image(&self, _: &str, _: &ImageOptions) -> StoryloomResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock script exhausted");
        next.map_err(|kind| ImageError::new(kind).into())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

fn exhausted_attempts(err: &storyloom_error::StoryloomError) -> Option<usize> {
    match err.kind() {
        StoryloomErrorKind::Image(image) => match image.kind {
            ImageErrorKind::RateLimitExhausted { attempts } => Some(attempts),
            _ => None,
        },
        _ => None,
    }
}

#[tokio::test(start_paused = true)]
async fn three_rate_limits_then_success_backs_off_2_4_8() {
    let mock = MockImageBackend::new(vec![
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        Ok("https://img.example/ok.png".to_string()),
    ]);
    let client = Retrying::new(mock);

    let start = tokio::time::Instant::now();
    let url = client
        .generate_image("a quiet forest", &ImageOptions::default())
        .await
        .expect("fourth attempt succeeds");

    assert_eq!(url, "https://img.example/ok.png");
    assert_eq!(client.inner().calls(), 4);
    // 2s + 4s + 8s of backoff, observed on the paused clock.
    assert_eq!(start.elapsed(), Duration::from_secs(14));
}

#[tokio::test(start_paused = true)]
async fn fourth_rate_limit_exhausts_with_no_fifth_attempt() {
    let mock = MockImageBackend::new(vec![
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        Ok("https://img.example/never.png".to_string()),
    ]);
    let client = Retrying::new(mock);

    let err = client
        .generate_image("a quiet forest", &ImageOptions::default())
        .await
        .unwrap_err();

    assert_eq!(exhausted_attempts(&err), Some(4));
    assert_eq!(client.inner().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn non_rate_limit_error_fails_immediately() {
    let mock = MockImageBackend::new(vec![Err(ImageErrorKind::Api {
        status: 500,
        body: "internal error".to_string(),
    })]);
    let client = Retrying::new(mock);

    let start = tokio::time::Instant::now();
    let err = client
        .generate_image("a quiet forest", &ImageOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        StoryloomErrorKind::Image(image)
            if matches!(image.kind, ImageErrorKind::Api { status: 500, .. })
    ));
    assert_eq!(client.inner().calls(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn success_on_first_attempt_makes_one_call() {
    let mock = MockImageBackend::new(vec![Ok("https://img.example/first.png".to_string())]);
    let client = Retrying::new(mock);

    let url = client
        .generate_image("a quiet forest", &ImageOptions::default())
        .await
        .unwrap();

    assert_eq!(url, "https://img.example/first.png");
    assert_eq!(client.inner().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn delays_are_capped_at_max_delay() {
    let mock = MockImageBackend::new(vec![
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        MockImageBackend::rate_limited(),
        Ok("https://img.example/ok.png".to_string()),
    ]);
    let policy = RetryPolicy {
        max_retries: 3,
        base_delay: Duration::from_secs(4),
        max_delay: Duration::from_secs(10),
    };
    let client = Retrying::with_policy(mock, policy);

    let start = tokio::time::Instant::now();
    client
        .generate_image("a quiet forest", &ImageOptions::default())
        .await
        .unwrap();

    // 4s + 8s + 10s: the third delay would be 16s without the cap.
    assert_eq!(start.elapsed(), Duration::from_secs(22));
}
