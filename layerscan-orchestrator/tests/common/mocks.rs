//! Recording capability doubles
//!
//! Each double returns a canned outcome and remembers how it was called, so
//! tests can assert on both the scanner's output and what it forwarded.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use layerscan_core::domain::{
    DetectError, Detection, Detector, IdentityResolver, ImageIdentity, ResolveError, ScanOptions,
};

/// Identity resolver returning a fixed outcome
pub struct MockResolver {
    outcome: Result<ImageIdentity, ResolveError>,
    calls: AtomicUsize,
}

impl MockResolver {
    pub fn returning(identity: ImageIdentity) -> Self {
        Self {
            outcome: Ok(identity),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ResolveError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for MockResolver {
    async fn resolve(&self, _cancel: &CancellationToken) -> Result<ImageIdentity, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Arguments a detector was invoked with
#[derive(Debug, Clone, PartialEq)]
pub struct DetectCall {
    pub target: String,
    pub image_id: String,
    pub layer_ids: Vec<String>,
    pub options: ScanOptions,
}

/// Detector returning a fixed outcome and recording every call
pub struct MockDetector {
    outcome: Result<Detection, DetectError>,
    calls: Mutex<Vec<DetectCall>>,
}

impl MockDetector {
    pub fn returning(detection: Detection) -> Self {
        Self {
            outcome: Ok(detection),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DetectError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<DetectCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Detector for MockDetector {
    async fn detect(
        &self,
        target: &str,
        image_id: &str,
        layer_ids: &[String],
        options: &ScanOptions,
    ) -> Result<Detection, DetectError> {
        self.calls.lock().await.push(DetectCall {
            target: target.to_string(),
            image_id: image_id.to_string(),
            layer_ids: layer_ids.to_vec(),
            options: options.clone(),
        });
        self.outcome.clone()
    }
}

/// Resolver that only returns once its token is cancelled
pub struct CancellableResolver;

#[async_trait]
impl IdentityResolver for CancellableResolver {
    async fn resolve(&self, cancel: &CancellationToken) -> Result<ImageIdentity, ResolveError> {
        cancel.cancelled().await;
        Err(ResolveError::Cancelled)
    }
}
