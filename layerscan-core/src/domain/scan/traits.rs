//! Capability traits consumed by the scan orchestrator

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::entities::Detection;
use super::errors::{DetectError, ResolveError};
use super::value_objects::ScanOptions;
use crate::domain::image::ImageIdentity;

/// Inspects the image under scan and reports its identity and layers
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the image identity
    ///
    /// Implementations must watch `cancel` and return promptly with
    /// [`ResolveError::Cancelled`] once it fires.
    async fn resolve(&self, cancel: &CancellationToken) -> Result<ImageIdentity, ResolveError>;
}

/// Matches installed software against a vulnerability knowledge base
#[async_trait]
pub trait Detector: Send + Sync {
    /// Detect vulnerabilities in the image identified by `image_id`
    ///
    /// # Arguments
    /// * `target` - Human-readable image reference, used as the OS result's target
    /// * `image_id` - Content digest of the image config
    /// * `layer_ids` - Layer digests, base layer first
    /// * `options` - Caller options, forwarded unchanged
    ///
    /// # Returns
    /// * `Ok(Detection)` - Results in discovery order plus OS identification
    /// * `Err(DetectError)` - Detection failed; no partial results survive
    async fn detect(
        &self,
        target: &str,
        image_id: &str,
        layer_ids: &[String],
        options: &ScanOptions,
    ) -> Result<Detection, DetectError>;
}
