//! Image scan orchestration

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use layerscan_core::config::ScanConfig;
use layerscan_core::domain::{
    Detector, IdentityResolver, ImageIdentity, ResolveError, ScanOptions, ScanResult,
};

use crate::domain::entities::ScanReport;
use crate::domain::errors::ScanError;

/// Immutable scanner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerSettings {
    /// Deadline for identity resolution; `None` waits indefinitely
    pub resolve_timeout: Option<Duration>,
    pub warn_on_orphan_layers: bool,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            resolve_timeout: None,
            warn_on_orphan_layers: true,
        }
    }
}

impl ScannerSettings {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            resolve_timeout: config.resolve_timeout(),
            warn_on_orphan_layers: config.warn_on_orphan_layers,
        }
    }
}

/// Two-phase image scanner
///
/// Resolves the image identity, then hands it to the detector. The scanner
/// holds no per-call state, so one instance can serve concurrent callers as
/// long as its capabilities are safe for concurrent use.
#[derive(Clone)]
pub struct ImageScanner {
    resolver: Arc<dyn IdentityResolver>,
    detector: Arc<dyn Detector>,
    settings: ScannerSettings,
}

impl ImageScanner {
    pub fn new(resolver: Arc<dyn IdentityResolver>, detector: Arc<dyn Detector>) -> Self {
        Self {
            resolver,
            detector,
            settings: ScannerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ScannerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ScannerSettings {
        &self.settings
    }

    /// Scan the image and return the detector's results unchanged
    pub async fn scan_image(&self, options: &ScanOptions) -> Result<Vec<ScanResult>, ScanError> {
        let cancel = CancellationToken::new();
        self.scan_image_with_cancellation(options, &cancel).await
    }

    /// Like [`scan_image`](Self::scan_image), with a caller-owned cancellation token
    ///
    /// The token is forwarded to the identity resolver.
    pub async fn scan_image_with_cancellation(
        &self,
        options: &ScanOptions,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScanResult>, ScanError> {
        self.run(options, cancel).await.map(|report| report.results)
    }

    /// Scan the image and keep the detector's OS and end-of-support outputs
    pub async fn scan_image_with_advisory(
        &self,
        options: &ScanOptions,
    ) -> Result<ScanReport, ScanError> {
        let cancel = CancellationToken::new();
        self.run(options, &cancel).await
    }

    async fn run(
        &self,
        options: &ScanOptions,
        cancel: &CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        let scan_id = Uuid::new_v4();
        let span = tracing::info_span!("scan_image", %scan_id);
        self.execute(scan_id, options, cancel).instrument(span).await
    }

    async fn execute(
        &self,
        scan_id: Uuid,
        options: &ScanOptions,
        cancel: &CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        tracing::debug!("Resolving image identity");
        let identity = self.resolve(cancel).await.map_err(|e| {
            tracing::error!(error = %e, "Image identity resolution failed");
            ScanError::Analysis(e)
        })?;

        tracing::debug!(
            image = %identity.name,
            image_id = %identity.id,
            layers = identity.layer_ids.len(),
            "Detecting vulnerabilities"
        );
        let detection = self
            .detector
            .detect(&identity.name, &identity.id, &identity.layer_ids, options)
            .await
            .map_err(|e| {
                tracing::error!(image = %identity.name, error = %e, "Detection failed");
                ScanError::Detection(e)
            })?;

        if self.settings.warn_on_orphan_layers {
            warn_orphan_layers(&identity, &detection.results);
        }

        tracing::info!(
            image = %identity.name,
            results = detection.results.len(),
            os = ?detection.os,
            end_of_support = detection.end_of_support,
            "Scan completed"
        );

        Ok(ScanReport {
            scan_id,
            image: identity,
            results: detection.results,
            os: detection.os,
            end_of_support: detection.end_of_support,
            scanned_at: chrono::Utc::now(),
        })
    }

    async fn resolve(&self, cancel: &CancellationToken) -> Result<ImageIdentity, ResolveError> {
        let Some(timeout) = self.settings.resolve_timeout else {
            return self.resolver.resolve(cancel).await;
        };

        let deadline = cancel.child_token();
        match tokio::time::timeout(timeout, self.resolver.resolve(&deadline)).await {
            Ok(result) => result,
            Err(_) => {
                deadline.cancel();
                Err(ResolveError::TimedOut(timeout))
            }
        }
    }
}

/// Findings must point at layers of the scanned image; report the ones that don't
fn warn_orphan_layers(identity: &ImageIdentity, results: &[ScanResult]) {
    for result in results {
        for digest in result.layer_digests() {
            if !identity.contains_layer(digest) {
                tracing::warn!(
                    image = %identity.name,
                    target = %result.target,
                    layer = %digest,
                    "Finding references a layer that is not part of the image"
                );
            }
        }
    }
}
