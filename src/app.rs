//! Application setup and wiring

use std::sync::Arc;

use layerscan_core::Config;
use layerscan_core::domain::{Detector, IdentityResolver, ScanOptions};
use layerscan_orchestrator::{ImageScanner, ScannerSettings};

/// Build an image scanner from loaded configuration
pub fn create_scanner(
    config: &Config,
    resolver: Arc<dyn IdentityResolver>,
    detector: Arc<dyn Detector>,
) -> ImageScanner {
    let settings = ScannerSettings::from_config(&config.scan);
    tracing::info!(
        resolve_timeout = ?settings.resolve_timeout,
        warn_on_orphan_layers = settings.warn_on_orphan_layers,
        "Image scanner configured"
    );

    ImageScanner::new(resolver, detector).with_settings(settings)
}

/// Scan options seeded with the configured default categories
///
/// An empty `scan.default_vuln_types` yields unfiltered options.
pub fn default_scan_options(config: &Config) -> ScanOptions {
    ScanOptions::with_vuln_types(config.scan.default_vuln_types.iter().copied())
}
