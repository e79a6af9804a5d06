//! Orchestrator domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use layerscan_core::domain::{ImageIdentity, OsInfo, ScanResult};

use crate::application::advisory::end_of_support_warning;

/// Outcome of a successful scan, including advisory data
///
/// `results` is exactly what [`ImageScanner::scan_image`](crate::ImageScanner::scan_image)
/// returns. `os` and `end_of_support` are informational only.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub image: ImageIdentity,
    pub results: Vec<ScanResult>,
    pub os: Option<OsInfo>,
    pub end_of_support: bool,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    /// Total vulnerabilities across every result
    pub fn vulnerability_count(&self) -> usize {
        self.results.iter().map(|r| r.vulnerabilities.len()).sum()
    }

    pub fn targets(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.target.as_str()).collect()
    }

    /// Caller-side banner for an unsupported distribution, if any
    pub fn end_of_support_warning(&self) -> Option<String> {
        match (&self.os, self.end_of_support) {
            (Some(os), true) => Some(end_of_support_warning(os)),
            _ => None,
        }
    }

    /// Emit advisory warnings through `tracing`
    pub fn log_advisories(&self) {
        if let Some(warning) = self.end_of_support_warning() {
            tracing::warn!(image = %self.image.name, "{}", warning);
        }
    }
}
