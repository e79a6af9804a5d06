//! Scan result entities

use serde::{Deserialize, Serialize};

use super::value_objects::{LayerProvenance, OsInfo};

/// Findings for one scanned unit: the image's OS scope or a discovered manifest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// OS scope (usually the image name) or the manifest's path
    pub target: String,
    /// Ecosystem tag such as `npm`; `None` for OS-level results
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ecosystem_type: Option<String>,
    /// Vulnerabilities in the detector's order
    pub vulnerabilities: Vec<DetectedVulnerability>,
}

impl ScanResult {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ecosystem_type: None,
            vulnerabilities: Vec::new(),
        }
    }

    pub fn with_ecosystem(mut self, ecosystem: impl Into<String>) -> Self {
        self.ecosystem_type = Some(ecosystem.into());
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: DetectedVulnerability) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    /// Layer digests referenced by this result's vulnerabilities
    pub fn layer_digests(&self) -> impl Iterator<Item = &str> {
        self.vulnerabilities
            .iter()
            .filter_map(|v| v.layer.as_ref())
            .map(|layer| layer.digest.as_str())
    }
}

/// A single package affected by a known vulnerability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedVulnerability {
    pub vulnerability_id: String,
    pub package_name: String,
    pub installed_version: String,
    /// `None` when no fixed release exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<LayerProvenance>,
}

impl DetectedVulnerability {
    pub fn new(
        vulnerability_id: impl Into<String>,
        package_name: impl Into<String>,
        installed_version: impl Into<String>,
    ) -> Self {
        Self {
            vulnerability_id: vulnerability_id.into(),
            package_name: package_name.into(),
            installed_version: installed_version.into(),
            fixed_version: None,
            layer: None,
        }
    }

    pub fn fixed_in(mut self, version: impl Into<String>) -> Self {
        self.fixed_version = Some(version.into());
        self
    }

    pub fn in_layer(mut self, digest: impl Into<String>, diff_id: impl Into<String>) -> Self {
        self.layer = Some(LayerProvenance {
            digest: digest.into(),
            diff_id: diff_id.into(),
        });
        self
    }

    pub fn has_fix(&self) -> bool {
        self.fixed_version.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Everything a detector reports for one successful detection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Detection {
    /// Results in discovery order
    pub results: Vec<ScanResult>,
    /// Base distribution, when it could be identified
    pub os: Option<OsInfo>,
    /// The detected distribution no longer receives security updates
    pub end_of_support: bool,
}

impl Detection {
    pub fn new(results: Vec<ScanResult>) -> Self {
        Self {
            results,
            os: None,
            end_of_support: false,
        }
    }

    pub fn with_os(mut self, os: OsInfo, end_of_support: bool) -> Self {
        self.os = Some(os);
        self.end_of_support = end_of_support;
        self
    }
}
