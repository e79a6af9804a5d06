//! Scan value objects

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vulnerability category a scan can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VulnType {
    /// Packages installed by the OS distribution's package manager
    Os,
    /// Application dependencies discovered through lockfiles and manifests
    Library,
}

impl VulnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Library => "library",
        }
    }
}

impl fmt::Display for VulnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vulnerability type: {0}")]
pub struct UnknownVulnType(pub String);

impl FromStr for VulnType {
    type Err = UnknownVulnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "os" => Ok(Self::Os),
            "library" => Ok(Self::Library),
            _ => Err(UnknownVulnType(s.to_string())),
        }
    }
}

/// Caller-supplied scan configuration
///
/// The orchestrator forwards this to the detector untouched. Only the
/// detector interprets `vuln_type` and `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Category filter; an empty set scans every category
    pub vuln_type: BTreeSet<VulnType>,
    /// Detector-specific knobs, opaque to the orchestrator
    pub extra: HashMap<String, serde_json::Value>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vuln_types(types: impl IntoIterator<Item = VulnType>) -> Self {
        Self {
            vuln_type: types.into_iter().collect(),
            extra: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether findings of `vuln_type` fall inside this scan's filter
    pub fn includes(&self, vuln_type: VulnType) -> bool {
        self.vuln_type.is_empty() || self.vuln_type.contains(&vuln_type)
    }
}

/// Detected base distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    /// Distribution family, e.g. `alpine`
    pub family: String,
    /// Distribution version, e.g. `3.10`
    pub name: String,
}

impl OsInfo {
    pub fn new(family: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.name)
    }
}

/// Layer that introduced a vulnerable file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerProvenance {
    /// Compressed layer digest, as listed in `ImageIdentity::layer_ids`
    pub digest: String,
    /// Uncompressed content digest
    pub diff_id: String,
}
