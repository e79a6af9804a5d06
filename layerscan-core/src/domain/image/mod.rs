//! Image identity produced by the identity resolver

use serde::{Deserialize, Serialize};

/// Identity and layer inventory of the image under scan
///
/// Created once per scan by an [`IdentityResolver`](crate::domain::IdentityResolver)
/// and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageIdentity {
    /// Human-readable reference, e.g. `alpine:3.11`
    pub name: String,
    /// Content-addressed digest of the image config
    pub id: String,
    /// Layer digests in application order, base layer first
    pub layer_ids: Vec<String>,
}

impl ImageIdentity {
    pub fn new(name: impl Into<String>, id: impl Into<String>, layer_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            layer_ids,
        }
    }

    /// Whether `digest` is one of this image's layers
    pub fn contains_layer(&self, digest: &str) -> bool {
        self.layer_ids.iter().any(|layer| layer == digest)
    }

    pub fn base_layer(&self) -> Option<&str> {
        self.layer_ids.first().map(String::as_str)
    }

    pub fn top_layer(&self) -> Option<&str> {
        self.layer_ids.last().map(String::as_str)
    }
}
