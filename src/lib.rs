//! Layerscan - Container image vulnerability scanning
//!
//! This is the top-level crate that wires configuration into the scan
//! orchestrator. Callers bring their own identity resolver and detector.

mod app;

pub use app::{create_scanner, default_scan_options};
pub use layerscan_core::{Config, init_tracing};

// Re-export for convenience
pub use layerscan_core;
pub use layerscan_orchestrator;
