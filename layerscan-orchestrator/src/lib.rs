//! Layerscan Orchestrator - Two-phase container image scanning
//!
//! This crate composes the two capabilities defined in `layerscan-core` into a
//! single scan call:
//!
//! 1. **Identity resolution** — an [`IdentityResolver`](layerscan_core::domain::IdentityResolver)
//!    reports the image name, config digest and ordered layer list.
//! 2. **Detection** — a [`Detector`](layerscan_core::domain::Detector) matches the
//!    image's OS packages and application manifests against a vulnerability
//!    knowledge base.
//!
//! Failures are classified by phase:
//!
//! | Phase | Error | Message prefix |
//! |-------|-------|----------------|
//! | Identity resolution | [`ScanError::Analysis`] | `failed analysis: ` |
//! | Detection | [`ScanError::Detection`] | `scan failed: ` |
//!
//! On success the detector's results are returned exactly as produced.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use layerscan_core::domain::{ScanOptions, VulnType};
//! use layerscan_orchestrator::ImageScanner;
//!
//! let scanner = ImageScanner::new(Arc::new(resolver), Arc::new(detector));
//! let results = scanner
//!     .scan_image(&ScanOptions::with_vuln_types([VulnType::Os]))
//!     .await?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! layerscan-orchestrator/
//! ├── domain/           # ScanError, ScanReport
//! └── application/
//!     ├── scanner.rs    # ImageScanner
//!     └── advisory.rs   # End-of-support banner
//! ```

pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
