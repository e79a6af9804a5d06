//! Layerscan Core - Shared foundation for container image scanning
//!
//! This crate holds everything that crosses the boundary between the scan
//! orchestrator and the two capabilities it drives:
//!
//! # Modules
//!
//! - [`domain`] — Image identity, scan options, result records and the
//!   `IdentityResolver` / `Detector` capability traits
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`logging`] — Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! layerscan-core/
//! ├── domain/
//! │   ├── image/        # ImageIdentity
//! │   └── scan/         # ScanOptions, ScanResult, capability traits and errors
//! ├── config/           # Configuration management
//! └── logging.rs        # tracing-subscriber setup
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use layerscan_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `LAYERSCAN__` prefix with double underscore separators:
//!
//! ```bash
//! LAYERSCAN__SCAN__RESOLVE_TIMEOUT_SECONDS=120
//! LAYERSCAN__LOGGING__LEVEL=debug
//! ```

pub mod config;
pub mod domain;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
