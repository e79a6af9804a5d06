//! Domain Layer - Data model shared by the orchestrator and its capabilities
//!
//! The types here are produced by the identity resolver and the detector and
//! consumed by the scan orchestrator. None of them carry behavior beyond
//! simple accessors; matching logic lives behind the capability traits.

pub mod image;
pub mod scan;

pub use image::*;
pub use scan::*;
