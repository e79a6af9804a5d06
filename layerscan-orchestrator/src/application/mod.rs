//! Orchestrator application layer

pub mod advisory;
pub mod scanner;

pub use advisory::end_of_support_warning;
pub use scanner::{ImageScanner, ScannerSettings};
