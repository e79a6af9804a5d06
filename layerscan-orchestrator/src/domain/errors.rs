//! Scan failure classification

use layerscan_core::domain::{DetectError, ResolveError};

/// Phase in which a scan failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanFailureKind {
    /// The image could not be identified
    AnalysisFailure,
    /// The image was identified but detection did not complete
    DetectionFailure,
}

/// Error returned by a scan
///
/// The message prefixes are matched by callers and must not change.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed analysis: {0}")]
    Analysis(#[from] ResolveError),

    #[error("scan failed: {0}")]
    Detection(#[from] DetectError),
}

impl ScanError {
    pub fn kind(&self) -> ScanFailureKind {
        match self {
            Self::Analysis(_) => ScanFailureKind::AnalysisFailure,
            Self::Detection(_) => ScanFailureKind::DetectionFailure,
        }
    }

    /// Whether the failing capability gave up because of cancellation or a deadline
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            Self::Analysis(ResolveError::Cancelled | ResolveError::TimedOut(_))
                | Self::Detection(DetectError::Cancelled)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::time::Duration;

    use super::*;
    use layerscan_core::domain::OsInfo;

    #[test]
    fn test_analysis_failure_message() {
        let err = ScanError::from(ResolveError::Other("error".to_string()));
        assert_eq!(err.to_string(), "failed analysis: error");
        assert_eq!(err.kind(), ScanFailureKind::AnalysisFailure);
    }

    #[test]
    fn test_detection_failure_message() {
        let err = ScanError::from(DetectError::UnknownOs);
        assert_eq!(
            err.to_string(),
            "scan failed: failed to apply layers: unknown OS"
        );
        assert_eq!(err.kind(), ScanFailureKind::DetectionFailure);
    }

    #[test]
    fn test_detection_failure_ignores_carried_os() {
        let err = ScanError::from(DetectError::Failed {
            message: "error".to_string(),
            os: Some(OsInfo::new("alpine", "3.11")),
        });
        assert_eq!(err.to_string(), "scan failed: error");
    }

    #[test]
    fn test_source_is_preserved() {
        let err = ScanError::from(ResolveError::ImageNotFound("alpine:3.11".to_string()));
        let source = err.source().expect("cause should be chained");
        assert_eq!(source.to_string(), "image not found: alpine:3.11");
    }

    #[test]
    fn test_cancellation_classification() {
        assert!(ScanError::from(ResolveError::Cancelled).is_cancellation());
        assert!(ScanError::from(ResolveError::TimedOut(Duration::from_secs(1))).is_cancellation());
        assert!(ScanError::from(DetectError::Cancelled).is_cancellation());
        assert!(!ScanError::from(DetectError::Database("locked".to_string())).is_cancellation());
    }
}
