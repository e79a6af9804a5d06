//! Image and detection fixtures

use layerscan_core::domain::{DetectedVulnerability, Detection, ImageIdentity, OsInfo, ScanResult};

pub const ALPINE_IMAGE_ID: &str =
    "sha256:e7d92cdc71feacf90708cb59182d0df1b911f8ae022d29e8e95d75ca6a99776a";
pub const ALPINE_LAYER: &str =
    "sha256:5216338b40a7b96416b8b9858974bbe4acc3096ee60acbc4dfb1ee02aecceb10";
pub const ALPINE_LAYER_DIFF_ID: &str =
    "sha256:b2a1a2d80bf0c747a4f6b0ca6af5eef23f043fcdb1ed4f3a3e750aef2dc68079";

pub fn alpine_identity() -> ImageIdentity {
    ImageIdentity::new("alpine:3.11", ALPINE_IMAGE_ID, vec![ALPINE_LAYER.to_string()])
}

/// OS result for vim plus an npm lockfile result for jquery
pub fn alpine_results() -> Vec<ScanResult> {
    vec![
        ScanResult::new("alpine:3.11").with_vulnerability(
            DetectedVulnerability::new("CVE-2019-9999", "vim", "1.2.3")
                .fixed_in("1.2.4")
                .in_layer(ALPINE_LAYER, ALPINE_LAYER_DIFF_ID),
        ),
        ScanResult::new("node-app/package-lock.json")
            .with_ecosystem("npm")
            .with_vulnerability(
                DetectedVulnerability::new("CVE-2019-11358", "jquery", "3.3.9").fixed_in(">=3.4.0"),
            ),
    ]
}

/// Detector output for the alpine image, with an end-of-support distribution
pub fn alpine_detection() -> Detection {
    Detection::new(alpine_results()).with_os(OsInfo::new("alpine", "3.10"), true)
}
