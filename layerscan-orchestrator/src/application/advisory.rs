//! Advisory messages derived from detector side outputs

use layerscan_core::domain::OsInfo;

pub fn end_of_support_warning(os: &OsInfo) -> String {
    format!(
        "This OS version is no longer supported by the distribution: {}. \
         Vulnerability detection may be incomplete because security updates are not provided",
        os
    )
}
