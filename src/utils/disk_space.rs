use crate::error::ProbeError;
use crate::probe::units::bytes_to_megabytes;
use crate::probe::{DiskSpaceProbe, DiskSpaceReport, VolumeStatsSource};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Outcome of checking a volume against a size requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityCheck {
    pub available_megabytes: u64,
    pub required_megabytes: u64,
    pub sufficient: bool,
}

impl CapacityCheck {
    /// Compare an already fetched report against `required_bytes`
    ///
    /// Both sides are compared in whole megabytes, so a requirement is
    /// rounded down before comparison.
    pub fn from_report(report: &DiskSpaceReport, required_bytes: u64) -> Self {
        let required_megabytes = bytes_to_megabytes(required_bytes);
        Self {
            available_megabytes: report.available_megabytes,
            required_megabytes,
            sufficient: required_megabytes <= report.available_megabytes,
        }
    }
}

/// Check whether the volume containing `path` can take `required_bytes`
pub fn check_capacity<S: VolumeStatsSource>(
    probe: &DiskSpaceProbe<S>,
    path: &Path,
    required_bytes: u64,
) -> Result<CapacityCheck, ProbeError> {
    let report = probe.query(path)?;
    Ok(CapacityCheck::from_report(&report, required_bytes))
}

/// Check if there is enough disk space for an estimated output size
pub fn has_enough_space(path: &Path, required_bytes: u64) -> bool {
    match check_capacity(&DiskSpaceProbe::new(), path, required_bytes) {
        Ok(check) => check.sufficient,
        Err(e) => {
            // If we can't check, assume it's fine
            warn!("Could not check disk space for {}: {}", path.display(), e);
            true
        }
    }
}
