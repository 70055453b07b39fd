//! Disk-space probe
//!
//! Resolves a path to the volume it lives on, reads the raw byte counts from
//! the OS and reports them in whole binary megabytes.

pub mod report;
pub mod sys;
pub mod units;

pub use report::{DiskSpaceReport, RawVolumeStats, UsedBasis};
pub use sys::{NativeSource, VolumeStatsSource};

use crate::error::ProbeError;
use std::path::Path;
use tracing::debug;

/// Queries disk space through a stats source
#[derive(Debug, Clone, Default)]
pub struct DiskSpaceProbe<S = NativeSource> {
    source: S,
    basis: UsedBasis,
}

impl DiskSpaceProbe {
    /// Probe backed by the OS, measuring used space against free space
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: VolumeStatsSource> DiskSpaceProbe<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            basis: UsedBasis::default(),
        }
    }

    pub fn used_basis(mut self, basis: UsedBasis) -> Self {
        self.basis = basis;
        self
    }

    pub fn basis(&self) -> UsedBasis {
        self.basis
    }

    /// Disk space of the volume containing `path`
    pub fn query(&self, path: impl AsRef<Path>) -> Result<DiskSpaceReport, ProbeError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ProbeError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = self.source.volume_stats(path)?;
        let report = DiskSpaceReport::from_raw(raw, self.basis);
        debug!(
            "Disk space for {}: total={}MB available={}MB used={}MB",
            path.display(),
            report.total_megabytes,
            report.available_megabytes,
            report.used_megabytes
        );
        Ok(report)
    }
}

/// Disk space of the volume containing `path`, using the OS and the default basis
pub fn query(path: impl AsRef<Path>) -> Result<DiskSpaceReport, ProbeError> {
    DiskSpaceProbe::new().query(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A single fixed volume mounted at `root`
    pub(crate) struct FixedVolume {
        pub root: PathBuf,
        pub stats: RawVolumeStats,
    }

    impl VolumeStatsSource for FixedVolume {
        fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError> {
            if path.starts_with(&self.root) {
                Ok(self.stats)
            } else {
                Err(ProbeError::PathNotFound {
                    path: path.to_path_buf(),
                })
            }
        }
    }

    pub(crate) fn ten_gig_volume() -> FixedVolume {
        FixedVolume {
            root: PathBuf::from("/data"),
            stats: RawVolumeStats {
                total_bytes: 10_737_418_240,
                free_bytes: 5_368_709_120,
                available_bytes: 5_368_709_120,
            },
        }
    }

    #[test]
    fn test_query_fixed_volume() {
        let probe = DiskSpaceProbe::with_source(ten_gig_volume());
        let report = probe.query("/data/assets").unwrap();
        assert_eq!(
            report,
            DiskSpaceReport {
                total_megabytes: 10_240,
                available_megabytes: 5_120,
                used_megabytes: 5_120,
            }
        );
    }

    #[test]
    fn test_query_tiny_volume() {
        let volume = FixedVolume {
            root: PathBuf::from("/tiny"),
            stats: RawVolumeStats {
                total_bytes: 1_048_575,
                free_bytes: 0,
                available_bytes: 0,
            },
        };
        let report = DiskSpaceProbe::with_source(volume).query("/tiny").unwrap();
        assert_eq!(report.total_megabytes, 0);
    }

    #[test]
    fn test_basis_is_applied() {
        let volume = FixedVolume {
            root: PathBuf::from("/home"),
            stats: RawVolumeStats::from_megabytes(1_000, 300, 200),
        };
        let probe = DiskSpaceProbe::with_source(&volume);
        assert_eq!(probe.basis(), UsedBasis::Free);
        assert_eq!(probe.query("/home").unwrap().used_megabytes, 700);

        let probe = DiskSpaceProbe::with_source(&volume).used_basis(UsedBasis::Available);
        assert_eq!(probe.query("/home").unwrap().used_megabytes, 800);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let probe = DiskSpaceProbe::with_source(ten_gig_volume());
        assert!(matches!(
            probe.query("/elsewhere"),
            Err(ProbeError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_path_is_not_found() {
        assert!(matches!(query(""), Err(ProbeError::PathNotFound { .. })));
    }

    #[test]
    fn test_query_real_volume() {
        let dir = tempfile::tempdir().unwrap();
        for basis in [UsedBasis::Free, UsedBasis::Available] {
            let report = DiskSpaceProbe::new().used_basis(basis).query(dir.path()).unwrap();
            assert!(report.total_megabytes >= report.used_megabytes);
            assert!(report.available_megabytes <= report.total_megabytes);
        }
    }

    #[test]
    fn test_query_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does").join("not").join("exist");
        let err = query(&missing).unwrap_err();
        assert!(matches!(err, ProbeError::PathNotFound { ref path } if *path == missing));
    }
}
