use super::report::RawVolumeStats;
use crate::error::ProbeError;
use std::path::Path;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

/// Source of raw volume statistics for a path
pub trait VolumeStatsSource {
    fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError>;
}

impl<S: VolumeStatsSource + ?Sized> VolumeStatsSource for &S {
    fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError> {
        (**self).volume_stats(path)
    }
}

/// The operating system's own free-space query
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSource;

impl VolumeStatsSource for NativeSource {
    #[cfg(unix)]
    fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError> {
        unix::volume_stats(path)
    }

    #[cfg(windows)]
    fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError> {
        windows::volume_stats(path)
    }

    #[cfg(not(any(unix, windows)))]
    fn volume_stats(&self, path: &Path) -> Result<RawVolumeStats, ProbeError> {
        Err(ProbeError::SystemCallFailed {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::Unsupported),
        })
    }
}
