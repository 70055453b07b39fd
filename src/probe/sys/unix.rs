use crate::error::ProbeError;
use crate::probe::report::RawVolumeStats;
use nix::errno::Errno;
use nix::sys::statvfs::statvfs;
use std::path::Path;

/// Query the volume containing `path` with `statvfs`
pub fn volume_stats(path: &Path) -> Result<RawVolumeStats, ProbeError> {
    let stat = statvfs(path).map_err(|errno| classify(path, errno))?;

    // f_frsize is the unit for the block counts; some filesystems leave it 0
    let block_size = match stat.fragment_size() as u64 {
        0 => stat.block_size() as u64,
        size => size,
    };

    RawVolumeStats::from_blocks(
        stat.blocks() as u64,
        stat.blocks_free() as u64,
        stat.blocks_available() as u64,
        block_size,
    )
}

fn classify(path: &Path, errno: Errno) -> ProbeError {
    match errno {
        Errno::ENOENT | Errno::ENOTDIR => ProbeError::PathNotFound {
            path: path.to_path_buf(),
        },
        other => ProbeError::SystemCallFailed {
            path: path.to_path_buf(),
            source: std::io::Error::from(other),
        },
    }
}
