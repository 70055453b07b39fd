use super::units::{BYTES_PER_MEGABYTE, blocks_to_bytes, bytes_to_megabytes};
use crate::error::ProbeError;
use serde::{Deserialize, Serialize};

/// Byte quantities for one volume, as reported by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawVolumeStats {
    /// Total capacity of the volume
    pub total_bytes: u64,
    /// Unused capacity, ignoring quotas
    pub free_bytes: u64,
    /// Capacity the calling user may still use
    pub available_bytes: u64,
}

impl RawVolumeStats {
    /// Stats from `statvfs`-style block counts
    pub fn from_blocks(
        blocks: u64,
        blocks_free: u64,
        blocks_available: u64,
        block_size: u64,
    ) -> Result<Self, ProbeError> {
        Ok(Self {
            total_bytes: blocks_to_bytes("total bytes", blocks, block_size)?,
            free_bytes: blocks_to_bytes("free bytes", blocks_free, block_size)?,
            available_bytes: blocks_to_bytes("available bytes", blocks_available, block_size)?,
        })
    }

    /// Stats from megabyte figures, for fixtures
    #[cfg(test)]
    pub(crate) fn from_megabytes(total: u64, free: u64, available: u64) -> Self {
        Self {
            total_bytes: total * BYTES_PER_MEGABYTE,
            free_bytes: free * BYTES_PER_MEGABYTE,
            available_bytes: available * BYTES_PER_MEGABYTE,
        }
    }
}

/// Which remaining-space figure "used" is measured against
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UsedBasis {
    /// `total - free`: system-wide usage, quotas ignored
    #[default]
    Free,
    /// `total - available`: usage as seen by the calling user
    Available,
}

/// Disk-space figures for one volume, in binary megabytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskSpaceReport {
    pub total_megabytes: u64,
    pub available_megabytes: u64,
    pub used_megabytes: u64,
}

impl DiskSpaceReport {
    /// Convert raw byte counts into a report
    ///
    /// Used space is subtracted in bytes before truncating, so a volume with
    /// 1.5 MiB total and 0.75 MiB free reports 0 MiB used, not 1 - 0.
    pub fn from_raw(raw: RawVolumeStats, basis: UsedBasis) -> Self {
        let remaining = match basis {
            UsedBasis::Free => raw.free_bytes,
            UsedBasis::Available => raw.available_bytes,
        };
        if remaining > raw.total_bytes {
            tracing::warn!(
                "Volume reports more remaining space ({}) than total ({}); clamping used to 0",
                remaining,
                raw.total_bytes
            );
        }

        Self {
            total_megabytes: bytes_to_megabytes(raw.total_bytes),
            available_megabytes: bytes_to_megabytes(raw.available_bytes),
            used_megabytes: bytes_to_megabytes(raw.total_bytes.saturating_sub(remaining)),
        }
    }
}
