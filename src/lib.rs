//! Disk-space statistics for the volume containing a path, as a Rust API and
//! under C linkage for hosts calling in through FFI.

pub mod config;
pub mod error;
pub mod ffi;
pub mod probe;
pub mod utils;

pub use error::{AppError, ProbeError};
pub use probe::{DiskSpaceProbe, DiskSpaceReport, RawVolumeStats, UsedBasis, query};
