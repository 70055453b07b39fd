//! C linkage for hosts that load the library through FFI
//!
//! The `int32` entry points keep the names and return convention managed
//! callers already bind to: a megabyte count, or `-1` on any failure.
//! `diskprobe_query` is the 64-bit variant with a status code.

#![allow(non_snake_case)]

use crate::error::ProbeError;
use crate::probe::units::narrow_megabytes;
use crate::probe::{DiskSpaceProbe, DiskSpaceReport};
use crate::utils::logger::init_logging;
use std::ffi::{CStr, c_char};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;

/// Returned by the `int32` entry points when the query fails
pub const FAILURE: i32 = -1;

/// `diskprobe_query` succeeded
pub const STATUS_OK: i32 = 0;
/// `diskprobe_query` got a null output pointer or an undecodable path
pub const STATUS_INVALID_ARGUMENT: i32 = 4;

/// Disk-space figures in binary megabytes, laid out for C
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskProbeReport {
    pub total_megabytes: u64,
    pub available_megabytes: u64,
    pub used_megabytes: u64,
}

impl From<DiskSpaceReport> for DiskProbeReport {
    fn from(report: DiskSpaceReport) -> Self {
        Self {
            total_megabytes: report.total_megabytes,
            available_megabytes: report.available_megabytes,
            used_megabytes: report.used_megabytes,
        }
    }
}

/// Decode a C path argument; null means the current directory
///
/// # Safety
/// `path` must be null or point to a nul-terminated string.
unsafe fn decode_path(path: *const c_char) -> Option<PathBuf> {
    if path.is_null() {
        return Some(PathBuf::from("."));
    }
    path_from_c(unsafe { CStr::from_ptr(path) })
}

#[cfg(unix)]
fn path_from_c(raw: &CStr) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    Some(PathBuf::from(std::ffi::OsStr::from_bytes(raw.to_bytes())))
}

#[cfg(not(unix))]
fn path_from_c(raw: &CStr) -> Option<PathBuf> {
    raw.to_str().ok().map(PathBuf::from)
}

/// Run the query for a C path argument
///
/// # Safety
/// Same as [`decode_path`].
unsafe fn query_c_path(path: *const c_char) -> Option<Result<DiskSpaceReport, ProbeError>> {
    let path = unsafe { decode_path(path) }?;
    Some(DiskSpaceProbe::new().query(&path))
}

/// Shared body of the `int32` entry points
///
/// # Safety
/// Same as [`decode_path`].
unsafe fn legacy_query(
    name: &'static str,
    path: *const c_char,
    pick: fn(&DiskSpaceReport) -> u64,
) -> i32 {
    let Some(result) = (unsafe { query_c_path(path) }) else {
        warn!("{}: path is not valid UTF-8", name);
        return FAILURE;
    };

    match result.and_then(|report| narrow_megabytes(name, pick(&report))) {
        Ok(megabytes) => megabytes,
        Err(e) => {
            warn!("{}: {}", name, e);
            FAILURE
        }
    }
}

/// Total megabytes of the volume containing `path`, or `-1`
///
/// # Safety
/// `path` must be null or point to a nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getTotalDiskSpace(path: *const c_char) -> i32 {
    unsafe { legacy_query("total megabytes", path, |r| r.total_megabytes) }
}

/// Megabytes available to the caller on the volume containing `path`, or `-1`
///
/// # Safety
/// `path` must be null or point to a nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getAvailableDiskSpace(path: *const c_char) -> i32 {
    unsafe { legacy_query("available megabytes", path, |r| r.available_megabytes) }
}

/// Used megabytes (total minus free) on the volume containing `path`, or `-1`
///
/// # Safety
/// `path` must be null or point to a nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn getBusyDiskSpace(path: *const c_char) -> i32 {
    unsafe { legacy_query("used megabytes", path, |r| r.used_megabytes) }
}

/// Fill `out` with the full 64-bit report for `path`
///
/// Returns `0` on success, `1` when the path is not found, `2` when the
/// system call failed, `3` on overflow and `4` on invalid arguments. `out` is
/// left untouched on failure.
///
/// # Safety
/// `path` must be null or point to a nul-terminated string, and `out` must be
/// null or valid for writes of one `DiskProbeReport`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn diskprobe_query(path: *const c_char, out: *mut DiskProbeReport) -> i32 {
    if out.is_null() {
        warn!("diskprobe_query: null output pointer");
        return STATUS_INVALID_ARGUMENT;
    }
    let Some(result) = (unsafe { query_c_path(path) }) else {
        warn!("diskprobe_query: path is not valid UTF-8");
        return STATUS_INVALID_ARGUMENT;
    };

    match result {
        Ok(report) => {
            unsafe { out.write(report.into()) };
            STATUS_OK
        }
        Err(e) => {
            warn!("diskprobe_query: {}", e);
            e.status_code()
        }
    }
}

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);
static LOG_ACTIVE: OnceLock<bool> = OnceLock::new();

/// Enable file logging when `DISKPROBE_DEBUG` is set; safe to call repeatedly
///
/// Returns whether this library's logger is active.
#[unsafe(no_mangle)]
pub extern "C" fn diskprobe_init_logging() -> bool {
    *LOG_ACTIVE.get_or_init(|| match init_logging() {
        Some(guard) => {
            if let Ok(mut slot) = LOG_GUARD.lock() {
                *slot = Some(guard);
            }
            true
        }
        None => false,
    })
}
