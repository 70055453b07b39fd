use crate::error::ProbeError;
use crate::probe::report::RawVolumeStats;
use std::io;
use std::path::Path;
use widestring::U16CString;
use winapi::shared::winerror::{ERROR_FILE_NOT_FOUND, ERROR_INVALID_DRIVE, ERROR_PATH_NOT_FOUND};
use winapi::um::fileapi::GetDiskFreeSpaceExW;
use winapi::um::winnt::ULARGE_INTEGER;

/// Query the volume containing `path` with `GetDiskFreeSpaceExW`
pub fn volume_stats(path: &Path) -> Result<RawVolumeStats, ProbeError> {
    let dir = query_dir(path);
    let wide = U16CString::from_os_str(dir.as_os_str()).map_err(|_| {
        ProbeError::SystemCallFailed {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path contains a nul character"),
        }
    })?;

    let mut available: ULARGE_INTEGER = unsafe { std::mem::zeroed() };
    let mut total: ULARGE_INTEGER = unsafe { std::mem::zeroed() };
    let mut free: ULARGE_INTEGER = unsafe { std::mem::zeroed() };

    let ok = unsafe { GetDiskFreeSpaceExW(wide.as_ptr(), &mut available, &mut total, &mut free) };
    if ok == 0 {
        return Err(classify(path, io::Error::last_os_error()));
    }

    unsafe {
        Ok(RawVolumeStats {
            total_bytes: *total.QuadPart(),
            free_bytes: *free.QuadPart(),
            available_bytes: *available.QuadPart(),
        })
    }
}

/// Directory handed to the Win32 call, which rejects file paths
fn query_dir(path: &Path) -> &Path {
    if !path.is_file() {
        return path;
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        // A bare file name lives in the current directory
        _ => Path::new("."),
    }
}

fn classify(path: &Path, err: io::Error) -> ProbeError {
    let missing = matches!(
        err.raw_os_error().map(|code| code as u32),
        Some(ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND | ERROR_INVALID_DRIVE)
    );
    if missing {
        ProbeError::PathNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ProbeError::SystemCallFailed {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_free_space_on_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let raw = volume_stats(dir.path()).unwrap();
        assert!(raw.total_bytes > 0);
        assert!(raw.free_bytes <= raw.total_bytes);
    }

    #[test]
    fn test_file_resolves_to_parent() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(volume_stats(file.path()).is_ok());
    }

    #[test]
    fn test_relative_file_name_resolves_to_current_dir() {
        let file = tempfile::Builder::new()
            .suffix(".dat")
            .tempfile_in(".")
            .unwrap();
        let name = Path::new(file.path().file_name().unwrap());
        assert_eq!(query_dir(name), Path::new("."));

        let raw = volume_stats(name).unwrap();
        assert!(raw.total_bytes > 0);
    }

    #[test]
    fn test_directories_are_queried_as_given() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(query_dir(dir.path()), dir.path());
        assert_eq!(query_dir(Path::new(".")), Path::new("."));
    }

    #[test]
    fn test_error_classification() {
        let path = Path::new("Q:\\nowhere");
        let err = io::Error::from_raw_os_error(ERROR_INVALID_DRIVE as i32);
        assert!(matches!(classify(path, err), ProbeError::PathNotFound { .. }));

        let err = io::Error::from_raw_os_error(5);
        assert!(matches!(
            classify(path, err),
            ProbeError::SystemCallFailed { .. }
        ));
    }
}
