use crate::probe::units::BYTES_PER_MEGABYTE;
use humansize::{BINARY, format_size};

/// Format a byte count in binary units (KiB, MiB, GiB)
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format a whole-megabyte count as reported by the probe
pub fn format_megabytes(megabytes: u64) -> String {
    format_bytes(megabytes.saturating_mul(BYTES_PER_MEGABYTE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(10_240), "10 GiB");
        assert_eq!(format_megabytes(1), "1 MiB");
        assert_eq!(format_megabytes(0), "0 B");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(1024), "1 KiB");
        assert_eq!(format_bytes(5_368_709_120), "5 GiB");
    }
}
