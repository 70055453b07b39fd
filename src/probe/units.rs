use crate::error::ProbeError;

/// One binary megabyte
pub const BYTES_PER_MEGABYTE: u64 = 1 << 20;

/// Whole megabytes in `bytes`, truncated
pub fn bytes_to_megabytes(bytes: u64) -> u64 {
    bytes / BYTES_PER_MEGABYTE
}

/// Byte size of `blocks` units of `block_size` bytes
pub fn blocks_to_bytes(
    quantity: &'static str,
    blocks: u64,
    block_size: u64,
) -> Result<u64, ProbeError> {
    blocks
        .checked_mul(block_size)
        .ok_or(ProbeError::Overflow {
            quantity,
            value: blocks,
        })
}

/// Narrow a megabyte count to the `int32` used by the legacy C entry points
pub fn narrow_megabytes(quantity: &'static str, megabytes: u64) -> Result<i32, ProbeError> {
    i32::try_from(megabytes).map_err(|_| ProbeError::Overflow {
        quantity,
        value: megabytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_truncates() {
        assert_eq!(bytes_to_megabytes(0), 0);
        assert_eq!(bytes_to_megabytes(1_048_575), 0);
        assert_eq!(bytes_to_megabytes(1_048_576), 1);
        assert_eq!(bytes_to_megabytes(2 * 1_048_576 - 1), 1);
    }

    #[test]
    fn test_conversion_is_monotonic() {
        let samples = [
            0u64,
            1,
            1_048_575,
            1_048_576,
            5_368_709_120,
            10_737_418_240,
            u64::MAX - 1,
            u64::MAX,
        ];
        for pair in samples.windows(2) {
            assert!(bytes_to_megabytes(pair[0]) <= bytes_to_megabytes(pair[1]));
        }
    }

    #[test]
    fn test_full_width_byte_count_converts() {
        assert_eq!(bytes_to_megabytes(u64::MAX), u64::MAX >> 20);
    }

    #[test]
    fn test_blocks_to_bytes_overflow() {
        assert_eq!(blocks_to_bytes("total", 2_621_440, 4096).unwrap(), 10_737_418_240);
        let err = blocks_to_bytes("total", u64::MAX, 4096).unwrap_err();
        assert!(matches!(err, ProbeError::Overflow { quantity: "total", .. }));
    }

    #[test]
    fn test_narrowing_checks_range() {
        assert_eq!(narrow_megabytes("total", 10_240).unwrap(), 10_240);
        assert_eq!(narrow_megabytes("total", i32::MAX as u64).unwrap(), i32::MAX);

        // A volume this large used to wrap through the text buffer
        let err = narrow_megabytes("total", i32::MAX as u64 + 1).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Overflow { value, .. } if value == i32::MAX as u64 + 1
        ));
    }
}
