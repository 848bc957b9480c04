const GIGABYTE: u64 = 1073741824;

/// Convert a byte count to whole gigabytes, truncating the remainder
pub(crate) fn bytes_to_gb(bytes: u64) -> u64 {
    bytes / GIGABYTE
}

/// Convert a byte count to gigabytes rounded to one decimal place
pub(crate) fn bytes_to_gb_rounded(bytes: u64) -> f64 {
    let decimal_adjust = 10.0;
    (bytes as f64 / GIGABYTE as f64 * decimal_adjust).round() / decimal_adjust
}

#[cfg(test)]
mod tests {
    use super::{bytes_to_gb, bytes_to_gb_rounded};

    #[test]
    fn test_bytes_to_gb() {
        assert_eq!(bytes_to_gb(499963174912), 465);
        assert_eq!(bytes_to_gb(1073741823), 0);
        assert_eq!(bytes_to_gb(0), 0);
    }

    #[test]
    fn test_bytes_to_gb_rounded() {
        assert_eq!(bytes_to_gb_rounded(8589934592), 8.0);
        assert_eq!(bytes_to_gb_rounded(17042430230), 15.9);
        assert_eq!(bytes_to_gb_rounded(0), 0.0);
    }

    #[test]
    fn test_bytes_to_gb_rounded_one_decimal() {
        let value = bytes_to_gb_rounded(123456789012);
        let decimal_adjust = 10.0;
        assert_eq!(
            value,
            (value * decimal_adjust).round() / decimal_adjust
        );
    }
}
