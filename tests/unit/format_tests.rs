//! Unit tests for byte-size and timestamp formatting

#[cfg(test)]
mod tests {
    use downman::services::format::{format_bytes, format_timestamp};
    use std::time::SystemTime;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_bytes(0), "0.00 B");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_bytes(1023), "1023.00 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024 - 1024), "1023.00 KB");
    }

    #[test]
    fn test_no_promotion_across_boundary() {
        // 1 MiB minus one byte is 1023.999 KB; the unit must stay KB even
        // though the displayed magnitude rounds to 1024.00.
        assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 KB");
    }

    #[test]
    fn test_each_unit() {
        assert_eq!(format_bytes(5 * 1024u64.pow(2)), "5.00 MB");
        assert_eq!(format_bytes(5 * 1024u64.pow(3)), "5.00 GB");
        assert_eq!(format_bytes(5 * 1024u64.pow(4)), "5.00 TB");
        assert_eq!(format_bytes(5 * 1024u64.pow(5)), "5.00 PB");
    }

    #[test]
    fn test_beyond_petabytes_keeps_pb_label() {
        // The unit list ends at PB; larger values keep the label and the
        // magnitude is allowed to exceed 1024.
        assert_eq!(format_bytes(1024u64.pow(6)), "1024.00 PB");
    }

    #[test]
    fn test_timestamp_shape() {
        let rendered = format_timestamp(SystemTime::now());
        assert_eq!(rendered.len(), 19, "expected YYYY-MM-DD HH:MM:SS: {rendered}");
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
    }
}
