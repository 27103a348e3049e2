//! Unit tests for the pure Downloads summary aggregation

#[cfg(test)]
mod tests {
    use downman::models::{FileEntry, FileKind};
    use downman::services::downloads::summarize;
    use downman::services::format::format_bytes;

    fn entry(name: &str, suffix: &str, byte_size: u64) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            suffix: suffix.to_string(),
            kind: FileKind::File,
            size: format_bytes(byte_size),
            byte_size,
            creation_date: "2026-01-15 10:00:00".to_string(),
            path: format!("/downloads/{name}{suffix}"),
        }
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_totals_and_histograms() {
        let entries = vec![
            entry("report", ".pdf", 100),
            entry("slides", ".pdf", 200),
            entry("notes", ".txt", 300),
        ];

        let summary = summarize(&entries).expect("non-empty input");

        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.total_bytes, 600);
        assert_eq!(summary.total_size, "600.00 B");

        assert_eq!(summary.suffixes_count.get(".pdf"), Some(&2));
        assert_eq!(summary.suffixes_count.get(".txt"), Some(&1));

        assert_eq!(summary.bytes_per_suffix.get(".pdf"), Some(&300));
        assert_eq!(summary.bytes_per_suffix.get(".txt"), Some(&300));

        assert_eq!(
            summary.size_per_suffix.get(".pdf").map(String::as_str),
            Some("300.00 B")
        );
    }

    #[test]
    fn test_suffixless_entries_share_one_bucket() {
        let entries = vec![
            entry("Makefile", "", 10),
            entry("LICENSE", "", 20),
            entry("archive", ".zip", 1536),
        ];

        let summary = summarize(&entries).expect("non-empty input");

        assert_eq!(summary.suffixes_count.get(""), Some(&2));
        assert_eq!(summary.bytes_per_suffix.get(""), Some(&30));
        assert_eq!(
            summary.size_per_suffix.get(".zip").map(String::as_str),
            Some("1.50 KB")
        );
    }

    #[test]
    fn test_formatted_fields_derive_from_byte_fields() {
        let entries = vec![entry("blob", ".bin", 1024 * 1024)];
        let summary = summarize(&entries).expect("non-empty input");

        assert_eq!(summary.total_size, format_bytes(summary.total_bytes));
        for (suffix, bytes) in &summary.bytes_per_suffix {
            assert_eq!(
                summary.size_per_suffix.get(suffix).map(String::as_str),
                Some(format_bytes(*bytes).as_str())
            );
        }
    }
}
