//! Output formatting for CLI

use crate::models::{DirectoryStats, DownloadsSummary, FileEntry, FileKind};

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::File => "file",
        FileKind::Directory => "directory",
        FileKind::Symlink => "symlink",
        FileKind::Unknown => "unknown",
    }
}

/// Print a Downloads listing as a column table.
pub fn print_entries(root: &str, entries: &[FileEntry]) {
    if entries.is_empty() {
        println!("No visible entries in {root}.");
        return;
    }

    println!("{root} ({} entries)", entries.len());
    println!();
    println!(
        "{:<36} {:<9} {:<8} {:>10}  {:<19}",
        "Name", "Type", "Suffix", "Size", "Created"
    );
    println!("{}", "\u{2500}".repeat(88));

    for entry in entries {
        println!(
            "{:<36} {:<9} {:<8} {:>10}  {:<19}",
            clip(&entry.name, 36),
            kind_label(entry.kind),
            entry.suffix,
            entry.size,
            entry.creation_date
        );
    }
}

/// Print directory statistics as label/value lines.
pub fn print_stats(stats: &DirectoryStats) {
    println!("Directory:      {}", stats.name);
    println!("Files:          {}", stats.file_count);
    println!("Size:           {} ({} bytes)", stats.size, stats.byte_size);
    println!("Subdirectories: {}", stats.subdirectory_count);
    println!("Created:        {}", stats.creation_time);
}

/// Print a Downloads summary: totals plus the per-suffix breakdown.
pub fn print_summary(summary: &DownloadsSummary) {
    println!(
        "{} files, {} total",
        summary.total_files, summary.total_size
    );
    println!();
    println!("{:<12} {:>7} {:>12}", "Suffix", "Count", "Size");
    println!("{}", "\u{2500}".repeat(33));

    for (suffix, count) in &summary.suffixes_count {
        let label = if suffix.is_empty() { "(none)" } else { suffix };
        let size = summary
            .size_per_suffix
            .get(suffix)
            .map_or("0.00 B", String::as_str);
        println!("{label:<12} {count:>7} {size:>12}");
    }
}

/// Format a Downloads listing as JSON.
#[must_use]
pub fn entries_json(root: &str, entries: &[FileEntry]) -> String {
    let output = serde_json::json!({
        "root": root,
        "count": entries.len(),
        "entries": entries,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Format directory statistics as JSON.
#[must_use]
pub fn stats_json(stats: &DirectoryStats) -> String {
    serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
}

/// Format a Downloads summary as JSON.
#[must_use]
pub fn summary_json(summary: &DownloadsSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('\u{2026}');
    clipped
}
