//! Human-readable console output.
//!
//! Progress and summary text is written to any `io::Write` sink so runs can
//! be captured in tests; the CLI passes stdout.

use std::io::{self, Write};

use crate::orchestrator::RunSummary;

/// Width of the `=` rule framing banners and the summary.
pub const RULE_WIDTH: usize = 50;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count with one decimal, scaling by 1024 up to TB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Writes the run banner: title, task count and model description.
pub fn write_banner<W: Write>(
    out: &mut W,
    title: &str,
    total: usize,
    models: &str,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Total models: {}", total)?;
    writeln!(out, "Models: {}", models)
}

/// Writes the end-of-run summary, followed by either the next steps or a
/// retry hint.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    next_steps: &[&str],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "📊 Download Summary")?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "✓ Successfully downloaded: {}/{} models",
        summary.succeeded, summary.total
    )?;
    writeln!(out, "📦 Total size: {}", format_size(summary.total_bytes))?;

    if summary.all_succeeded() {
        writeln!(out)?;
        writeln!(out, "🎉 All models downloaded successfully!")?;
        if !next_steps.is_empty() {
            writeln!(out)?;
            writeln!(out, "Next steps:")?;
            for (i, step) in next_steps.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, step)?;
            }
        }
    } else {
        writeln!(out)?;
        writeln!(out, "⚠️  {} model(s) failed to download", summary.failed())?;
        writeln!(out, "Please check your internet connection and try again")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1.0 B");
        assert_eq!(format_size(300), "300.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
    }

    #[test]
    fn test_format_size_scaled_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
    }

    #[test]
    fn test_format_size_terabytes() {
        let tb = 1024u64.pow(4);
        assert_eq!(format_size(tb), "1.0 TB");
        assert_eq!(format_size(tb * 2048), "2048.0 TB");
    }

    #[test]
    fn test_write_banner() {
        let mut out = Vec::new();
        write_banner(&mut out, "Downloader", 3, "Model (a, b, c)").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Downloader\n"));
        assert!(text.contains(&"=".repeat(RULE_WIDTH)));
        assert!(text.contains("Total models: 3\n"));
        assert!(text.contains("Models: Model (a, b, c)\n"));
    }

    #[test]
    fn test_write_summary_all_succeeded() {
        let summary = RunSummary {
            total: 2,
            succeeded: 2,
            total_bytes: 2048,
            outcomes: Vec::new(),
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary, &["Copy files", "Build"]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("✓ Successfully downloaded: 2/2 models"));
        assert!(text.contains("📦 Total size: 2.0 KB"));
        assert!(text.contains("🎉 All models downloaded successfully!"));
        assert!(text.contains("1. Copy files\n2. Build\n"));
        assert!(!text.contains("failed to download"));
    }

    #[test]
    fn test_write_summary_with_failures() {
        let summary = RunSummary {
            total: 3,
            succeeded: 1,
            total_bytes: 0,
            outcomes: Vec::new(),
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary, &["unused"]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1/3 models"));
        assert!(text.contains("📦 Total size: 0 B"));
        assert!(text.contains("⚠️  2 model(s) failed to download"));
        assert!(text.contains("try again"));
        assert!(!text.contains("Next steps"));
    }
}
