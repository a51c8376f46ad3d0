use super::types::BatchSummary;
use std::fmt;
use std::io::Write;
use std::path::Path;

const RULE: &str = "==================================================";

/// Writes one status line. A closed console must not fail the batch, so
/// write errors are only logged.
pub(crate) fn report<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{}", line) {
        tracing::warn!("Failed to write status line: {}", err);
    }
}

pub(crate) fn report_header<W: Write>(out: &mut W, total: usize) {
    report(out, format_args!("Downloading {} images...", total));
    report(out, format_args!("{}", RULE));
}

pub(crate) fn report_summary<W: Write>(out: &mut W, summary: &BatchSummary, output_dir: &Path) {
    report(out, format_args!("\n{}", RULE));
    report(out, format_args!("Download complete!"));
    report(out, format_args!("Successful: {}", summary.downloaded));
    report(out, format_args!("Failed: {}", summary.failed));
    report(
        out,
        format_args!("Images saved to: {}/", output_dir.display()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_block() {
        let mut out = Vec::new();
        let summary = BatchSummary {
            downloaded: 4,
            failed: 2,
        };
        report_summary(&mut out, &summary, Path::new("images"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Successful: 4\n"));
        assert!(text.contains("Failed: 2\n"));
        assert!(text.ends_with("Images saved to: images/\n"));
    }

    #[test]
    fn test_header_names_count() {
        let mut out = Vec::new();
        report_header(&mut out, 7);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Downloading 7 images...\n"));
    }
}
