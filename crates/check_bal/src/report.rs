// crates/check_bal/src/report.rs

use angle_tally::count_angles;
use bracket_spans::extract_spans;
use std::io::{self, Write};

/// Options controlling which spans end up in the report.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// Skip spans whose `<` and `>` counts are equal.
    pub unbalanced_only: bool,
}

/// Writes the span report for `text` to `out`.
///
/// Every span is written as two lines:
///
/// ```text
/// { <span> }
/// (<count of '<'>, <count of '>'>)
/// ```
///
/// Spans appear in extraction order. Nothing else is written.
pub fn write_report<W: Write>(text: &str, options: ReportOptions, out: &mut W) -> io::Result<()> {
    for (offset, span) in extract_spans(text).with_offsets() {
        let tally = count_angles(span);
        log::debug!("span at byte {}: {} bytes, tally {}", offset, span.len(), tally);
        if options.unbalanced_only && tally.is_balanced() {
            continue;
        }
        writeln!(out, "{{ {} }}", span)?;
        writeln!(out, "{}", tally)?;
    }
    Ok(())
}

/// Convenience wrapper returning the report as a `String`.
pub fn render_report(text: &str, options: ReportOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(text, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
