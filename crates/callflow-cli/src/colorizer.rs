//! Terminal rendering of the batch summary
//!
//! Applies ANSI escape codes to the run summary using crossterm.

use crossterm::style::{Color, Stylize};

use callflow::BatchReport;

/// Human-readable batch summary, colored when `color` is set
///
/// - Success counts and written files: Green
/// - Failure counts and failed files: Red
/// - Error kinds: Yellow
pub fn colorize_report(report: &BatchReport, color: bool) -> String {
    let paint = |text: String, c: Color| {
        if color {
            format!("{}", text.with(c))
        } else {
            text
        }
    };

    let mut lines = Vec::with_capacity(report.written.len() + report.failures.len() + 1);

    let headline = format!(
        "Converted {} of {} files in {}",
        report.succeeded,
        report.discovered,
        report.folder.display()
    );
    lines.push(if report.is_clean() {
        paint(headline, Color::Green)
    } else {
        format!("{} ({})", headline, paint(format!("{} failed", report.failed), Color::Red))
    });

    for path in &report.written {
        lines.push(format!("  {} {}", paint("✓".to_string(), Color::Green), path.display()));
    }

    for failure in &report.failures {
        lines.push(format!(
            "  {} {} [{}] {}",
            paint("✗".to_string(), Color::Red),
            failure.path.display(),
            paint(failure.kind.clone(), Color::Yellow),
            failure.message
        ));
    }

    lines.join("\n")
}
