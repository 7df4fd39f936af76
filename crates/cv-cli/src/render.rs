use colored::{ColoredString, Colorize};
use cv_sdk::{Classification, ReconcileReport, ReportRow};

const SEPARATOR: &str = " | ";

/// Pad `s` on both sides to `width` columns, favouring the right.
pub fn centered_string(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let shifted = format!("{s:>pad$}", pad = (width + len) / 2);
    format!("{shifted:<width$}")
}

fn column_widths(report: &ReconcileReport) -> Vec<usize> {
    let mut widths: Vec<usize> = report.headers.iter().map(|h| h.chars().count()).collect();
    for row in &report.rows {
        for (width, value) in widths.iter_mut().zip(&row.values) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths
}

/// The first two columns name the entries and are coloured by whether the
/// row matched; any further column is right-aligned detail.
fn cell(row: &ReportRow, index: usize, value: &str, width: usize) -> ColoredString {
    if index >= 2 {
        return format!("{value:>width$}").cyan();
    }
    let padded = format!("{value:<width$}");
    if row.classification == Classification::Matched {
        padded.green()
    } else {
        padded.red()
    }
}

/// Render the report as an aligned table: centred headers, a dashed rule and
/// one row per classified pair.
pub fn render_table(report: &ReconcileReport) -> String {
    let widths = column_widths(report);
    let separator = SEPARATOR.cyan().to_string();
    let mut out = String::new();

    let headers: Vec<String> = report
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| centered_string(header, *width))
        .collect();
    out.push_str(&format!("{}\n", headers.join(SEPARATOR).cyan()));

    let rule = widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for row in &report.rows {
        let cells: Vec<String> = row
            .values
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (value, width))| cell(row, i, value, *width).to_string())
            .collect();
        out.push_str(&cells.join(separator.as_str()));
        out.push('\n');
    }
    out
}

/// Lines printed after the table: lookup errors, then the truncation warning.
pub fn render_warnings(report: &ReconcileReport) -> Vec<String> {
    let mut lines: Vec<String> = report.errors.clone();
    if report.truncated {
        lines.push(format!(
            "The Venafi limit of {} records was hit, consider increasing --vlimit to list every record.",
            report.venafi_limit
        ));
    }
    lines
}
