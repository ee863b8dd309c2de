//! Report rendering for the terminal.
//!
//! Human-readable output mirrors the classic exercise layout; JSON output
//! serializes the whole [`DemoReport`].

use std::fmt::Write;

use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::ColorChoice;
use crate::app::{DemoReport, PersistenceOutcome};
use crate::domain::FrequencyTable;
use crate::error::Result;

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Apply the `--color` flag to all later styling.
pub fn configure_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

fn heading(title: &str) -> String {
    title
        .if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}

fn label_or_dash(label: Option<&str>) -> &str {
    label.unwrap_or("-")
}

fn frequency_table(table: &FrequencyTable) -> String {
    let total = table.total().max(1) as f64;
    let rows: Vec<FrequencyRow> = table
        .iter()
        .map(|e| FrequencyRow {
            color: e.label.clone(),
            count: e.count,
            share: format!("{:.2}%", e.count as f64 / total * 100.0),
        })
        .collect();
    let mut rendered = Table::new(rows);
    rendered.with(Style::rounded());
    rendered.to_string()
}

fn persistence_line(outcome: &PersistenceOutcome) -> String {
    match outcome {
        PersistenceOutcome::Skipped => "Skipped".to_string(),
        PersistenceOutcome::Saved(report) => format!(
            "{} {} colors ({} new, {} updated)",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            report.total(),
            report.inserted,
            report.updated
        ),
        PersistenceOutcome::Failed { error } => format!(
            "{} Database error: {error}",
            "×".if_supports_color(Stream::Stdout, |t| t.red())
        ),
    }
}

/// Render the human-readable report.
#[must_use]
pub fn render_text(report: &DemoReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(out, "\n{}", heading("Color Analysis Results:"));
    let _ = writeln!(out, "1. Mean color: {}", label_or_dash(stats.mean_label.as_deref()));
    let _ = writeln!(
        out,
        "2. Most worn color: {}",
        label_or_dash(stats.mode_label.as_deref())
    );
    let _ = writeln!(
        out,
        "3. Median color: {}",
        label_or_dash(stats.median_label.as_deref())
    );
    let _ = writeln!(out, "4. Color variance: {:.2}", stats.variance);
    let _ = writeln!(
        out,
        "5. Probability of {}: {:.2}%",
        stats.probability.label.to_lowercase(),
        stats.probability.value * 100.0
    );

    let _ = writeln!(out, "\n{}", heading("Color Frequencies:"));
    let _ = writeln!(out, "{}", frequency_table(&stats.frequencies));

    let _ = writeln!(out, "\n{}", heading("Persistence:"));
    let _ = writeln!(out, "{}", persistence_line(&report.persistence));

    let search = &report.search;
    let _ = writeln!(out, "\n{}", heading("Linear Search Result:"));
    let _ = writeln!(out, "Found {} at index: {}", search.target, search.index);

    let _ = writeln!(out, "\n{}", heading("Binary Number Generation:"));
    let _ = writeln!(out, "Generated binary: {}", report.binary.binary);
    let _ = writeln!(out, "Decimal equivalent: {}", report.binary.decimal);

    let fibonacci = &report.fibonacci;
    let _ = writeln!(out, "\n{}", heading("Fibonacci Sum:"));
    let _ = writeln!(
        out,
        "Sum of first {} Fibonacci numbers: {}",
        fibonacci.terms, fibonacci.sum
    );

    out
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
