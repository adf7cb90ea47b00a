//! CLI output formatting.
//!
//! Output is information-centric: the primary display is what the page will
//! contain — reveal regions, ticker lanes, emblem glyphs — with filesystem
//! paths as secondary context. Each command has a `format_*` function
//! (returns `Vec<String>`) for testability and a `print_*` wrapper that
//! writes to stdout. Format functions are pure — no I/O, no side effects.

use crate::page::{BuildReport, RevealMode};
use serde::Serialize;
use std::path::Path;

fn mode_name(mode: RevealMode) -> &'static str {
    match mode {
        RevealMode::Scripted => "scripted",
        RevealMode::Static => "static",
    }
}

/// Format the summary printed after `build`.
pub fn format_build_output(report: &BuildReport, output_dir: &Path) -> Vec<String> {
    vec![
        format!("Page → {}", output_dir.join("index.html").display()),
        format!("    Reveal: {} regions ({})", report.reveal_regions, mode_name(report.mode)),
        format!(
            "    Ticker: 2 lanes × {} tokens",
            report.ticker_tokens_per_lane
        ),
        format!("    Emblem: {} glyphs", report.emblem_glyphs),
        format!("Wrote {} bytes", report.bytes_written),
    ]
}

pub fn print_build_output(report: &BuildReport, output_dir: &Path) {
    for line in format_build_output(report, output_dir) {
        println!("{line}");
    }
}

/// Machine-readable result of `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub mode: &'static str,
    pub reveal_regions: u32,
    pub ticker_tokens_per_lane: usize,
    pub emblem_glyphs: u32,
    pub page_bytes: usize,
}

impl CheckReport {
    pub fn from_build(report: &BuildReport) -> Self {
        Self {
            mode: mode_name(report.mode),
            reveal_regions: report.reveal_regions,
            ticker_tokens_per_lane: report.ticker_tokens_per_lane,
            emblem_glyphs: report.emblem_glyphs,
            page_bytes: report.bytes_written,
        }
    }
}

/// Format the summary printed after `check`.
pub fn format_check_output(report: &BuildReport) -> Vec<String> {
    vec![
        format!("Reveal: {} regions ({})", report.reveal_regions, mode_name(report.mode)),
        format!("Ticker: 2 lanes × {} tokens", report.ticker_tokens_per_lane),
        format!("Emblem: {} glyphs", report.emblem_glyphs),
        format!("Page: {} bytes", report.bytes_written),
    ]
}

pub fn print_check_output(report: &BuildReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BuildReport {
        BuildReport {
            mode: RevealMode::Scripted,
            reveal_regions: 10,
            ticker_tokens_per_lane: 4,
            emblem_glyphs: 12,
            bytes_written: 20480,
        }
    }

    #[test]
    fn build_output_names_the_page_file() {
        let lines = format_build_output(&sample_report(), Path::new("dist"));
        assert!(lines[0].contains("index.html"));
    }

    #[test]
    fn build_output_summarizes_motion_content() {
        let lines = format_build_output(&sample_report(), Path::new("dist"));
        let joined = lines.join("\n");
        assert!(joined.contains("10 regions"));
        assert!(joined.contains("scripted"));
        assert!(joined.contains("2 lanes × 4 tokens"));
        assert!(joined.contains("12 glyphs"));
        assert!(joined.contains("20480 bytes"));
    }

    #[test]
    fn check_output_reports_static_mode() {
        let mut report = sample_report();
        report.mode = RevealMode::Static;
        let joined = format_check_output(&report).join("\n");
        assert!(joined.contains("(static)"));
    }

    #[test]
    fn check_report_serializes() {
        let report = CheckReport::from_build(&sample_report());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""reveal_regions":10"#));
        assert!(json.contains(r#""mode":"scripted""#));
    }
}
