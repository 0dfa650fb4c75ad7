//! Terminal rendering of parsed execution reports

use owo_colors::{OwoColorize, Style};
use tabled::builder::Builder;
use tabled::settings::Style as TableBorder;

use crate::config::{Config, TableStyle};
use crate::report::{ReportBlock, ReportSummary, StatusWord};

const RULE_WIDTH: usize = 40;

/// How report blocks are drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub table_style: TableStyle,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        RenderOptions {
            color: config.color.enabled(),
            table_style: config.table_style,
        }
    }
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Render a status word as a badge, keeping the report's own spelling.
pub fn format_status_colored(status: StatusWord, text: &str, color: bool) -> String {
    let badge = format!("[{}]", text.trim().to_uppercase());
    let style = match status {
        StatusWord::Pass => Style::new().green().bold(),
        StatusWord::Fail => Style::new().red().bold(),
        StatusWord::Error => Style::new().magenta().bold(),
        StatusWord::Skip => Style::new().yellow(),
    };
    paint(&badge, style, color)
}

/// Render a value, badging it when it is a status word.
fn format_value(text: &str, color: bool) -> String {
    match StatusWord::classify(text) {
        Some(status) => format_status_colored(status, text, color),
        None => text.to_string(),
    }
}

/// Render report blocks for the terminal, one block per line group.
pub fn render_report(blocks: &[ReportBlock], options: &RenderOptions) -> String {
    let color = options.color;
    let mut lines: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            ReportBlock::Title { text } => {
                lines.push(paint(
                    &format!("=== {text} ==="),
                    Style::new().bold(),
                    color,
                ));
            }
            ReportBlock::Section { text } => {
                lines.push(String::new());
                lines.push(paint(text, Style::new().bold().underline(), color));
            }
            ReportBlock::Meta { key, value } => {
                lines.push(format!(
                    "{}: {}",
                    paint(key, Style::new().cyan(), color),
                    format_value(value, color)
                ));
            }
            ReportBlock::Bullet { items } => {
                for item in items {
                    lines.push(format!("  • {item}"));
                }
            }
            ReportBlock::Separator => {
                lines.push(paint(&"─".repeat(RULE_WIDTH), Style::new().dimmed(), color));
            }
            ReportBlock::Paragraph { text } => lines.push(text.clone()),
            ReportBlock::Table { headers, rows } => {
                lines.push(render_table(headers, rows, options));
            }
        }
    }

    lines.join("\n")
}

fn render_table(headers: &[String], rows: &[Vec<String>], options: &RenderOptions) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        headers
            .iter()
            .map(|h| paint(h, Style::new().bold(), options.color)),
    );
    for row in rows {
        builder.push_record(row.iter().map(|cell| format_value(cell, options.color)));
    }

    let mut table = builder.build();
    match options.table_style {
        TableStyle::Modern => table.with(TableBorder::modern()),
        TableStyle::Ascii => table.with(TableBorder::ascii()),
        TableStyle::Markdown => table.with(TableBorder::markdown()),
        TableStyle::Rounded => table.with(TableBorder::rounded()),
    };
    table.to_string()
}

/// One-line status summary printed after a rendered report.
pub fn format_summary(summary: &ReportSummary, color: bool) -> String {
    if summary.total() == 0 {
        return paint("No status results found", Style::new().dimmed(), color);
    }
    let style = if summary.is_green() {
        Style::new().green()
    } else {
        Style::new().red()
    };
    paint(&format!("Summary: {summary}"), style, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            table_style: TableStyle::Markdown,
        }
    }

    #[test]
    fn test_status_badge_without_color() {
        assert_eq!(
            format_status_colored(StatusWord::Pass, "passed", false),
            "[PASSED]"
        );
    }

    #[test]
    fn test_status_badge_with_color_has_ansi() {
        let badge = format_status_colored(StatusWord::Fail, "FAIL", true);
        assert!(badge.contains("[FAIL]"));
        assert!(badge.contains('\u{1b}'));
    }

    #[test]
    fn test_render_meta_and_title() {
        let blocks = parse_report("=== Run 42 ===\nStatus: PASSED\nBrowser: chromium");
        assert_eq!(
            render_report(&blocks, &plain()),
            "=== Run 42 ===\nStatus: [PASSED]\nBrowser: chromium"
        );
    }

    #[test]
    fn test_render_bullets_and_section() {
        let blocks = parse_report("Findings:\n- slow login\n- missing alt text");
        assert_eq!(
            render_report(&blocks, &plain()),
            "\nFindings\n  • slow login\n  • missing alt text"
        );
    }

    #[test]
    fn test_render_table_badges_status_cells() {
        let blocks = parse_report("| Case | Status |\n|---|---|\n| login | pass |");
        let rendered = render_report(&blocks, &plain());
        assert!(rendered.contains("Case"));
        assert!(rendered.contains("login"));
        assert!(rendered.contains("[PASS]"));
    }

    #[test]
    fn test_render_plain_output_has_no_ansi() {
        let blocks = parse_report("=== T ===\n---\nResult: FAILED\n| a | b |\n| 1 | ERROR |");
        assert!(!render_report(&blocks, &plain()).contains('\u{1b}'));
    }

    #[test]
    fn test_format_summary() {
        let summary = ReportSummary {
            passed: 3,
            failed: 0,
            errors: 0,
            skipped: 1,
        };
        assert_eq!(
            format_summary(&summary, false),
            "Summary: 3 passed, 0 failed, 0 errors, 1 skipped"
        );
        assert_eq!(
            format_summary(&ReportSummary::default(), false),
            "No status results found"
        );
    }
}
