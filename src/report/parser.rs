//! Execution report block parser
//!
//! Segments normalized report text into display blocks, one line at a time.
//! Lines that match no rule become paragraphs; parsing never fails.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_report_text;
use super::table::parse_table;
use super::types::ReportBlock;

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-=]{3,}$").expect("separator regex should be valid"));

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^===.+===$").expect("title regex should be valid"));

static SECTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_\s/-]{2,}:$").expect("section regex should be valid")
});

static META_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_\s/-]{1,40}):\s+(.+)$").expect("meta regex should be valid")
});

/// Parse an execution report into display blocks.
///
/// Rules, first match wins, applied to each trimmed line:
/// 1. blank line ends the pending bullet list
/// 2. `---` / `===` (three or more, nothing else) is a separator
/// 3. `=== TEXT ===` is a title
/// 4. lines starting with `|` begin a table that runs while lines keep
///    starting with `|`
/// 5. `- item` joins the pending bullet list
/// 6. `Label:` with nothing after the colon is a section header
/// 7. `Label: value` is a key/value line
/// 8. anything else is a paragraph
pub fn parse_report(report: &str) -> Vec<ReportBlock> {
    let normalized = normalize_report_text(report);
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut blocks = Vec::new();
    let mut bullets: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if let Some(item) = line.strip_prefix("- ") {
            bullets.push(item.trim().to_string());
            i += 1;
            continue;
        }
        flush_bullets(&mut bullets, &mut blocks);

        if line.is_empty() {
            i += 1;
            continue;
        }

        if SEPARATOR_REGEX.is_match(line) {
            blocks.push(ReportBlock::Separator);
        } else if TITLE_REGEX.is_match(line) {
            blocks.push(ReportBlock::Title {
                text: line.trim_matches('=').trim().to_string(),
            });
        } else if line.starts_with('|') {
            let start = i;
            while i + 1 < lines.len() && lines[i + 1].trim().starts_with('|') {
                i += 1;
            }
            if let Some(table) = parse_table(&lines[start..=i]) {
                blocks.push(table);
            }
        } else if SECTION_REGEX.is_match(line) {
            blocks.push(ReportBlock::Section {
                text: line.trim_end_matches(':').trim().to_string(),
            });
        } else if let Some(caps) = META_REGEX.captures(line) {
            blocks.push(ReportBlock::Meta {
                key: caps[1].trim().to_string(),
                value: caps[2].trim().to_string(),
            });
        } else {
            blocks.push(ReportBlock::Paragraph {
                text: line.to_string(),
            });
        }

        i += 1;
    }
    flush_bullets(&mut bullets, &mut blocks);

    tracing::debug!(
        lines = lines.len(),
        blocks = blocks.len(),
        "parsed execution report"
    );

    blocks
}

fn flush_bullets(bullets: &mut Vec<String>, blocks: &mut Vec<ReportBlock>) {
    if !bullets.is_empty() {
        blocks.push(ReportBlock::Bullet {
            items: std::mem::take(bullets),
        });
    }
}
