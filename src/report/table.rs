//! Pipe table parsing for execution reports
//!
//! Backends emit markdown-style tables whose cells sometimes contain an
//! unescaped `|`. Rows wider than the header are repaired by merging the
//! overflow into the second-to-last column, keeping the last (status) column
//! intact.

use super::normalize::strip_bold;
use super::types::ReportBlock;

/// A row made only of `|`, `-`, `:` and whitespace, like `|---|:--:|`.
pub fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-')
        && trimmed.contains('|')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a row into its raw (untrimmed) cells.
///
/// A missing trailing `|` is tolerated; the empty pieces outside the outer
/// pipes are dropped.
fn split_raw_cells(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split('|').collect();

    let start = usize::from(trimmed.starts_with('|'));
    let end = if trimmed.ends_with('|') {
        parts.len() - 1
    } else {
        parts.len()
    };

    if start >= end {
        Vec::new()
    } else {
        parts[start..end].to_vec()
    }
}

fn clean_cell(raw: &str) -> String {
    strip_bold(raw.trim()).trim().to_string()
}

/// Split a row into trimmed cells with bold markup removed.
pub fn split_row(line: &str) -> Vec<String> {
    split_raw_cells(line).into_iter().map(clean_cell).collect()
}

/// Split a data row and fit it to `width` columns.
///
/// Over-wide rows keep the first `width - 2` cells, merge the rest except
/// the last into one cell and keep the last cell. The merged cell is rebuilt
/// from the text between the pipes, so `y|z` stays `y|z` and `y | z` stays
/// `y | z`. Short rows are padded with empty cells.
pub fn repair_row(line: &str, width: usize) -> Vec<String> {
    let raw = split_raw_cells(line);

    if width == 0 || raw.len() == width {
        return raw.into_iter().map(clean_cell).collect();
    }

    if raw.len() < width {
        let mut cells: Vec<String> = raw.into_iter().map(clean_cell).collect();
        cells.resize(width, String::new());
        return cells;
    }

    if width == 1 {
        return vec![clean_cell(&raw.join("|"))];
    }

    let keep = width - 2;
    let last = raw.len() - 1;
    let mut cells: Vec<String> = raw[..keep].iter().map(|c| clean_cell(c)).collect();
    cells.push(clean_cell(&raw[keep..last].join("|")));
    cells.push(clean_cell(raw[last]));
    cells
}

/// Build a table block from consecutive `|` lines.
///
/// Separator rows are dropped; the first remaining line is the header.
/// Returns `None` when nothing but separators was given.
pub fn parse_table(lines: &[&str]) -> Option<ReportBlock> {
    let mut content = lines.iter().filter(|line| !is_separator_row(line));

    let headers = split_row(content.next()?);
    let rows = content.map(|line| repair_row(line, headers.len())).collect();

    Some(ReportBlock::Table { headers, rows })
}
