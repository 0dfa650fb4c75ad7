//! Status word classification for report values and table cells

use std::fmt;

use serde::Serialize;

use super::types::ReportBlock;

/// A recognized test outcome word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusWord {
    Pass,
    Fail,
    Error,
    Skip,
}

impl StatusWord {
    /// Classify text whose upper-cased form is exactly a status word.
    ///
    /// Recognizes `PASS`, `PASSED`, `FAIL`, `FAILED`, `ERROR`, `SKIP` and
    /// `SKIPPED`; anything else, including sentences that merely contain one
    /// of them, is not a status.
    pub fn classify(text: &str) -> Option<StatusWord> {
        match text.trim().to_uppercase().as_str() {
            "PASS" | "PASSED" => Some(StatusWord::Pass),
            "FAIL" | "FAILED" => Some(StatusWord::Fail),
            "ERROR" => Some(StatusWord::Error),
            "SKIP" | "SKIPPED" => Some(StatusWord::Skip),
            _ => None,
        }
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusWord::Pass => write!(f, "pass"),
            StatusWord::Fail => write!(f, "fail"),
            StatusWord::Error => write!(f, "error"),
            StatusWord::Skip => write!(f, "skip"),
        }
    }
}

pub fn is_status_word(text: &str) -> bool {
    StatusWord::classify(text).is_some()
}

/// Counts of status words found in a report's meta values and table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
}

impl ReportSummary {
    pub fn from_blocks(blocks: &[ReportBlock]) -> Self {
        let mut summary = ReportSummary::default();

        for block in blocks {
            match block {
                ReportBlock::Meta { value, .. } => summary.record(value),
                ReportBlock::Table { rows, .. } => {
                    for cell in rows.iter().flatten() {
                        summary.record(cell);
                    }
                }
                _ => {}
            }
        }

        summary
    }

    fn record(&mut self, text: &str) {
        match StatusWord::classify(text) {
            Some(StatusWord::Pass) => self.passed += 1,
            Some(StatusWord::Fail) => self.failed += 1,
            Some(StatusWord::Error) => self.errors += 1,
            Some(StatusWord::Skip) => self.skipped += 1,
            None => {}
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors + self.skipped
    }

    /// True when no failure or error was seen
    pub fn is_green(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errors, {} skipped",
            self.passed, self.failed, self.errors, self.skipped
        )
    }
}
