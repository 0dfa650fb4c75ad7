use serde::Serialize;

/// One display block of a parsed execution report.
///
/// Blocks are produced fresh on every parse and carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportBlock {
    /// `=== TEXT ===` banner
    Title { text: String },
    /// `Key: value` line
    Meta { key: String, value: String },
    /// Bare `Label:` line introducing what follows
    Section { text: String },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// `---` or `===` rule
    Separator,
    /// Consecutive `- ` lines
    Bullet { items: Vec<String> },
    Paragraph { text: String },
}

impl ReportBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportBlock::Title { .. } => "title",
            ReportBlock::Meta { .. } => "meta",
            ReportBlock::Section { .. } => "section",
            ReportBlock::Table { .. } => "table",
            ReportBlock::Separator => "separator",
            ReportBlock::Bullet { .. } => "bullet",
            ReportBlock::Paragraph { .. } => "paragraph",
        }
    }
}
