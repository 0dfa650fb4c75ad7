use std::sync::LazyLock;

use regex::Regex;

static HEADING_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{1,6}[ \t]+").expect("heading marker regex should be valid")
});

static BULLET_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[*•][ \t]+").expect("bullet marker regex should be valid")
});

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex should be valid"));

/// Normalize raw report text before block segmentation.
///
/// Text holding literal `\n` escapes and no real newline was JSON-encoded
/// twice; its `\r\n`, `\n` and `\t` escapes are decoded first. Then, always:
/// CRLF becomes LF, markdown heading markers are dropped, `*`/`•` bullets
/// become `- ` and `**bold**` markup is removed.
pub fn normalize_report_text(text: &str) -> String {
    let mut normalized = if is_over_escaped(text) {
        text.replace("\\r\\n", "\n")
            .replace("\\n", "\n")
            .replace("\\t", "\t")
    } else {
        text.to_string()
    };

    normalized = normalized.replace("\r\n", "\n");
    let normalized = HEADING_MARKER_REGEX.replace_all(&normalized, "");
    let normalized = BULLET_MARKER_REGEX.replace_all(&normalized, "- ");
    strip_bold(&normalized)
}

fn is_over_escaped(text: &str) -> bool {
    text.contains("\\n") && !text.contains('\n')
}

/// Remove `**bold**` markup, keeping the inner text.
pub fn strip_bold(text: &str) -> String {
    BOLD_REGEX.replace_all(text, "$1").into_owned()
}
