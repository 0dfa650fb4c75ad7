//! Forward-only line cursor shared by the plan text decoder.
//!
//! The decoder never rewinds: it peeks at the current line, consumes it, or
//! jumps forward to the next banner. Keeping that contract in one type lets
//! each section reader be tested on its own.

/// A forward-only cursor over the lines of a text document.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        LineCursor {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// The current line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Consume and return the current line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.advance();
        Some(line)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advance past whitespace-only lines.
    pub fn skip_blank(&mut self) {
        while let Some(line) = self.peek() {
            if !line.trim().is_empty() {
                break;
            }
            self.advance();
        }
    }

    /// Move to the line after the first line starting with `prefix`.
    ///
    /// Everything between the current position and the match is discarded.
    /// Returns `false` and leaves the cursor untouched when no line matches.
    pub fn skip_to(&mut self, prefix: &str) -> bool {
        let found = self.lines[self.pos..]
            .iter()
            .position(|line| line.trim().starts_with(prefix));

        match found {
            Some(offset) => {
                self.pos += offset + 1;
                true
            }
            None => false,
        }
    }

    /// Consume consecutive `- ` lines and return their trimmed text.
    pub fn read_bullets(&mut self) -> Vec<String> {
        let mut items = Vec::new();
        while let Some(line) = self.peek() {
            match bullet_text(line) {
                Some(item) => {
                    items.push(item.to_string());
                    self.advance();
                }
                None => break,
            }
        }
        items
    }
}

/// Text of a `- item` line, or `None` if the line is not a bullet.
pub fn bullet_text(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("- ").map(str::trim)
}

/// Value of a `Label: value` line.
///
/// Labels are advisory: when the line does not start with `label`, the whole
/// trimmed line is returned so an edited label does not lose the value.
pub fn read_field(line: &str, label: &str) -> String {
    let trimmed = line.trim();
    match trimmed.strip_prefix(label) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Whether a line is a `== NAME ==` section banner.
pub fn is_banner(line: &str) -> bool {
    line.trim_start().starts_with("==")
}
