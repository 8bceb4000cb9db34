//! Logical position tracking with `///#source` remap support.
//!
//! The tracker advances over characters as the cursor consumes them and
//! hands out [`SourcePosition`] snapshots for token starts and diagnostics.
//! A `///#source <line> <col> <path>` directive redirects the reported file
//! identity and line/column origin — used for source-mapped generated CSS,
//! where the physical position in the generated file is meaningless to the
//! author.

use std::sync::Arc;

/// Immutable logical position snapshot, stored on every token.
///
/// `file` is `None` until a `///#source` directive remaps positions; after a
/// remap it names the original file the position refers to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourcePosition {
    /// Remapped file identity, when one was declared.
    pub file: Option<Arc<str>>,
    /// Line number, 1-based.
    pub line: u32,
    /// Column, 0-based character offset within the line.
    pub column: u32,
}

impl SourcePosition {
    /// Start-of-input position with no remap.
    pub fn start() -> Self {
        SourcePosition {
            file: None,
            line: 1,
            column: 0,
        }
    }
}

/// Mutable line/column tracker owned by the cursor.
///
/// Monotonically advances except when a directive explicitly resets it, or
/// when push-back rolls the column back.
#[derive(Clone, Debug)]
pub struct SourceContext {
    file: Option<Arc<str>>,
    line: u32,
    column: u32,
}

impl SourceContext {
    /// Tracker positioned at line 1, column 0, no remap.
    pub fn new() -> Self {
        SourceContext {
            file: None,
            line: 1,
            column: 0,
        }
    }

    /// Snapshot the current logical position.
    pub fn position(&self) -> SourcePosition {
        SourcePosition {
            file: self.file.clone(),
            line: self.line,
            column: self.column,
        }
    }

    /// Remapped file identity, when a directive declared one.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Current line, 1-based.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column, 0-based.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Advance over one consumed character.
    ///
    /// `next` is the character that follows: a `\r` directly followed by
    /// `\n` is half of a single CR-LF terminator, so only the `\n` advances
    /// the line.
    pub fn advance_over(&mut self, consumed: char, next: char) {
        match consumed {
            '\n' | '\u{c}' => {
                self.line += 1;
                self.column = 0;
            }
            '\r' if next != '\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }

    /// Roll the column back by `count` pushed-back characters.
    ///
    /// Only the column is restored. Pushing a consumed line terminator back
    /// does not return to the previous line — the tracker has no memory of
    /// prior line lengths. Known limitation of the push-back model; callers
    /// that push multi-character text back keep it on a single line.
    pub fn retreat(&mut self, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.column = self.column.saturating_sub(count);
    }

    /// Redirect reported positions: subsequent characters report against
    /// `file` starting at `line`/`column`.
    pub fn remap(&mut self, file: Arc<str>, line: u32, column: u32) {
        self.file = Some(file);
        self.line = line;
        self.column = column;
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
