//! Character cursor with one-character peek and an arbitrary push-back
//! buffer.
//!
//! The cursor hands the scanner one character at a time. EOF is the `'\0'`
//! sentinel — CSS text has no business containing NUL, and treating it as
//! the terminator keeps every scanning loop bounds-check free.
//!
//! The push-back buffer is the scanner's backtracking mechanism: a
//! tentative multi-character match (`url(`, `-->`, `!important`) consumes
//! characters as it compares them, and on failure pushes the consumed text
//! back so the dispatch can fall through to the next alternative. The
//! buffer is consulted before the underlying source on every advance.

use std::collections::VecDeque;

use crate::context::{SourceContext, SourcePosition};

/// Streaming character cursor over an owned source string.
///
/// # Invariant
///
/// `current` is always the character at the cursor, `'\0'` at end of
/// input. The `pending` push-back buffer never contains the sentinel.
#[derive(Debug)]
pub struct Cursor {
    /// The input text. Read once, left to right; never indexed backwards.
    source: String,
    /// Byte offset of the next character not yet handed out.
    pos: usize,
    /// Push-back buffer, consulted before `source`.
    pending: VecDeque<char>,
    /// Character at the cursor, `'\0'` at end of input.
    current: char,
    /// Line/column tracker, advanced as characters are consumed.
    context: SourceContext,
}

impl Cursor {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let mut cursor = Cursor {
            source: source.into(),
            pos: 0,
            pending: VecDeque::new(),
            current: '\0',
            context: SourceContext::new(),
        };
        cursor.current = cursor.read_source_char();
        cursor
    }

    /// The character at the cursor, `'\0'` at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.current
    }

    /// The character after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> char {
        if let Some(&ch) = self.pending.front() {
            ch
        } else {
            self.source[self.pos..].chars().next().unwrap_or('\0')
        }
    }

    /// Whether the cursor has reached the end of input.
    ///
    /// A NUL character in the source is indistinguishable from the
    /// sentinel and terminates the scan.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current == '\0'
    }

    /// Consume the current character and read the next one, from the
    /// push-back buffer if it is non-empty, otherwise from the source.
    ///
    /// Updates the position tracker; a no-op at end of input.
    pub fn advance(&mut self) {
        let consumed = self.current;
        if consumed == '\0' {
            return;
        }
        let next = self.next_char();
        self.context.advance_over(consumed, next);
        self.current = next;
    }

    /// Consume the current character without touching the position
    /// tracker.
    ///
    /// Used only when swallowing the line terminator after a `///#source`
    /// directive, which has already declared what the next line's logical
    /// position is.
    pub fn advance_untracked(&mut self) {
        if self.current == '\0' {
            return;
        }
        self.current = self.next_char();
    }

    /// Prepend `text` to the push-back buffer and reposition the cursor on
    /// its first character, rolling the column back by the text's length.
    ///
    /// The current character is not lost: it is re-queued behind the pushed
    /// text. Pushing a line terminator back rolls the column only — the
    /// line number is not restored (see [`SourceContext::retreat`]).
    pub fn push_back(&mut self, text: &str) {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return;
        };
        if self.current != '\0' {
            self.pending.push_front(self.current);
        }
        for ch in chars.rev() {
            self.pending.push_front(ch);
        }
        self.current = first;
        self.context.retreat(text.chars().count());
    }

    /// Push a single character back; one-character [`push_back`](Self::push_back).
    pub fn push_back_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.push_back(ch.encode_utf8(&mut buf));
    }

    /// Attempt to consume `literal` starting at the current character,
    /// comparing ASCII case-insensitively.
    ///
    /// On success the consumed text (as it appeared in the input, case
    /// preserved) is appended to `out` and the cursor stands after the
    /// literal. On failure the cursor is restored via push-back and `out`
    /// is untouched.
    pub fn try_match_ignore_case(&mut self, literal: &str, out: &mut String) -> bool {
        let mut consumed = String::new();
        for expected in literal.chars() {
            let ch = self.current;
            if ch != '\0' && ch.eq_ignore_ascii_case(&expected) {
                consumed.push(ch);
                self.advance();
            } else {
                if !consumed.is_empty() {
                    self.push_back(&consumed);
                }
                return false;
            }
        }
        out.push_str(&consumed);
        true
    }

    /// Snapshot of the current logical position.
    pub fn position(&self) -> SourcePosition {
        self.context.position()
    }

    /// The position tracker, for applying a `///#source` remap.
    pub fn context_mut(&mut self) -> &mut SourceContext {
        &mut self.context
    }

    /// Next character from the push-back buffer or the source.
    fn next_char(&mut self) -> char {
        if let Some(ch) = self.pending.pop_front() {
            ch
        } else {
            self.read_source_char()
        }
    }

    /// Next character from the underlying source, `'\0'` when exhausted.
    fn read_source_char(&mut self) -> char {
        match self.source[self.pos..].chars().next() {
            Some(ch) => {
                self.pos += ch.len_utf8();
                ch
            }
            None => '\0',
        }
    }
}

#[cfg(test)]
mod tests;
