//! The CSS token scanner: a character-dispatched state machine over the
//! push-back cursor.
//!
//! One [`Token`] per [`Scanner::next_token`] call. The dispatch order of
//! the fallback chains encodes precedence, not just classification: `-`
//! tries `-->` before a vendor identifier before the literal character,
//! `u` tries `U+` ranges before `url(` before an identifier, and so on.
//! Reordering them changes the language.
//!
//! Malformed input is reported through the diagnostic callback and scanned
//! past; every call returns some token, so a caller's loop always reaches
//! end of input.

use std::sync::Arc;

use css_diagnostic::{Diagnostic, DiagnosticCode};

use crate::cursor::Cursor;
use crate::token::{self, Token, TokenKind};

/// Largest code point a unicode range component may name.
const MAX_CODE_POINT: u32 = 0x0010_FFFF;

/// Scanner configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScannerOptions {
    /// Recognize `<% ... %>` server blocks, both as standalone tokens and
    /// as opaque passthrough regions inside string literals. Used for
    /// templated CSS.
    pub allow_embedded_code_blocks: bool,
}

type DiagnosticCallback = Box<dyn FnMut(&Diagnostic)>;
type RemapCallback = Box<dyn FnMut(&str)>;

/// Pull-based CSS tokenizer. One instance per input stream.
pub struct Scanner {
    cursor: Cursor,
    options: ScannerOptions,
    /// Raw text of the most recent numeric literal, before
    /// canonicalization.
    raw_number: String,
    /// Whether the most recent whitespace run contained a line terminator.
    /// Reset on every `next_token` call.
    got_end_of_line: bool,
    /// Set once the end-of-file token has been handed out.
    reached_end: bool,
    on_diagnostic: Option<DiagnosticCallback>,
    on_source_remap: Option<RemapCallback>,
}

impl Scanner {
    /// Create a scanner over `source`.
    pub fn new(source: impl Into<String>, options: ScannerOptions) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            options,
            raw_number: String::new(),
            got_end_of_line: false,
            reached_end: false,
            on_diagnostic: None,
            on_source_remap: None,
        }
    }

    /// Register the callback invoked synchronously for every recoverable
    /// problem found while scanning.
    pub fn on_diagnostic(&mut self, handler: impl FnMut(&Diagnostic) + 'static) {
        self.on_diagnostic = Some(Box::new(handler));
    }

    /// Register the callback invoked when a `///#source` directive remaps
    /// reported positions, receiving the declared file path.
    pub fn on_source_remap(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_source_remap = Some(Box::new(handler));
    }

    /// Whether the most recent whitespace token contained a line
    /// terminator.
    pub fn got_end_of_line(&self) -> bool {
        self.got_end_of_line
    }

    /// Raw source text of the most recent numeric literal, before leading
    /// and trailing zeros were stripped.
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    /// Produce the next token.
    ///
    /// Returns an [`TokenKind::EndOfFile`] token at end of input, and keeps
    /// returning it on further calls. Discarded constructs (`//` comments,
    /// `///#source` directives) consume input without producing a token;
    /// the scan simply continues with whatever follows them.
    pub fn next_token(&mut self) -> Token {
        self.got_end_of_line = false;
        loop {
            let position = self.cursor.position();
            let ch = self.cursor.current();
            let (kind, text) = match ch {
                '\0' => (TokenKind::EndOfFile, String::new()),
                ' ' | '\t' | '\r' | '\n' | '\u{c}' => self.scan_whitespace(),
                '/' => match self.scan_slash() {
                    Some(result) => result,
                    None => continue,
                },
                '<' => self.scan_less_than(),
                '-' => self.scan_minus(),
                '~' if self.cursor.peek() == '=' => self.scan_match_operator(TokenKind::Includes),
                '|' if self.cursor.peek() == '=' => self.scan_match_operator(TokenKind::DashMatch),
                '^' if self.cursor.peek() == '=' => {
                    self.scan_match_operator(TokenKind::PrefixMatch)
                }
                '$' if self.cursor.peek() == '=' => {
                    self.scan_match_operator(TokenKind::SuffixMatch)
                }
                '*' if self.cursor.peek() == '=' => {
                    self.scan_match_operator(TokenKind::SubstringMatch)
                }
                '~' | '^' | '$' => (TokenKind::Character, self.consume_current()),
                '\'' | '"' => self.scan_string(),
                '#' => self.scan_hash(),
                '@' => self.scan_at_keyword(),
                '!' => self.scan_important(),
                'u' | 'U' => self.scan_url_or_unicode_range(),
                '0'..='9' | '.' => self.scan_numeric(),
                _ => self.scan_identifier_or_character(),
            };
            return Token::new(kind, text, position);
        }
    }

    /// Report a recoverable problem at the current cursor position.
    fn report(&mut self, code: DiagnosticCode) {
        let position = self.cursor.position();
        if let Some(handler) = self.on_diagnostic.as_mut() {
            let diagnostic = Diagnostic::new(code, position.line, position.column);
            handler(&diagnostic);
        }
    }

    /// Consume exactly the current character into a fresh string.
    fn consume_current(&mut self) -> String {
        let mut text = String::new();
        let ch = self.cursor.current();
        if ch != '\0' {
            text.push(ch);
            self.cursor.advance();
        }
        text
    }

    // ─── Whitespace ─────────────────────────────────────────────────────

    /// Collapse a run of spaces, tabs, and line terminators into a single
    /// space token, noting whether any line terminator was part of it.
    fn scan_whitespace(&mut self) -> (TokenKind, String) {
        loop {
            match self.cursor.current() {
                '\r' | '\n' | '\u{c}' => {
                    self.got_end_of_line = true;
                    self.cursor.advance();
                }
                ' ' | '\t' => self.cursor.advance(),
                _ => break,
            }
        }
        (TokenKind::WhiteSpace, " ".to_string())
    }

    // ─── Comments ───────────────────────────────────────────────────────

    /// `/` dispatch: block comment, discarded line comment, or the literal
    /// character. `None` means nothing was produced and the caller should
    /// keep scanning.
    fn scan_slash(&mut self) -> Option<(TokenKind, String)> {
        match self.cursor.peek() {
            '*' => Some(self.scan_block_comment()),
            '/' => {
                self.scan_line_comment();
                None
            }
            _ => Some((TokenKind::Character, self.consume_current())),
        }
    }

    /// `/* ... */`. An unterminated comment is reported but still emitted
    /// with whatever was read.
    fn scan_block_comment(&mut self) -> (TokenKind, String) {
        let mut text = String::from("/*");
        self.cursor.advance();
        self.cursor.advance();
        let mut terminated = false;
        loop {
            let ch = self.cursor.current();
            if ch == '\0' {
                break;
            }
            if ch == '*' && self.cursor.peek() == '/' {
                text.push_str("*/");
                self.cursor.advance();
                self.cursor.advance();
                terminated = true;
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }
        if !terminated {
            self.report(DiagnosticCode::UnterminatedComment);
        }
        // Historical browser-hack pairing: an empty important comment
        // closed and reopened as `/*!/*/` `/*/` is one comment block.
        if text == "/*!/*/" {
            self.cursor.try_match_ignore_case("/*/", &mut text);
        }
        (TokenKind::Comment, text)
    }

    /// `//` line comment. Always discarded; a well-formed `///#source`
    /// directive remaps reported positions as a side effect. The line
    /// terminator itself is left for the whitespace scanner, except after
    /// a directive, which swallows it untracked.
    fn scan_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        if self.cursor.current() == '/' {
            self.cursor.advance();
            if self.try_source_directive() {
                return;
            }
        }
        while !matches!(self.cursor.current(), '\0' | '\r' | '\n' | '\u{c}') {
            self.cursor.advance();
        }
    }

    /// `///#source <line> <col> <path>`: remap reported positions. Any
    /// malformation leaves the rest of the line to be discarded as an
    /// ordinary comment.
    fn try_source_directive(&mut self) -> bool {
        let mut matched = String::new();
        if !self.cursor.try_match_ignore_case("#source", &mut matched) {
            return false;
        }
        let Some(line) = self.directive_number() else {
            return false;
        };
        let Some(column) = self.directive_number() else {
            return false;
        };
        if !matches!(self.cursor.current(), ' ' | '\t') {
            return false;
        }
        let mut path = String::new();
        while !matches!(self.cursor.current(), '\0' | '\r' | '\n' | '\u{c}') {
            path.push(self.cursor.current());
            self.cursor.advance();
        }
        let path = path.trim().to_string();
        if path.is_empty() {
            return false;
        }

        tracing::debug!(file = %path, line, column, "source position remapped");
        self.cursor
            .context_mut()
            .remap(Arc::from(path.as_str()), line, column);
        if let Some(handler) = self.on_source_remap.as_mut() {
            handler(&path);
        }

        // The directive declares the next physical line's logical position;
        // its own terminator must not advance the tracker.
        match self.cursor.current() {
            '\r' => {
                self.cursor.advance_untracked();
                if self.cursor.current() == '\n' {
                    self.cursor.advance_untracked();
                }
            }
            '\n' | '\u{c}' => self.cursor.advance_untracked(),
            _ => {}
        }
        true
    }

    /// Whitespace-separated positive integer within a directive line.
    fn directive_number(&mut self) -> Option<u32> {
        if !matches!(self.cursor.current(), ' ' | '\t') {
            return None;
        }
        while matches!(self.cursor.current(), ' ' | '\t') {
            self.cursor.advance();
        }
        let mut digits = String::new();
        while self.cursor.current().is_ascii_digit() {
            digits.push(self.cursor.current());
            self.cursor.advance();
        }
        if digits.is_empty() {
            return None;
        }
        digits.parse::<u32>().ok().filter(|&n| n > 0)
    }

    // ─── Angle Bracket / Hyphen ─────────────────────────────────────────

    /// `<` dispatch: server block, `<!--`, or the literal character.
    fn scan_less_than(&mut self) -> (TokenKind, String) {
        if self.options.allow_embedded_code_blocks && self.cursor.peek() == '%' {
            return self.scan_code_block();
        }
        let mut text = String::new();
        if self.cursor.try_match_ignore_case("<!--", &mut text) {
            return (TokenKind::OpenHtmlComment, text);
        }
        (TokenKind::Character, self.consume_current())
    }

    /// `<% ... %>` passed through opaquely, `%>` included.
    fn scan_code_block(&mut self) -> (TokenKind, String) {
        let mut text = String::from("<%");
        self.cursor.advance();
        self.cursor.advance();
        loop {
            let ch = self.cursor.current();
            if ch == '\0' {
                self.report(DiagnosticCode::UnterminatedCodeBlock);
                break;
            }
            if ch == '%' && self.cursor.peek() == '>' {
                text.push_str("%>");
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }
        (TokenKind::CodeBlock, text)
    }

    /// `-` dispatch: `-->`, then a vendor-prefixed identifier, then the
    /// literal character. The order is load-bearing.
    fn scan_minus(&mut self) -> (TokenKind, String) {
        let mut text = String::new();
        if self.cursor.try_match_ignore_case("-->", &mut text) {
            return (TokenKind::CloseHtmlComment, text);
        }
        if let Some(result) = self.try_scan_identifier_like() {
            return result;
        }
        (TokenKind::Character, self.consume_current())
    }

    /// Two-character attribute match operator; the `=` has already been
    /// sighted by the dispatcher.
    fn scan_match_operator(&mut self, kind: TokenKind) -> (TokenKind, String) {
        let mut text = self.consume_current();
        text.push('=');
        self.cursor.advance();
        (kind, text)
    }

    // ─── Strings ────────────────────────────────────────────────────────

    /// Quoted string literal. A bare line terminator before the closing
    /// quote is reported, the terminator is injected into the value, the
    /// indentation after it is swallowed, and the partial string is still
    /// handed out. Anything else unterminated becomes an error token when
    /// the delimiter arithmetic does not work out.
    fn scan_string(&mut self) -> (TokenKind, String) {
        let delimiter = self.cursor.current();
        let mut text = String::new();
        text.push(delimiter);
        self.cursor.advance();
        let mut recovered = false;
        loop {
            let ch = self.cursor.current();
            if ch == delimiter {
                text.push(ch);
                self.cursor.advance();
                break;
            }
            match ch {
                '\0' => {
                    self.report(DiagnosticCode::UnterminatedString);
                    break;
                }
                '\r' | '\n' | '\u{c}' => {
                    self.report(DiagnosticCode::UnterminatedString);
                    text.push(ch);
                    self.cursor.advance();
                    while matches!(self.cursor.current(), ' ' | '\t' | '\r' | '\n' | '\u{c}') {
                        self.cursor.advance();
                    }
                    recovered = true;
                    break;
                }
                '\\' => match self.cursor.peek() {
                    // Backslash-newline continuation: dropped from the value.
                    '\r' => {
                        self.cursor.advance();
                        self.cursor.advance();
                        if self.cursor.current() == '\n' {
                            self.cursor.advance();
                        }
                    }
                    '\n' | '\u{c}' => {
                        self.cursor.advance();
                        self.cursor.advance();
                    }
                    _ => {
                        if !self.scan_escape(&mut text) {
                            self.report(DiagnosticCode::UnexpectedEscapeCharacter);
                            text.push('\\');
                            self.cursor.advance();
                        }
                    }
                },
                c if !c.is_ascii() => {
                    text.push(c);
                    self.cursor.advance();
                }
                c if is_string_char(c) => {
                    text.push(c);
                    self.cursor.advance();
                    if self.options.allow_embedded_code_blocks
                        && c == '<'
                        && self.cursor.current() == '%'
                    {
                        self.scan_embedded_block_in_string(&mut text);
                    }
                }
                c => {
                    self.report(DiagnosticCode::UnexpectedStringCharacter);
                    text.push(c);
                    self.cursor.advance();
                }
            }
        }
        let valid = recovered || is_well_delimited(&text, delimiter);
        let kind = if valid {
            TokenKind::String
        } else {
            TokenKind::Error
        };
        (kind, text)
    }

    /// `<% ... %>` inside a string literal: contents bypass the normal
    /// string escaping rules. Stops at `%>` or end of input (the string
    /// scanner then sees the EOF and reports the unterminated string).
    fn scan_embedded_block_in_string(&mut self, text: &mut String) {
        text.push('%');
        self.cursor.advance();
        loop {
            let ch = self.cursor.current();
            if ch == '\0' {
                break;
            }
            if ch == '%' && self.cursor.peek() == '>' {
                text.push_str("%>");
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }
    }

    // ─── Hash / At-Keyword / Important ──────────────────────────────────

    /// `#` + name, or the literal `#` when no name follows.
    fn scan_hash(&mut self) -> (TokenKind, String) {
        let mut text = String::from("#");
        self.cursor.advance();
        let mut any = false;
        while self.scan_name_char(&mut text) {
            any = true;
        }
        if any {
            (TokenKind::Hash, text)
        } else {
            (TokenKind::Character, text)
        }
    }

    /// `@` + optional hyphen + identifier, classified against the at-rule
    /// keyword table. No identifier: the hyphen (if consumed) goes back
    /// and the `@` stands alone.
    fn scan_at_keyword(&mut self) -> (TokenKind, String) {
        let mut text = String::from("@");
        self.cursor.advance();
        let mut name = String::new();
        let mut had_hyphen = false;
        if self.cursor.current() == '-' {
            name.push('-');
            self.cursor.advance();
            had_hyphen = true;
        }
        if !self.scan_name_start(&mut name) {
            if had_hyphen {
                self.cursor.push_back_char('-');
            }
            return (TokenKind::Character, text);
        }
        while self.scan_name_char(&mut name) {}
        let kind = token::at_keyword_kind(&name).unwrap_or(TokenKind::AtKeyword);
        text.push_str(&name);
        (kind, text)
    }

    /// `!` + optional whitespace + `important` (any case) collapses to the
    /// canonical `!important`. Otherwise the consumed whitespace goes back
    /// and the `!` stands alone.
    fn scan_important(&mut self) -> (TokenKind, String) {
        self.cursor.advance();
        let mut skipped = String::new();
        while matches!(self.cursor.current(), ' ' | '\t' | '\r' | '\n' | '\u{c}') {
            skipped.push(self.cursor.current());
            self.cursor.advance();
        }
        let mut matched = String::new();
        if self.cursor.try_match_ignore_case("important", &mut matched) {
            (TokenKind::Important, "!important".to_string())
        } else {
            if !skipped.is_empty() {
                self.cursor.push_back(&skipped);
            }
            (TokenKind::Character, "!".to_string())
        }
    }

    // ─── URL / Unicode Range ────────────────────────────────────────────

    /// `u`/`U` dispatch: `U+` range, then `url(`, then an identifier.
    fn scan_url_or_unicode_range(&mut self) -> (TokenKind, String) {
        if self.cursor.peek() == '+' {
            return self.scan_unicode_range();
        }
        if let Some(result) = self.scan_url() {
            return result;
        }
        self.scan_identifier_or_character()
    }

    /// `url(` + optional whitespace + (quoted string | unquoted url text)
    /// + optional whitespace + `)`. Any deviation pushes the accumulated
    /// text back and `None` sends the dispatcher down the identifier path.
    fn scan_url(&mut self) -> Option<(TokenKind, String)> {
        let mut text = String::new();
        if !self.cursor.try_match_ignore_case("url(", &mut text) {
            return None;
        }
        let mut ok = true;
        while matches!(self.cursor.current(), ' ' | '\t' | '\r' | '\n' | '\u{c}') {
            text.push(self.cursor.current());
            self.cursor.advance();
        }
        if matches!(self.cursor.current(), '\'' | '"') {
            let (kind, body) = self.scan_string();
            text.push_str(&body);
            if kind != TokenKind::String {
                ok = false;
            }
        } else {
            loop {
                let ch = self.cursor.current();
                if ch == '\\' {
                    if !self.scan_escape(&mut text) {
                        break;
                    }
                } else if !ch.is_ascii() && ch != '\0' {
                    text.push(ch);
                    self.cursor.advance();
                } else if is_url_char(ch) {
                    text.push(ch);
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        while matches!(self.cursor.current(), ' ' | '\t' | '\r' | '\n' | '\u{c}') {
            text.push(self.cursor.current());
            self.cursor.advance();
        }
        if ok && self.cursor.current() == ')' {
            text.push(')');
            self.cursor.advance();
            Some((TokenKind::Uri, text))
        } else {
            self.cursor.push_back(&text);
            None
        }
    }

    /// `U+` range: up to six hex digits or `?` wildcards, optionally a
    /// `-`-separated second hex value when no wildcard was used. Once a
    /// `?` appears, only further `?`s extend the component. Out-of-range
    /// or misordered values are reported; the token is emitted regardless.
    fn scan_unicode_range(&mut self) -> (TokenKind, String) {
        let mut prefix = String::new();
        prefix.push(self.cursor.current());
        self.cursor.advance();
        prefix.push(self.cursor.current());
        self.cursor.advance();

        let mut first = String::new();
        let mut has_questions = false;
        while first.len() < 6 {
            let ch = self.cursor.current();
            if ch == '?' {
                has_questions = true;
                first.push(ch);
                self.cursor.advance();
            } else if ch.is_ascii_hexdigit() && !has_questions {
                first.push(ch);
                self.cursor.advance();
            } else {
                break;
            }
        }
        if first.is_empty() {
            self.cursor.push_back(&prefix);
            return self.scan_identifier_or_character();
        }

        let first = strip_leading_zeros(&first);
        let upper_bound =
            u32::from_str_radix(&first.replace('?', "F"), 16).unwrap_or(u32::MAX);
        let mut text = prefix;
        text.push_str(first);
        let mut valid = upper_bound <= MAX_CODE_POINT;

        if !has_questions && self.cursor.current() == '-' {
            self.cursor.advance();
            let mut second = String::new();
            while second.len() < 6 && self.cursor.current().is_ascii_hexdigit() {
                second.push(self.cursor.current());
                self.cursor.advance();
            }
            if second.is_empty() {
                self.cursor.push_back_char('-');
            } else {
                let second = strip_leading_zeros(&second);
                let start = u32::from_str_radix(first, 16).unwrap_or(u32::MAX);
                let end = u32::from_str_radix(second, 16).unwrap_or(u32::MAX);
                if end > MAX_CODE_POINT || end <= start {
                    valid = false;
                }
                text.push('-');
                text.push_str(second);
            }
        }

        if !valid {
            self.report(DiagnosticCode::InvalidUnicodeRange);
        }
        (TokenKind::UnicodeRange, text)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// Numeric literal with canonicalized text, then `%` or a dimension
    /// unit. A zero value drops a length unit but keeps angle, time,
    /// frequency, and resolution units, and keeps unrecognized units.
    fn scan_numeric(&mut self) -> (TokenKind, String) {
        if self.cursor.current() == '.' && !self.cursor.peek().is_ascii_digit() {
            // A lone dot is not a number at all.
            return (TokenKind::Character, self.consume_current());
        }

        let mut integer = String::new();
        while self.cursor.current().is_ascii_digit() {
            integer.push(self.cursor.current());
            self.cursor.advance();
        }
        let mut fraction = String::new();
        let mut had_dot = false;
        if self.cursor.current() == '.' {
            if self.cursor.peek().is_ascii_digit() {
                had_dot = true;
                self.cursor.advance();
                while self.cursor.current().is_ascii_digit() {
                    fraction.push(self.cursor.current());
                    self.cursor.advance();
                }
            } else {
                // Digits were already read; tolerate the dangling dot.
                self.report(DiagnosticCode::DecimalNoDigit);
                had_dot = true;
                self.cursor.advance();
            }
        }
        if self.cursor.current() == '.' && self.cursor.peek().is_ascii_digit() {
            self.report(DiagnosticCode::UnexpectedNumberCharacter);
        }

        self.raw_number.clear();
        self.raw_number.push_str(&integer);
        if had_dot {
            self.raw_number.push('.');
        }
        self.raw_number.push_str(&fraction);

        let number = canonical_number(&integer, &fraction);

        if self.cursor.current() == '%' {
            self.cursor.advance();
            // The unit stays even on zero: some functions require it.
            return (TokenKind::Percentage, number + "%");
        }

        let mut unit = String::new();
        if self.scan_name_start(&mut unit) {
            while self.scan_name_char(&mut unit) {}
        }
        if unit.is_empty() {
            return (TokenKind::Number, number);
        }
        match token::dimension_kind(&unit) {
            Some(kind) => {
                if number == "0" && !token::unit_required_for_zero(kind) {
                    (TokenKind::Number, number)
                } else {
                    (kind, number + &unit)
                }
            }
            // Unknown unit: kept, possibly an intentional vendor construct.
            None => (TokenKind::Dimension, number + &unit),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    /// Identifier scan, or the literal character if nothing matched.
    fn scan_identifier_or_character(&mut self) -> (TokenKind, String) {
        if let Some(result) = self.try_scan_identifier_like() {
            return result;
        }
        (TokenKind::Character, self.consume_current())
    }

    /// Identifier, function, `not(`, or `progid:` chain, with optional
    /// `|`/`*|` namespace glyphs and an optional vendor hyphen. `None`
    /// restores the cursor via push-back.
    fn try_scan_identifier_like(&mut self) -> Option<(TokenKind, String)> {
        let mut text = String::new();
        match self.cursor.current() {
            '*' => {
                // Only meaningful as the `*|name` namespace shorthand.
                text.push('*');
                self.cursor.advance();
                if self.cursor.current() == '|' {
                    text.push('|');
                    self.cursor.advance();
                } else {
                    self.cursor.push_back_char('*');
                    return None;
                }
            }
            '|' => {
                text.push('|');
                self.cursor.advance();
            }
            _ => {}
        }
        if self.cursor.current() == '-' {
            text.push('-');
            self.cursor.advance();
        }
        if !self.scan_name_start(&mut text) {
            if text.is_empty() {
                return None;
            }
            let restore = text.clone();
            self.cursor.push_back(&restore);
            return None;
        }
        while self.scan_name_char(&mut text) {}

        if self.cursor.current() == ':' && text.eq_ignore_ascii_case("progid") {
            return Some(self.scan_progid(text));
        }
        if self.cursor.current() == '(' {
            let is_not = text.eq_ignore_ascii_case("not");
            text.push('(');
            self.cursor.advance();
            let kind = if is_not {
                TokenKind::Not
            } else {
                TokenKind::Function
            };
            return Some((kind, text));
        }
        Some((TokenKind::Identifier, text))
    }

    /// `progid:Dotted.Identifier.Chain(` — one token for the whole legacy
    /// IE filter function head. A missing `(` is reported.
    fn scan_progid(&mut self, mut text: String) -> (TokenKind, String) {
        text.push(':');
        self.cursor.advance();
        loop {
            while self.scan_name_char(&mut text) {}
            if self.cursor.current() == '.' {
                text.push('.');
                self.cursor.advance();
            } else {
                break;
            }
        }
        if self.cursor.current() == '(' {
            text.push('(');
            self.cursor.advance();
        } else {
            self.report(DiagnosticCode::ExpectedOpenParenthesis);
        }
        (TokenKind::ProgId, text)
    }

    /// First character of a name: letter, underscore (reported, CSS 2.1
    /// does not allow it), non-ASCII, or an escape.
    fn scan_name_start(&mut self, out: &mut String) -> bool {
        let ch = self.cursor.current();
        match ch {
            '_' => {
                self.report(DiagnosticCode::UnderscoreInName);
                out.push('_');
                self.cursor.advance();
                true
            }
            '\\' => self.scan_escape(out),
            c if c.is_ascii_alphabetic() => {
                out.push(c);
                self.cursor.advance();
                true
            }
            c if !c.is_ascii() => {
                out.push(c);
                self.cursor.advance();
                true
            }
            _ => false,
        }
    }

    /// Subsequent name character: name-start plus digits and hyphens.
    fn scan_name_char(&mut self, out: &mut String) -> bool {
        let ch = self.cursor.current();
        if ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
            self.cursor.advance();
            return true;
        }
        self.scan_name_start(out)
    }

    // ─── Escapes ────────────────────────────────────────────────────────

    /// Backslash escape at the cursor. Hex escapes decode to their code
    /// point; any other printable or non-ASCII character stays as a
    /// verbatim two-character sequence. Returns `false`, consuming
    /// nothing, when the next character cannot be escaped.
    fn scan_escape(&mut self, out: &mut String) -> bool {
        debug_assert_eq!(self.cursor.current(), '\\');
        let next = self.cursor.peek();
        if next.is_ascii_hexdigit() {
            self.cursor.advance();
            self.scan_unicode_escape(out);
            true
        } else if is_escapable(next) {
            out.push('\\');
            self.cursor.advance();
            out.push(next);
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Hex escape with the cursor on its first digit. Backslash and space
    /// re-encode to `\5c ` / `\20 ` so the output survives a re-scan;
    /// UTF-16 surrogate halves must pair up or are replaced.
    fn scan_unicode_escape(&mut self, out: &mut String) {
        let value = self.read_hex_escape_value();
        if (0xD800..=0xDBFF).contains(&value) {
            if self.cursor.current() == '\\' && self.cursor.peek().is_ascii_hexdigit() {
                self.cursor.advance();
                let low = self.read_hex_escape_value();
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                    push_code_point(out, combined);
                } else {
                    self.report(DiagnosticCode::InvalidLowSurrogate);
                    out.push(char::REPLACEMENT_CHARACTER);
                    push_code_point(out, low);
                }
            } else {
                self.report(DiagnosticCode::HighSurrogateNoLow);
                out.push(char::REPLACEMENT_CHARACTER);
            }
        } else if (0xDC00..=0xDFFF).contains(&value) {
            self.report(DiagnosticCode::InvalidLowSurrogate);
            out.push(char::REPLACEMENT_CHARACTER);
        } else {
            push_code_point(out, value);
        }
    }

    /// One to six hex digits plus the single optional trailing whitespace
    /// character, which is consumed but not part of the value.
    fn read_hex_escape_value(&mut self) -> u32 {
        let mut value = 0u32;
        let mut count = 0;
        while count < 6 {
            let Some(digit) = self.cursor.current().to_digit(16) else {
                break;
            };
            value = value * 16 + digit;
            self.cursor.advance();
            count += 1;
        }
        match self.cursor.current() {
            ' ' | '\t' => self.cursor.advance(),
            '\r' => {
                self.cursor.advance();
                if self.cursor.current() == '\n' {
                    self.cursor.advance();
                }
            }
            '\n' | '\u{c}' => self.cursor.advance(),
            _ => {}
        }
        value
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields every token, the final end-of-file token included, exactly
    /// once.
    fn next(&mut self) -> Option<Token> {
        if self.reached_end {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.reached_end = true;
        }
        Some(token)
    }
}

/// Printable character set allowed inside string literals (the delimiter,
/// backslash, and line terminators are handled before this check).
fn is_string_char(ch: char) -> bool {
    ch == '\t' || (' '..='~').contains(&ch)
}

/// Printable character set allowed in unquoted `url()` text.
fn is_url_char(ch: char) -> bool {
    ('!'..='~').contains(&ch) && !matches!(ch, '\'' | '"' | '(' | ')' | '\\')
}

/// Character that a non-hex backslash escape may name: printable ASCII or
/// anything non-ASCII. Line terminators and other controls cannot be
/// escaped this way.
fn is_escapable(ch: char) -> bool {
    (' '..='~').contains(&ch) || (!ch.is_ascii() && ch != '\0')
}

/// String validity: at least two characters, opening and closing with the
/// same delimiter.
fn is_well_delimited(text: &str, delimiter: char) -> bool {
    let mut chars = text.chars();
    let first = chars.next();
    let last = chars.next_back();
    first == Some(delimiter) && last == Some(delimiter)
}

/// Append a decoded code point, re-encoding backslash and space so the
/// token text can be scanned again without changing meaning.
fn push_code_point(out: &mut String, value: u32) {
    match value {
        0x5C => out.push_str("\\5c "),
        0x20 => out.push_str("\\20 "),
        _ => out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)),
    }
}

/// Strip leading zeros, keeping at least one character.
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

/// Canonical numeric text: leading zeros off the integer part, trailing
/// zeros off the fraction, an all-zero fraction dropped entirely.
fn canonical_number(integer: &str, fraction: &str) -> String {
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        return strip_leading_zeros(if integer.is_empty() { "0" } else { integer }).to_string();
    }
    let mut text = String::new();
    if !integer.is_empty() {
        text.push_str(strip_leading_zeros(integer));
    }
    text.push('.');
    text.push_str(fraction);
    text
}
