//! Token model: the closed kind set and the classification tables the
//! scanner consults for at-rule keywords and dimension units.

use crate::context::SourcePosition;

/// Lexical token kind.
///
/// One variant per recognized at-rule keyword (vendor prefixes are stripped
/// before classification), one per dimension unit category, and a catch-all
/// [`Character`](TokenKind::Character) for everything the grammar leaves
/// unclassified.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Returned indefinitely once reached.
    EndOfFile,
    /// Any run of spaces, tabs, and line terminators, collapsed to `" "`.
    WhiteSpace,
    /// Block comment `/* ... */`, including its delimiters.
    Comment,
    /// `<!--`, the HTML-embedding open delimiter.
    OpenHtmlComment,
    /// `-->`, the HTML-embedding close delimiter.
    CloseHtmlComment,
    Identifier,
    /// Identifier directly followed by `(`.
    Function,
    /// The `not(` pseudo-class function.
    Not,
    /// `#` followed by a name (ID selector or hex color).
    Hash,
    String,
    /// Structurally broken literal (for example a lone quote at EOF).
    Error,
    /// Unitless number, canonicalized.
    Number,
    /// Number followed by `%`. The unit is kept even for zero.
    Percentage,
    /// Number with an unrecognized unit, kept verbatim in case it is an
    /// intentional vendor construct.
    Dimension,
    /// em, ex, ch, rem, vw, vh, vm, vmin, vmax, fr, gr, gd.
    RelativeLength,
    /// cm, mm, in, px, pt, pc.
    AbsoluteLength,
    /// deg, grad, rad, turn.
    Angle,
    /// ms, s.
    Time,
    /// dpi, dpcm, dppx.
    Resolution,
    /// hz, khz.
    Frequency,
    /// db, st (aural stylesheets).
    Speech,
    /// `url(...)`, quoted or unquoted.
    Uri,
    /// `U+XXXX`-style unicode range, wildcards included.
    UnicodeRange,

    // Recognized at-rule keywords. Vendor-prefixed spellings classify the
    // same as the bare keyword.
    ImportKeyword,
    PageKeyword,
    MediaKeyword,
    FontFaceKeyword,
    CharsetKeyword,
    NamespaceKeyword,
    KeyFramesKeyword,

    // Page margin box keywords (@page at-rule).
    TopLeftCornerKeyword,
    TopLeftKeyword,
    TopCenterKeyword,
    TopRightKeyword,
    TopRightCornerKeyword,
    BottomLeftCornerKeyword,
    BottomLeftKeyword,
    BottomCenterKeyword,
    BottomRightKeyword,
    BottomRightCornerKeyword,
    LeftTopKeyword,
    LeftMiddleKeyword,
    LeftBottomKeyword,
    RightTopKeyword,
    RightMiddleKeyword,
    RightBottomKeyword,

    /// `@` followed by a name no table recognizes.
    AtKeyword,
    /// `!important`, case and interior whitespace normalized away.
    Important,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    /// `progid:...(` legacy IE filter function.
    ProgId,
    /// `<% ... %>` server code block passed through opaquely.
    CodeBlock,
    /// Exactly one character the grammar does not otherwise classify.
    Character,
}

impl TokenKind {
    /// Whether this kind is a dimensioned number of any category.
    pub fn is_dimension(self) -> bool {
        matches!(
            self,
            TokenKind::Dimension
                | TokenKind::RelativeLength
                | TokenKind::AbsoluteLength
                | TokenKind::Angle
                | TokenKind::Time
                | TokenKind::Resolution
                | TokenKind::Frequency
                | TokenKind::Speech
        )
    }
}

/// One lexical token: kind, canonical text, and the logical position of its
/// first character.
///
/// `text` is canonical rather than byte-identical to the input: whitespace
/// runs collapse to one space, zero-valued lengths lose their unit, and
/// unicode escapes are decoded (or re-encoded, for `\5c` and `\20`).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }
}

/// Classify an at-rule name (without the `@`), case-insensitively and with
/// any `-vendor-` prefix stripped. `None` means a generic at-keyword.
pub(crate) fn at_keyword_kind(name: &str) -> Option<TokenKind> {
    let lower = name.to_ascii_lowercase();
    let kind = match strip_vendor_prefix(&lower) {
        "import" => TokenKind::ImportKeyword,
        "page" => TokenKind::PageKeyword,
        "media" => TokenKind::MediaKeyword,
        "font-face" => TokenKind::FontFaceKeyword,
        "charset" => TokenKind::CharsetKeyword,
        "namespace" => TokenKind::NamespaceKeyword,
        "keyframes" => TokenKind::KeyFramesKeyword,
        "top-left-corner" => TokenKind::TopLeftCornerKeyword,
        "top-left" => TokenKind::TopLeftKeyword,
        "top-center" => TokenKind::TopCenterKeyword,
        "top-right" => TokenKind::TopRightKeyword,
        "top-right-corner" => TokenKind::TopRightCornerKeyword,
        "bottom-left-corner" => TokenKind::BottomLeftCornerKeyword,
        "bottom-left" => TokenKind::BottomLeftKeyword,
        "bottom-center" => TokenKind::BottomCenterKeyword,
        "bottom-right" => TokenKind::BottomRightKeyword,
        "bottom-right-corner" => TokenKind::BottomRightCornerKeyword,
        "left-top" => TokenKind::LeftTopKeyword,
        "left-middle" => TokenKind::LeftMiddleKeyword,
        "left-bottom" => TokenKind::LeftBottomKeyword,
        "right-top" => TokenKind::RightTopKeyword,
        "right-middle" => TokenKind::RightMiddleKeyword,
        "right-bottom" => TokenKind::RightBottomKeyword,
        _ => return None,
    };
    Some(kind)
}

/// Strip a `-vendor-` prefix: `-moz-keyframes` becomes `keyframes`.
/// A lone leading hyphen with no second hyphen is left alone.
fn strip_vendor_prefix(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix('-') {
        if let Some(idx) = rest.find('-') {
            return &rest[idx + 1..];
        }
    }
    name
}

/// Classify a dimension unit, case-insensitively. `None` means an unknown
/// unit (generic dimension).
pub(crate) fn dimension_kind(unit: &str) -> Option<TokenKind> {
    let kind = match unit.to_ascii_lowercase().as_str() {
        "em" | "ex" | "ch" | "rem" | "vw" | "vh" | "vm" | "vmin" | "vmax" | "fr" | "gr" | "gd" => {
            TokenKind::RelativeLength
        }
        "cm" | "mm" | "in" | "px" | "pt" | "pc" => TokenKind::AbsoluteLength,
        "deg" | "grad" | "rad" | "turn" => TokenKind::Angle,
        "ms" | "s" => TokenKind::Time,
        "dpi" | "dpcm" | "dppx" => TokenKind::Resolution,
        "hz" | "khz" => TokenKind::Frequency,
        "db" | "st" => TokenKind::Speech,
        _ => return None,
    };
    Some(kind)
}

/// Whether a zero value must keep its unit for this dimension category.
///
/// `0px` can drop its unit, but angles, times, frequencies, and
/// resolutions are meaningless without one (`0deg` in a gradient is not
/// the same token as `0`).
pub(crate) fn unit_required_for_zero(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Angle | TokenKind::Time | TokenKind::Frequency | TokenKind::Resolution
    )
}

#[cfg(test)]
mod tests;
