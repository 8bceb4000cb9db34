use pretty_assertions::assert_eq;

use super::*;

// === At-Keyword Classification ===

#[test]
fn at_keywords_classify_case_insensitively() {
    assert_eq!(at_keyword_kind("media"), Some(TokenKind::MediaKeyword));
    assert_eq!(at_keyword_kind("MEDIA"), Some(TokenKind::MediaKeyword));
    assert_eq!(at_keyword_kind("Media"), Some(TokenKind::MediaKeyword));
    assert_eq!(at_keyword_kind("import"), Some(TokenKind::ImportKeyword));
    assert_eq!(at_keyword_kind("font-face"), Some(TokenKind::FontFaceKeyword));
    assert_eq!(at_keyword_kind("charset"), Some(TokenKind::CharsetKeyword));
}

#[test]
fn vendor_prefixes_are_stripped() {
    assert_eq!(
        at_keyword_kind("-moz-keyframes"),
        Some(TokenKind::KeyFramesKeyword)
    );
    assert_eq!(
        at_keyword_kind("-webkit-keyframes"),
        Some(TokenKind::KeyFramesKeyword)
    );
    assert_eq!(at_keyword_kind("-ms-viewport"), None);
}

#[test]
fn all_sixteen_margin_boxes_classify() {
    let table = [
        ("top-left-corner", TokenKind::TopLeftCornerKeyword),
        ("top-left", TokenKind::TopLeftKeyword),
        ("top-center", TokenKind::TopCenterKeyword),
        ("top-right", TokenKind::TopRightKeyword),
        ("top-right-corner", TokenKind::TopRightCornerKeyword),
        ("bottom-left-corner", TokenKind::BottomLeftCornerKeyword),
        ("bottom-left", TokenKind::BottomLeftKeyword),
        ("bottom-center", TokenKind::BottomCenterKeyword),
        ("bottom-right", TokenKind::BottomRightKeyword),
        ("bottom-right-corner", TokenKind::BottomRightCornerKeyword),
        ("left-top", TokenKind::LeftTopKeyword),
        ("left-middle", TokenKind::LeftMiddleKeyword),
        ("left-bottom", TokenKind::LeftBottomKeyword),
        ("right-top", TokenKind::RightTopKeyword),
        ("right-middle", TokenKind::RightMiddleKeyword),
        ("right-bottom", TokenKind::RightBottomKeyword),
    ];
    for (name, kind) in table {
        assert_eq!(at_keyword_kind(name), Some(kind), "{name}");
    }
}

#[test]
fn unknown_names_are_generic() {
    assert_eq!(at_keyword_kind("bogus"), None);
    assert_eq!(at_keyword_kind("-bogus"), None);
}

// === Dimension Units ===

#[test]
fn unit_table_covers_every_category() {
    assert_eq!(dimension_kind("em"), Some(TokenKind::RelativeLength));
    assert_eq!(dimension_kind("vmax"), Some(TokenKind::RelativeLength));
    assert_eq!(dimension_kind("px"), Some(TokenKind::AbsoluteLength));
    assert_eq!(dimension_kind("PX"), Some(TokenKind::AbsoluteLength));
    assert_eq!(dimension_kind("turn"), Some(TokenKind::Angle));
    assert_eq!(dimension_kind("s"), Some(TokenKind::Time));
    assert_eq!(dimension_kind("dppx"), Some(TokenKind::Resolution));
    assert_eq!(dimension_kind("khz"), Some(TokenKind::Frequency));
    assert_eq!(dimension_kind("st"), Some(TokenKind::Speech));
    assert_eq!(dimension_kind("ft"), None);
}

#[test]
fn zero_keeps_units_that_carry_meaning() {
    assert!(unit_required_for_zero(TokenKind::Angle));
    assert!(unit_required_for_zero(TokenKind::Time));
    assert!(unit_required_for_zero(TokenKind::Frequency));
    assert!(unit_required_for_zero(TokenKind::Resolution));
    assert!(!unit_required_for_zero(TokenKind::AbsoluteLength));
    assert!(!unit_required_for_zero(TokenKind::RelativeLength));
    assert!(!unit_required_for_zero(TokenKind::Speech));
}

#[test]
fn dimension_kinds_answer_is_dimension() {
    assert!(TokenKind::AbsoluteLength.is_dimension());
    assert!(TokenKind::Speech.is_dimension());
    assert!(TokenKind::Dimension.is_dimension());
    assert!(!TokenKind::Number.is_dimension());
    assert!(!TokenKind::Percentage.is_dimension());
}
