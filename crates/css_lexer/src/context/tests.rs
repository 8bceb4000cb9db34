use pretty_assertions::assert_eq;

use super::*;

#[test]
fn starts_at_line_one_column_zero() {
    let ctx = SourceContext::new();
    assert_eq!(ctx.line(), 1);
    assert_eq!(ctx.column(), 0);
    assert_eq!(ctx.file(), None);
}

#[test]
fn plain_characters_advance_the_column() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('a', 'b');
    ctx.advance_over('b', 'c');
    assert_eq!(ctx.line(), 1);
    assert_eq!(ctx.column(), 2);
}

#[test]
fn line_feed_advances_the_line() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('a', '\n');
    ctx.advance_over('\n', 'b');
    assert_eq!(ctx.line(), 2);
    assert_eq!(ctx.column(), 0);
}

#[test]
fn form_feed_advances_the_line() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('\u{c}', 'b');
    assert_eq!(ctx.line(), 2);
    assert_eq!(ctx.column(), 0);
}

#[test]
fn lone_carriage_return_advances_the_line() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('\r', 'b');
    assert_eq!(ctx.line(), 2);
    assert_eq!(ctx.column(), 0);
}

#[test]
fn crlf_counts_as_one_terminator() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('\r', '\n');
    assert_eq!(ctx.line(), 1, "the CR half must not advance the line");
    ctx.advance_over('\n', 'b');
    assert_eq!(ctx.line(), 2);
    assert_eq!(ctx.column(), 0);
}

#[test]
fn retreat_rolls_back_the_column_only() {
    let mut ctx = SourceContext::new();
    for _ in 0..5 {
        ctx.advance_over('x', 'x');
    }
    ctx.retreat(3);
    assert_eq!(ctx.column(), 2);
    assert_eq!(ctx.line(), 1);
}

#[test]
fn retreat_saturates_at_zero() {
    let mut ctx = SourceContext::new();
    ctx.advance_over('x', 'x');
    ctx.retreat(10);
    assert_eq!(ctx.column(), 0);
}

#[test]
fn remap_redirects_file_and_origin() {
    let mut ctx = SourceContext::new();
    ctx.remap(Arc::from("foo.scss"), 10, 5);
    assert_eq!(ctx.file(), Some("foo.scss"));
    assert_eq!(ctx.line(), 10);
    assert_eq!(ctx.column(), 5);
    ctx.advance_over('b', 'o');
    assert_eq!(ctx.column(), 6);

    let pos = ctx.position();
    assert_eq!(pos.file.as_deref(), Some("foo.scss"));
    assert_eq!(pos.line, 10);
    assert_eq!(pos.column, 6);
}
