//! Command implementations for the `csslex` binary.

use std::cell::Cell;
use std::rc::Rc;

use css_diagnostic::{CriticalError, Severity};
use css_lexer::{Scanner, ScannerOptions, TokenKind};

/// Read a stylesheet, wrapping failures into the uniform fatal error shape.
fn read_file(path: &str) -> Result<String, CriticalError> {
    std::fs::read_to_string(path)
        .map_err(|err| CriticalError::io("csslex", format!("cannot read '{path}'"), err))
}

/// Build a scanner that prints every diagnostic as it is raised and counts
/// the syntax-error-severity ones.
fn scanner_for(path: &str, source: String, options: ScannerOptions) -> (Scanner, Rc<Cell<usize>>) {
    let mut scanner = Scanner::new(source, options);
    let errors = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&errors);
    let path = path.to_string();
    scanner.on_diagnostic(move |diagnostic| {
        println!("{path}: {diagnostic}");
        if diagnostic.severity == Severity::SyntaxError {
            counter.set(counter.get() + 1);
        }
    });
    (scanner, errors)
}

/// `csslex tokens <file>`: dump every token with its logical position.
pub fn dump_tokens(path: &str, options: ScannerOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    let (mut scanner, errors) = scanner_for(path, source, options);
    scanner.on_source_remap(|file| println!("-- positions remapped to '{file}'"));

    println!("Tokens for '{path}':");
    let mut count = 0usize;
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::EndOfFile {
            break;
        }
        count += 1;
        let file = token.position.file.as_deref().unwrap_or(path);
        println!(
            "  {:?} {:?} @ {}:{}:{}",
            token.kind, token.text, file, token.position.line, token.position.column
        );
    }
    println!("{count} tokens, {} errors", errors.get());
    0
}

/// `csslex check <file>`: diagnostics only; non-zero exit on syntax errors.
pub fn check_file(path: &str, options: ScannerOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    let (mut scanner, errors) = scanner_for(path, source, options);
    while scanner.next_token().kind != TokenKind::EndOfFile {}

    let errors = errors.get();
    if errors > 0 {
        println!("{errors} syntax errors in '{path}'");
        1
    } else {
        println!("no syntax errors in '{path}'");
        0
    }
}
