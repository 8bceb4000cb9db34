//! Hand-written CSS lexical scanner.
//!
//! Converts a raw CSS (or embedded-style) text stream into a sequence of
//! typed lexical tokens covering the CSS 2.1/CSS3 token grammar plus the
//! vendor extensions real stylesheets contain: unicode escapes, string and
//! `url()` literals, dimensioned numbers, `!important`, `progid:` filter
//! functions, `<% %>` server blocks, and a `///#source` directive that
//! remaps reported positions for generated CSS.
//!
//! The scanner is pull-based and single-threaded: one [`Scanner`] per input,
//! one [`Token`] per [`Scanner::next_token`] call. Malformed input never
//! panics and never stops the scan — problems are reported synchronously
//! through a diagnostic callback and the scanner recovers with a best-effort
//! token so the caller's loop always terminates.
//!
//! # Layers
//!
//! - [`context`]: line/column tracking and `///#source` position remapping.
//! - [`cursor`]: character cursor with one-character peek and an arbitrary
//!   push-back buffer (the backtracking mechanism for tentative matches).
//! - [`token`]: the closed token kind set and classification tables.
//! - [`scanner`]: the dispatch state machine itself.

pub mod context;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use context::{SourceContext, SourcePosition};
pub use cursor::Cursor;
pub use scanner::{Scanner, ScannerOptions};
pub use token::{Token, TokenKind};
