//! Diagnostic values and the severity scale they are graded on.

use std::fmt;

use thiserror::Error;

use crate::DiagnosticCode;

/// Severity grade for a diagnostic.
///
/// The numeric order matters: lower grades are more serious. Editors
/// typically map `SyntaxError` to error squiggles and everything else to
/// progressively dimmer warning styles.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// The input is not valid CSS.
    SyntaxError = 0,
    /// Valid-ish input that is probably not what the author meant.
    LikelyMistake = 1,
    /// Accepted today, at risk against current or future specifications.
    CompatibilityRisk = 2,
    /// Legal but known to be slow in real engines.
    PerformanceConcern = 3,
    /// Definitely wrong regardless of grammar level.
    Invalid = 4,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::SyntaxError => write!(f, "error"),
            Severity::LikelyMistake => write!(f, "warning"),
            Severity::CompatibilityRisk => write!(f, "compat"),
            Severity::PerformanceConcern => write!(f, "perf"),
            Severity::Invalid => write!(f, "invalid"),
        }
    }
}

/// A recoverable problem found while scanning, located in logical
/// (possibly remapped) source coordinates.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// What was found.
    pub code: DiagnosticCode,
    /// Severity grade; defaults to the code's own grade.
    pub severity: Severity,
    /// Logical line, 1-based.
    pub line: u32,
    /// Logical column, 0-based.
    pub column: u32,
}

impl Diagnostic {
    /// Create a diagnostic at the given logical position, with the code's
    /// default severity.
    pub fn new(code: DiagnosticCode, line: u32, column: u32) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            line,
            column,
        }
    }

    /// The code's human-readable message.
    pub fn message(&self) -> &'static str {
        self.code.message()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line {}, column {}",
            self.severity,
            self.code.message(),
            self.line,
            self.column
        )
    }
}

/// Fatal failure of the scanning environment, not of the scanned CSS.
///
/// Reserved for caller/environment contract violations — an input file that
/// cannot be read, for example. Malformed CSS is always reported through
/// [`Diagnostic`] instead.
#[derive(Error, Debug)]
#[error("{origin}: {message} (line {line}, column {column})")]
pub struct CriticalError {
    /// Component that raised the failure.
    pub origin: &'static str,
    /// Severity grade for uniform display.
    pub severity: Severity,
    /// Line where scanning stood when the failure occurred, 1-based.
    pub line: u32,
    /// Column where scanning stood, 0-based.
    pub column: u32,
    /// Formatted description.
    pub message: String,
    /// Underlying cause, when one exists.
    #[source]
    pub source: Option<std::io::Error>,
}

impl CriticalError {
    /// Wrap an I/O failure that occurred before any scanning happened.
    pub fn io(origin: &'static str, message: impl Into<String>, source: std::io::Error) -> Self {
        CriticalError {
            origin,
            severity: Severity::Invalid,
            line: 1,
            column: 0,
            message: message.into(),
            source: Some(source),
        }
    }
}

#[cfg(test)]
mod tests;
