use pretty_assertions::assert_eq;

use super::*;

#[test]
fn severity_order_is_numeric() {
    assert!(Severity::SyntaxError < Severity::LikelyMistake);
    assert!(Severity::LikelyMistake < Severity::CompatibilityRisk);
    assert!(Severity::CompatibilityRisk < Severity::PerformanceConcern);
    assert!(Severity::PerformanceConcern < Severity::Invalid);
}

#[test]
fn diagnostic_takes_default_severity_from_code() {
    let diag = Diagnostic::new(DiagnosticCode::UnterminatedString, 3, 7);
    assert_eq!(diag.severity, Severity::SyntaxError);
    assert_eq!(diag.line, 3);
    assert_eq!(diag.column, 7);
}

#[test]
fn diagnostic_display_names_location() {
    let diag = Diagnostic::new(DiagnosticCode::DecimalNoDigit, 12, 4);
    assert_eq!(
        diag.to_string(),
        "warning: decimal point with no digits after it at line 12, column 4"
    );
}

#[test]
fn critical_error_formats_origin_and_position() {
    let err = CriticalError::io(
        "csslex",
        "cannot read 'missing.css'",
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    );
    assert_eq!(
        err.to_string(),
        "csslex: cannot read 'missing.css' (line 1, column 0)"
    );
    assert!(std::error::Error::source(&err).is_some());
}
