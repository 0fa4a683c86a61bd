//! Core types for lint violations and results.

use crate::stream::TokenStream;
use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Position of a violation within one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Index of the anchoring token in the stream.
    pub anchor: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(anchor: usize, line: usize, column: usize) -> Self {
        Self {
            anchor,
            line,
            column,
        }
    }
}

/// A suggested remediation attached to a violation.
///
/// Advisory text only; the linter never rewrites source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A style violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SL001").
    pub code: String,
    /// Rule name (e.g., "member-order").
    pub rule: String,
    /// Name of the specific check within the rule (e.g., "IncorrectOrder").
    pub check: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Anchor position in the token stream.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        check: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            check: check.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}.{}] {}",
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.check,
            self.message
        )
    }
}

/// Converts a [`Violation`] to a miette diagnostic for rich display.
///
/// The span is reconstructed from the stream the violation was found
/// in, so hosts that keep the source text around can render carets.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic from a violation and the stream it anchors into.
    #[must_use]
    pub fn new(violation: &Violation, stream: &TokenStream) -> Self {
        let offset = stream.offset_of(violation.location.anchor);
        let length = stream
            .get(violation.location.anchor)
            .map_or(0, |t| t.content.len());
        Self {
            message: format!("[{}] {}", violation.code, violation.message),
            help: violation.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((offset, length)),
            label_message: violation.rule.clone(),
        }
    }
}

/// Result of linting one token stream.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, sorted by line then column.
    pub violations: Vec<Violation>,
    /// Number of tokens delivered to the rules.
    pub tokens_scanned: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for v in &self.violations {
            match v.severity {
                Severity::Error => counts.0 += 1,
                Severity::Warning => counts.1 += 1,
                Severity::Info => counts.2 += 1,
            }
        }
        counts
    }

    /// Formats violations at or above `fail_on` as a multi-line report
    /// suitable for `panic!()` messages in test-harness hosts.
    #[must_use]
    pub fn format_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== sniff-lint: {} violation(s) ===\n",
            failing.len()
        );

        for v in &failing {
            let _ = writeln!(
                report,
                "{} [{}.{}] at line {}, column {}",
                v.rule, v.code, v.check, v.location.line, v.location.column,
            );
            let _ = writeln!(report, "  {}: {}", v.severity, v.message);
            if let Some(suggestion) = &v.suggestion {
                let _ = writeln!(report, "  = help: {}", suggestion.message);
            }
            let _ = writeln!(report);
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {errors} error(s), {warnings} warning(s), {infos} info(s)"
        );

        report
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.tokens_scanned += other.tokens_scanned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "SL002",
            "same-line-brace",
            "BraceNotSameLine",
            severity,
            Location::new(4, 2, 1),
            "Opening brace of the method must be on the same line as the declaration",
        )
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn display_includes_code_and_check() {
        let v = make_violation(Severity::Error);
        let display = format!("{v}");
        assert!(display.contains("[SL002.BraceNotSameLine]"));
        assert!(display.contains("2:1"));
    }

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (2, 0, 1));
    }

    #[test]
    fn format_report_filters_by_severity() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));

        let report = result.format_report(Severity::Error);
        assert!(report.contains("1 violation(s)"));
        assert!(report.contains("1 error(s)"));
        assert!(report.contains("1 warning(s)"));
    }

    #[test]
    fn format_report_includes_suggestion() {
        let mut result = LintResult::new();
        result.violations.push(
            make_violation(Severity::Error)
                .with_suggestion(Suggestion::new("Move the brace up one line")),
        );
        let report = result.format_report(Severity::Error);
        assert!(report.contains("= help: Move the brace up one line"));
    }

    #[test]
    fn diagnostic_span_uses_stream_offsets() {
        let stream = TokenStream::new(vec![
            Token::new(TokenKind::Function, "function", 1, 1),
            Token::new(TokenKind::Whitespace, " ", 1, 9),
            Token::new(TokenKind::OpenBrace, "{", 2, 1),
        ]);
        let v = Violation::new(
            "SL002",
            "same-line-brace",
            "BraceNotSameLine",
            Severity::Error,
            Location::new(2, 2, 1),
            "brace misplaced",
        );
        let diagnostic = ViolationDiagnostic::new(&v, &stream);
        let display = format!("{diagnostic}");
        assert!(display.contains("[SL002]"));
    }
}
