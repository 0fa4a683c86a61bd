//! Rule to check blank-line spacing around decorative section headers.
//!
//! A section header is the conventional three-line comment block
//!
//! ```text
//! // ==========================
//! // == Rendering helpers    ==
//! // ==========================
//! ```
//!
//! where every line matches `//`, a run of two-or-more `=`, arbitrary
//! content, and another run of two-or-more `=`. The block is expected
//! to be preceded by exactly two blank lines and followed by exactly
//! one.
//!
//! # Reporting is opt-in
//!
//! The spacing computation always runs, but diagnostics are only
//! emitted when [`SectionCommentSpacing::enforce`] is set. The default
//! configuration reports nothing, so enabling this rule changes no
//! observable behavior until a host explicitly opts in.

use regex::Regex;
use sniff_lint_core::{Rule, Severity, Token, TokenKind, TokenStream, Violation};
use std::sync::OnceLock;

/// Rule code for section-comment-spacing.
pub const CODE: &str = "SL003";

/// Rule name for section-comment-spacing.
pub const NAME: &str = "section-comment-spacing";

fn is_section_header(content: &str) -> bool {
    static HEADER: OnceLock<Option<Regex>> = OnceLock::new();
    HEADER
        .get_or_init(|| Regex::new(r"^//\s*={2,}.*={2,}\s*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(content.trim()))
}

/// Whether the first token on `line` is blank. Lines with no tokens at
/// all are treated as not blank.
fn is_blank_line(stream: &TokenStream, line: usize) -> bool {
    stream
        .tokens()
        .iter()
        .find(|t| t.line == line)
        .is_some_and(Token::is_blank)
}

/// Checks blank-line spacing around three-line section header blocks.
#[derive(Debug, Clone)]
pub struct SectionCommentSpacing {
    /// Custom severity.
    pub severity: Severity,
    /// Whether the computed spacing violations are actually reported.
    pub enforce: bool,
}

impl Default for SectionCommentSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionCommentSpacing {
    /// Creates a new rule with reporting off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            enforce: false,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Turns diagnostic reporting on or off.
    #[must_use]
    pub fn enforce(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }
}

impl Rule for SectionCommentSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks blank-line spacing around decorative section comments"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn register(&self) -> &'static [TokenKind] {
        &[TokenKind::Comment]
    }

    fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation> {
        let Some(token) = stream.get(at) else {
            return Vec::new();
        };
        if !is_section_header(&token.content) {
            return Vec::new();
        }

        let line = token.line;

        // The block is three stacked header lines; when the previous
        // line is also a header line, this token is line 2 or 3 of a
        // block that was already processed at its first line.
        if line > 1
            && stream
                .tokens()
                .iter()
                .any(|t| t.line == line - 1 && is_section_header(&t.content))
        {
            return Vec::new();
        }

        let mut violations = Vec::new();

        // Blank tokens on the two lines directly above the block.
        let mut blank_before = 0;
        for earlier in stream.tokens()[..at].iter().rev() {
            if earlier.line + 2 < line {
                break;
            }
            if earlier.is_blank() {
                blank_before += 1;
            }
        }

        if blank_before < 2 && self.enforce {
            violations.push(Violation::new(
                CODE,
                NAME,
                "NotEnoughBlankLinesBefore",
                self.severity,
                stream.location(at),
                "Section comment must be preceded by 2 blank lines.",
            ));
        }

        // Exactly one blank line after the full three-line block.
        let after_block_blank = is_blank_line(stream, line + 3);
        let second_after_blank = is_blank_line(stream, line + 4);

        if (!after_block_blank || second_after_blank) && self.enforce {
            violations.push(Violation::new(
                CODE,
                NAME,
                "InvalidBlankLinesAfter",
                self.severity,
                stream.location(at),
                "Section comment block must be followed by exactly 1 blank line.",
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(content: &str, line: usize) -> Token {
        Token::new(TokenKind::Comment, content, line, 1)
    }

    fn newline(line: usize) -> Token {
        Token::new(TokenKind::Whitespace, "\n", line, 80)
    }

    /// A block at lines 4-6 with two blank lines before and one after.
    ///
    /// ```text
    /// 1  code
    /// 2
    /// 3
    /// 4  // ==========
    /// 5  // == Part ==
    /// 6  // ==========
    /// 7
    /// 8  more
    /// ```
    fn compliant_stream() -> TokenStream {
        TokenStream::new(vec![
            Token::new(TokenKind::Identifier, "code", 1, 1), // 0
            newline(1),                                      // 1
            newline(2),                                      // 2
            newline(3),                                      // 3
            comment("// ==========", 4),                     // 4
            newline(4),                                      // 5
            comment("// == Part ==", 5),                     // 6
            newline(5),                                      // 7
            comment("// ==========", 6),                     // 8
            newline(6),                                      // 9
            newline(7),                                      // 10
            Token::new(TokenKind::Identifier, "more", 8, 1), // 11
        ])
    }

    /// A block starting at line 1: nothing above it, one blank after.
    fn block_at_top_stream() -> TokenStream {
        TokenStream::new(vec![
            comment("// ====", 1),                           // 0
            newline(1),                                      // 1
            comment("// == T ==", 2),                        // 2
            newline(2),                                      // 3
            comment("// ====", 3),                           // 4
            newline(3),                                      // 5
            newline(4),                                      // 6
            Token::new(TokenKind::Identifier, "code", 5, 1), // 7
        ])
    }

    #[test]
    fn header_pattern_detection() {
        assert!(is_section_header("// =========="));
        assert!(is_section_header("// == Title =="));
        assert!(is_section_header("//====x===="));
        assert!(is_section_header("  // == padded ==  "));
        assert!(!is_section_header("// = single ="));
        assert!(!is_section_header("// ==="));
        assert!(!is_section_header("// plain comment"));
        assert!(!is_section_header("# == not slashes =="));
    }

    #[test]
    fn baseline_reports_nothing() {
        let rule = SectionCommentSpacing::new();
        let stream = block_at_top_stream();
        for at in [0, 2, 4] {
            assert!(rule.process(&stream, at).is_empty());
        }
    }

    #[test]
    fn compliant_block_passes_with_enforcement() {
        let rule = SectionCommentSpacing::new().enforce(true);
        assert!(rule.process(&compliant_stream(), 4).is_empty());
    }

    #[test]
    fn only_first_block_line_triggers() {
        let rule = SectionCommentSpacing::new().enforce(true);
        let stream = block_at_top_stream();
        assert_eq!(rule.process(&stream, 0).len(), 1);
        assert!(rule.process(&stream, 2).is_empty());
        assert!(rule.process(&stream, 4).is_empty());
    }

    #[test]
    fn enforcement_flags_missing_blank_lines_before() {
        let rule = SectionCommentSpacing::new().enforce(true);
        let violations = rule.process(&block_at_top_stream(), 0);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].check, "NotEnoughBlankLinesBefore");
        assert_eq!(violations[0].location.anchor, 0);
    }

    #[test]
    fn enforcement_flags_missing_blank_line_after() {
        // Same as the compliant stream, but line 7 holds code instead
        // of a blank.
        let mut tokens = compliant_stream().tokens().to_vec();
        tokens[10] = Token::new(TokenKind::Identifier, "more", 7, 1);
        tokens[11] = Token::new(TokenKind::Identifier, "extra", 8, 1);
        let stream = TokenStream::new(tokens);

        let violations = SectionCommentSpacing::new().enforce(true).process(&stream, 4);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].check, "InvalidBlankLinesAfter");
    }

    #[test]
    fn enforcement_flags_two_blank_lines_after() {
        // Lines 7 and 8 both blank: one too many.
        let mut tokens = compliant_stream().tokens().to_vec();
        tokens[11] = newline(8);
        let stream = TokenStream::new(tokens);

        let violations = SectionCommentSpacing::new().enforce(true).process(&stream, 4);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].check, "InvalidBlankLinesAfter");
    }

    #[test]
    fn ordinary_comment_is_ignored() {
        let stream = TokenStream::new(vec![comment("// just a note", 1)]);
        assert!(SectionCommentSpacing::new()
            .enforce(true)
            .process(&stream, 0)
            .is_empty());
    }
}
