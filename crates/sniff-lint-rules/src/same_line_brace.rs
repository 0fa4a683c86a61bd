//! Rule to keep a body's opening brace on the declaration line.
//!
//! # Rationale
//!
//! Mixing brace styles inside one codebase makes declarations harder
//! to scan. This rule pins the opening brace of methods, classes,
//! interfaces and traits to the line of the declaration itself:
//! for a method, the line of its parameter list's closing parenthesis;
//! for the rest, the line of the declared name.
//!
//! Anonymous functions are exempt; their braces follow the expression
//! they are embedded in.

use sniff_lint_core::{Rule, Severity, TokenKind, TokenStream, Violation};

/// Rule code for same-line-brace.
pub const CODE: &str = "SL002";

/// Rule name for same-line-brace.
pub const NAME: &str = "same-line-brace";

/// Requires the body-opening brace on the same line as its declaration.
#[derive(Debug, Clone)]
pub struct SameLineBrace {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SameLineBrace {
    fn default() -> Self {
        Self::new()
    }
}

impl SameLineBrace {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SameLineBrace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the opening brace on the same line as the declaration"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn register(&self) -> &'static [TokenKind] {
        &[
            TokenKind::Function,
            TokenKind::Class,
            TokenKind::Interface,
            TokenKind::Trait,
        ]
    }

    fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation> {
        let Some(token) = stream.get(at) else {
            return Vec::new();
        };

        // Functions nested in an anonymous function are exempt.
        if token.kind == TokenKind::Function
            && token
                .conditions
                .iter()
                .any(|&(_, kind)| kind == TokenKind::Closure)
        {
            return Vec::new();
        }

        // Bodyless declarations (interface methods, abstract signatures).
        let Some(opening_brace) = token.scope_opener else {
            return Vec::new();
        };

        let compare = match token.kind {
            TokenKind::Function => {
                // A function without a parameter-list closer is malformed;
                // leave it to the host.
                match token.parenthesis_closer {
                    Some(closer) => closer,
                    None => return Vec::new(),
                }
            }
            TokenKind::Class | TokenKind::Interface | TokenKind::Trait => {
                match stream.find_next(TokenKind::Identifier, at, None, false) {
                    Some(name) => name,
                    None => return Vec::new(),
                }
            }
            _ => return Vec::new(),
        };

        let (Some(brace_token), Some(compare_token)) =
            (stream.get(opening_brace), stream.get(compare))
        else {
            return Vec::new();
        };

        if brace_token.line == compare_token.line {
            return Vec::new();
        }

        let entity = if token.kind == TokenKind::Function {
            "method"
        } else {
            "class"
        };

        vec![Violation::new(
            CODE,
            NAME,
            "BraceNotSameLine",
            self.severity,
            stream.location(opening_brace),
            format!("Opening brace of the {entity} must be on the same line as the declaration"),
        )]
    }
}
