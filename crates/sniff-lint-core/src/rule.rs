//! Rule trait for defining token-stream style rules.

use crate::stream::TokenStream;
use crate::token::TokenKind;
use crate::types::{Severity, Violation};

/// A stateless style rule over a token stream.
///
/// A rule declares the token kinds it wants to see via [`Rule::register`];
/// the linter then calls [`Rule::process`] once for every matching token,
/// in ascending stream order, passing the full stream and the trigger
/// index. All working state is local to one `process` call, so a rule
/// value can be shared across streams and threads freely.
///
/// # Example
///
/// ```ignore
/// use sniff_lint_core::{Rule, Severity, TokenKind, TokenStream, Violation};
///
/// pub struct NoEmptyBody;
///
/// impl Rule for NoEmptyBody {
///     fn name(&self) -> &'static str { "no-empty-body" }
///     fn code(&self) -> &'static str { "SL900" }
///
///     fn register(&self) -> &'static [TokenKind] {
///         &[TokenKind::Function]
///     }
///
///     fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation> {
///         // inspect stream around `at`, return findings
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "member-order").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Token kinds that cause the linter to invoke this rule.
    fn register(&self) -> &'static [TokenKind];

    /// Inspects the stream around the trigger token at `at`.
    ///
    /// Returns the violations found, possibly none. Must not panic on
    /// malformed or incomplete declarations; the contract is to exit
    /// silently on input the rule cannot interpret.
    fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn register(&self) -> &'static [TokenKind] {
            &[TokenKind::Comment]
        }

        fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                "TestCheck",
                self.default_severity(),
                stream.location(at),
                "Test violation",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.register(), &[TokenKind::Comment]);
    }
}
