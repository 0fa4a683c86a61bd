//! Dispatch of registered rules over one token stream.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::stream::TokenStream;
use crate::types::{LintResult, Violation};

use tracing::{debug, info};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the linter.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules over token streams.
///
/// The linter is the in-process stand-in for the host's dispatch loop:
/// it walks a stream in ascending index order and, for each token,
/// invokes every enabled rule whose [`Rule::register`] set contains the
/// token's kind. Rules are stateless, so one linter can serve any
/// number of streams, concurrently if desired.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints one token stream and returns the collected violations,
    /// sorted by line then column.
    #[must_use]
    pub fn lint(&self, stream: &TokenStream) -> LintResult {
        debug!(
            "Linting stream of {} tokens with {} rules",
            stream.len(),
            self.rules.len()
        );

        let mut result = LintResult::new();
        result.tokens_scanned = stream.len();

        for (index, token) in stream.tokens().iter().enumerate() {
            for rule in &self.rules {
                if !rule.register().contains(&token.kind) {
                    continue;
                }
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }

                let violations = rule.process(stream, index);
                let violations = self.apply_severity_override(rule.name(), violations);
                result.violations.extend(violations);
            }
        }

        result.violations.sort_by(|a, b| {
            a.location
                .line
                .cmp(&b.location.line)
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Lint complete: {} violations in {} tokens",
            result.violations.len(),
            result.tokens_scanned
        );

        result
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}
