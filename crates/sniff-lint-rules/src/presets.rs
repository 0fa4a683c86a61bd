//! Rule presets for common configurations.

use crate::{MemberOrder, SameLineBrace, SectionCommentSpacing};
use sniff_lint_core::RuleBox;

/// Preset configurations for sniff-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// All rules with their default behavior.
    Recommended,
    /// All rules, with the spacing rule's reporting switched on.
    Strict,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `member-order` (SL001)
/// - `same-line-brace` (SL002)
/// - `section-comment-spacing` (SL003), computing but not reporting
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MemberOrder::new()),
        Box::new(SameLineBrace::new()),
        Box::new(SectionCommentSpacing::new()),
    ]
}

/// Returns the strict set of rules.
///
/// Same as recommended, but `section-comment-spacing` actually reports
/// its spacing findings.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MemberOrder::new()),
        Box::new(SameLineBrace::new()),
        Box::new(SectionCommentSpacing::new().enforce(true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_non_empty() {
        assert_eq!(Preset::Recommended.rules().len(), 3);
        assert_eq!(Preset::Strict.rules().len(), 3);
    }
}
