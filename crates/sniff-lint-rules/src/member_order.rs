//! Rule to enforce the declaration order of class members.
//!
//! # Rationale
//!
//! A fixed member layout makes large classes scannable: constants and
//! fields first, then the constructor, then methods grouped from most
//! to least visible, with getters/setters at the end.
//!
//! Enforced precedence:
//!
//! 1. Constants
//! 2. Properties
//! 3. Constructors
//! 4. Abstract methods
//! 5. Overridden methods (doc comment carrying `@override`)
//! 6. Public methods
//! 7. Protected methods
//! 8. Private methods
//! 9. Getters/Setters (`get`/`set` + uppercase letter; an additional
//!    tag on top of the visibility category, not a replacement)
//!
//! # Known approximation
//!
//! The order check compares the raw token-stream index of a category's
//! first member against the summed member *counts* of all
//! higher-precedence categories. That is an ordinal-count heuristic,
//! not a true positional check: with many non-member tokens between
//! body boundaries it can both under- and over-trigger. The behavior
//! is kept as-is deliberately; changing it would change which inputs
//! are accepted.

use regex::Regex;
use sniff_lint_core::{Rule, Severity, TokenKind, TokenStream, Violation, Visibility};
use std::sync::OnceLock;

/// Rule code for member-order.
pub const CODE: &str = "SL001";

/// Rule name for member-order.
pub const NAME: &str = "member-order";

/// Marker substring read from a method's doc comment.
const OVERRIDE_MARKER: &str = "@override";

/// Member categories, listed in their mandated precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberCategory {
    Constants,
    Properties,
    Constructors,
    AbstractMethods,
    OverriddenMethods,
    PublicMethods,
    ProtectedMethods,
    PrivateMethods,
    Accessors,
}

impl MemberCategory {
    const IN_PRECEDENCE_ORDER: [Self; 9] = [
        Self::Constants,
        Self::Properties,
        Self::Constructors,
        Self::AbstractMethods,
        Self::OverriddenMethods,
        Self::PublicMethods,
        Self::ProtectedMethods,
        Self::PrivateMethods,
        Self::Accessors,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Constants => "Constants",
            Self::Properties => "Properties",
            Self::Constructors => "Constructors",
            Self::AbstractMethods => "Abstract methods",
            Self::OverriddenMethods => "Overridden methods",
            Self::PublicMethods => "Public methods",
            Self::ProtectedMethods => "Protected methods",
            Self::PrivateMethods => "Private methods",
            Self::Accessors => "Getters/Setters",
        }
    }
}

/// Token indices of classified members, one bucket per category.
///
/// A method lands in exactly one of the six method buckets; it may
/// additionally appear in `Accessors`.
struct ClassifiedMembers {
    buckets: [Vec<usize>; 9],
}

impl ClassifiedMembers {
    fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn record(&mut self, category: MemberCategory, index: usize) {
        self.buckets[category as usize].push(index);
    }

    fn bucket(&self, category: MemberCategory) -> &[usize] {
        &self.buckets[category as usize]
    }
}

fn is_accessor_name(name: &str) -> bool {
    static ACCESSOR: OnceLock<Option<Regex>> = OnceLock::new();
    ACCESSOR
        .get_or_init(|| Regex::new(r"^(?:get|set)[A-Z]").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Enforces the mandated declaration order of class members.
#[derive(Debug, Clone)]
pub struct MemberOrder {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MemberOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberOrder {
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

    /// Scans the body span and sorts every member into its category.
    ///
    /// Nested declarations are not recursed into; their member tokens
    /// are visible to this scan and classified as if they belonged to
    /// the outer body. Accepted scope limitation.
    fn classify(stream: &TokenStream, open: usize, close: usize) -> ClassifiedMembers {
        let mut members = ClassifiedMembers::new();

        for i in open + 1..close {
            let Some(token) = stream.get(i) else { break };
            match token.kind {
                TokenKind::Const => members.record(MemberCategory::Constants, i),
                TokenKind::Var | TokenKind::Public | TokenKind::Protected | TokenKind::Private => {
                    // A property is a visibility or legacy-field keyword
                    // directly followed by a variable. Anything else is
                    // assumed to start a method and is left to the
                    // Function branch.
                    if let Some(next) = stream.find_next(TokenKind::Whitespace, i + 1, None, true) {
                        if stream.get(next).is_some_and(|t| t.kind == TokenKind::Variable) {
                            members.record(MemberCategory::Properties, i);
                        }
                    }
                }
                TokenKind::Function => {
                    let name = stream.declaration_name(i);
                    let properties = stream.method_properties(i);

                    if name == Some("__construct") {
                        members.record(MemberCategory::Constructors, i);
                    } else if properties.is_abstract {
                        members.record(MemberCategory::AbstractMethods, i);
                    } else if properties.visibility_specified {
                        if has_override_marker(stream, i) {
                            members.record(MemberCategory::OverriddenMethods, i);
                        } else {
                            match properties.visibility {
                                Some(Visibility::Public) => {
                                    members.record(MemberCategory::PublicMethods, i);
                                }
                                Some(Visibility::Protected) => {
                                    members.record(MemberCategory::ProtectedMethods, i);
                                }
                                Some(Visibility::Private) => {
                                    members.record(MemberCategory::PrivateMethods, i);
                                }
                                None => {}
                            }
                        }
                    }

                    // Orthogonal tag on top of the method categories.
                    if name.is_some_and(is_accessor_name) {
                        members.record(MemberCategory::Accessors, i);
                    }
                }
                _ => {}
            }
        }

        members
    }

    /// Walks the categories in precedence order and reports every
    /// non-empty category whose first member sits below the running
    /// total of higher-precedence members.
    fn verify_order(
        &self,
        stream: &TokenStream,
        at: usize,
        members: &ClassifiedMembers,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut expected = 0usize;

        for category in MemberCategory::IN_PRECEDENCE_ORDER {
            let bucket = members.bucket(category);
            if let Some(&first) = bucket.first() {
                if first < expected {
                    violations.push(Violation::new(
                        CODE,
                        NAME,
                        "IncorrectOrder",
                        self.severity,
                        stream.location(at),
                        format!(
                            "The {} should be declared after position {}.",
                            category.label(),
                            expected
                        ),
                    ));
                }
            }
            expected += bucket.len();
        }

        violations
    }
}

fn has_override_marker(stream: &TokenStream, at: usize) -> bool {
    let Some(doc) = stream.find_previous(TokenKind::DocComment, at) else {
        return false;
    };
    let length = at.saturating_sub(doc + 1);
    stream.concatenated_text(doc, length).contains(OVERRIDE_MARKER)
}

impl Rule for MemberOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the declaration order of class members"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn register(&self) -> &'static [TokenKind] {
        &[TokenKind::Class]
    }

    fn process(&self, stream: &TokenStream, at: usize) -> Vec<Violation> {
        let Some(token) = stream.get(at) else {
            return Vec::new();
        };
        // A class without a resolved body is skipped entirely.
        let (Some(open), Some(close)) = (token.scope_opener, token.scope_closer) else {
            return Vec::new();
        };

        let members = Self::classify(stream, open, close);
        self.verify_order(stream, at, &members)
    }
}
