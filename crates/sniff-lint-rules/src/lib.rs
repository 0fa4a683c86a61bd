//! # sniff-lint-rules
//!
//! Built-in style rules for sniff-lint.
//!
//! Each rule is an independent, stateless checker over a pre-lexed
//! token stream; rules share nothing and can be registered and tested
//! in isolation.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SL001 | `member-order` | Enforces the declaration order of class members |
//! | SL002 | `same-line-brace` | Requires the opening brace on the same line as the declaration |
//! | SL003 | `section-comment-spacing` | Checks blank-line spacing around decorative section comments (reporting is opt-in) |
//!
//! ## Usage
//!
//! ```ignore
//! use sniff_lint_core::Linter;
//! use sniff_lint_rules::{MemberOrder, SameLineBrace};
//!
//! let linter = Linter::builder()
//!     .rule(MemberOrder::new())
//!     .rule(SameLineBrace::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod member_order;
mod presets;
mod same_line_brace;
mod section_comment_spacing;

pub use member_order::MemberOrder;
pub use presets::{recommended_rules, strict_rules, Preset};
pub use same_line_brace::SameLineBrace;
pub use section_comment_spacing::SectionCommentSpacing;

/// Re-export core types for convenience.
pub use sniff_lint_core::{Rule, Severity, Violation};
