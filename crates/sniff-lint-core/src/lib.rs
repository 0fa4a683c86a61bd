//! # sniff-lint-core
//!
//! Core framework for style linting over pre-lexed token streams.
//!
//! A host tokenizes a source unit and hands the stream to the linter;
//! each registered rule is invoked once per token of a kind it asked
//! for, inspects the surrounding structure through the [`TokenStream`]
//! API, and returns its findings as [`Violation`]s. This crate provides:
//!
//! - [`Token`] / [`TokenKind`] — the host-supplied token model
//! - [`TokenStream`] — indexed lookup, directional search, declaration
//!   accessors, and text reconstruction over one unit's tokens
//! - [`Rule`] — the trait a style rule implements
//! - [`Linter`] — dispatch of registered rules over a stream
//! - [`Violation`] / [`LintResult`] — reported findings
//!
//! ## Example
//!
//! ```ignore
//! use sniff_lint_core::{Linter, TokenStream};
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = linter.lint(&stream);
//! assert!(!result.has_errors());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod rule;
mod stream;
mod token;
mod types;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{Linter, LinterBuilder};
pub use rule::{Rule, RuleBox};
pub use stream::{MethodProperties, TokenStream, Visibility};
pub use token::{Token, TokenKind};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
