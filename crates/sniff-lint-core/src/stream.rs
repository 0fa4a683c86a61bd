//! Read-only access to one source unit's token stream.
//!
//! The host tokenizes a source unit and hands the resulting stream to
//! the linter; rules never see source text except through this API.
//! All lookups are defensive: an out-of-range index yields `None` (or a
//! neutral value), never a panic, so rules can probe odd input freely.

use crate::token::{Token, TokenKind};
use crate::types::Location;

/// Declared visibility of a function-like member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

/// Modifier properties of a function-like declaration, derived from the
/// keyword tokens immediately preceding it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodProperties {
    /// Declared visibility, if any.
    pub visibility: Option<Visibility>,
    /// Whether a visibility keyword was written out explicitly.
    pub visibility_specified: bool,
    /// Whether the declaration carries `abstract`.
    pub is_abstract: bool,
    /// Whether the declaration carries `static`.
    pub is_static: bool,
    /// Whether the declaration carries `final`.
    pub is_final: bool,
}

/// An immutable token stream for one source unit.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wraps a host-produced token vector.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Random-access lookup of one token.
    #[must_use]
    pub fn get(&self, at: usize) -> Option<&Token> {
        self.tokens.get(at)
    }

    /// The full token slice, for rules that scan lines or windows.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Finds the nearest token at or after `from` whose kind matches
    /// `kind`, up to (excluding) `until` when given.
    ///
    /// With `exclude` set, the match is inverted: the nearest token
    /// whose kind is *not* `kind`.
    #[must_use]
    pub fn find_next(
        &self,
        kind: TokenKind,
        from: usize,
        until: Option<usize>,
        exclude: bool,
    ) -> Option<usize> {
        let end = until.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (from..end).find(|&i| (self.tokens[i].kind == kind) != exclude)
    }

    /// Finds the nearest token at or before `from` of the given kind.
    #[must_use]
    pub fn find_previous(&self, kind: TokenKind, from: usize) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let start = from.min(self.tokens.len() - 1);
        (0..=start).rev().find(|&i| self.tokens[i].kind == kind)
    }

    /// The declared name of a declaration token: the content of the
    /// nearest following identifier.
    #[must_use]
    pub fn declaration_name(&self, at: usize) -> Option<&str> {
        let name = self.find_next(TokenKind::Identifier, at + 1, None, false)?;
        Some(self.tokens[name].content.as_str())
    }

    /// Modifier properties of the function-like declaration at `at`,
    /// gathered by scanning backward over the modifier keywords written
    /// immediately before it. The scan skips whitespace and comments
    /// and stops at the first token that is neither.
    #[must_use]
    pub fn method_properties(&self, at: usize) -> MethodProperties {
        let mut props = MethodProperties::default();
        let mut i = at.min(self.tokens.len());
        while i > 0 {
            i -= 1;
            match self.tokens[i].kind {
                TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment => {}
                TokenKind::Public => {
                    props.visibility = Some(Visibility::Public);
                    props.visibility_specified = true;
                }
                TokenKind::Protected => {
                    props.visibility = Some(Visibility::Protected);
                    props.visibility_specified = true;
                }
                TokenKind::Private => {
                    props.visibility = Some(Visibility::Private);
                    props.visibility_specified = true;
                }
                TokenKind::Abstract => props.is_abstract = true,
                TokenKind::Static => props.is_static = true,
                TokenKind::Final => props.is_final = true,
                _ => break,
            }
        }
        props
    }

    /// Reconstructs the literal text of `length` tokens starting at
    /// `from`. Ranges reaching past the end of the stream are clamped.
    #[must_use]
    pub fn concatenated_text(&self, from: usize, length: usize) -> String {
        let end = from.saturating_add(length).min(self.tokens.len());
        self.tokens
            .get(from..end)
            .unwrap_or_default()
            .iter()
            .map(|t| t.content.as_str())
            .collect()
    }

    /// Byte offset of the token at `at` from the start of the unit.
    ///
    /// Tokens tile the source text, so the offset is the sum of the
    /// content lengths of all preceding tokens.
    #[must_use]
    pub fn offset_of(&self, at: usize) -> usize {
        self.tokens
            .iter()
            .take(at)
            .map(|t| t.content.len())
            .sum()
    }

    /// Source location of the token at `at`, for anchoring violations.
    ///
    /// An out-of-range index yields a zero line/column location rather
    /// than a panic.
    #[must_use]
    pub fn location(&self, at: usize) -> Location {
        match self.tokens.get(at) {
            Some(t) => Location::new(at, t.line, t.column),
            None => Location::new(at, 0, 0),
        }
    }
}
