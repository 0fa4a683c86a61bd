//! Token model for host-supplied lexical streams.

use serde::{Deserialize, Serialize};

/// The kind of a lexical token.
///
/// This is a closed set: the host's tokenizer maps whatever its source
/// language produces onto these kinds before handing the stream to the
/// linter. Rules dispatch on it with ordinary pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Class declaration keyword.
    Class,
    /// Interface declaration keyword.
    Interface,
    /// Trait declaration keyword.
    Trait,
    /// Named function or method declaration keyword.
    Function,
    /// Anonymous function construct.
    Closure,
    /// Constant declaration keyword.
    Const,
    /// Legacy field declaration keyword.
    Var,
    /// `public` visibility modifier.
    Public,
    /// `protected` visibility modifier.
    Protected,
    /// `private` visibility modifier.
    Private,
    /// `static` modifier.
    Static,
    /// `abstract` modifier.
    Abstract,
    /// `final` modifier.
    Final,
    /// Variable: a field or local, sigil and all when the host
    /// language uses one.
    Variable,
    /// Bare name: class names, method names, type names.
    Identifier,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Line or block comment.
    Comment,
    /// Documentation comment.
    DocComment,
    /// Whitespace run, including line breaks.
    Whitespace,
    /// `;`
    Semicolon,
    /// Anything the rules never inspect.
    Other,
}

/// One token of a source unit.
///
/// Tokens are immutable once built and addressed by their 0-based index
/// in the stream; index order is source order. The structural fields
/// (`scope_opener`, `scope_closer`, `parenthesis_closer`, `conditions`)
/// are resolved by the host's tokenizer and carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// Literal source text of this token.
    pub content: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Index of the `{` opening the body owned by this declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_opener: Option<usize>,
    /// Index of the matching `}` closing the owned body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_closer: Option<usize>,
    /// Index of the `)` closing this declaration's parameter list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parenthesis_closer: Option<usize>,
    /// Stack of enclosing constructs, outermost first: the index of each
    /// enclosing declaration token paired with its kind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<(usize, TokenKind)>,
}

impl Token {
    /// Creates a token with no structural annotations.
    #[must_use]
    pub fn new(kind: TokenKind, content: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            line,
            column,
            scope_opener: None,
            scope_closer: None,
            parenthesis_closer: None,
            conditions: Vec::new(),
        }
    }

    /// Attaches the body span owned by this declaration token.
    #[must_use]
    pub fn with_scope(mut self, opener: usize, closer: usize) -> Self {
        self.scope_opener = Some(opener);
        self.scope_closer = Some(closer);
        self
    }

    /// Attaches the closing parenthesis of this declaration's parameter list.
    #[must_use]
    pub fn with_parenthesis_closer(mut self, closer: usize) -> Self {
        self.parenthesis_closer = Some(closer);
        self
    }

    /// Pushes an enclosing construct onto this token's condition stack.
    #[must_use]
    pub fn with_condition(mut self, owner: usize, kind: TokenKind) -> Self {
        self.conditions.push((owner, kind));
        self
    }

    /// Whether this token's content is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
