#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Position, Span, TokenType};

/// A token of the lexed input.
/// The token borrows its text from the input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'h> {
    /// The category of the token.
    token_type: TokenType,
    /// The span of the token in the input.
    span: Span,
    /// The text of the token.
    text: &'h str,
}

impl<'h> Token<'h> {
    /// Create a new token.
    pub fn new(token_type: TokenType, span: Span, text: &'h str) -> Self {
        debug_assert_eq!(span.len(), text.len());
        Self {
            token_type,
            span,
            text,
        }
    }

    /// Get the token type.
    #[inline]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Get the text of the token.
    #[inline]
    pub fn text(&self) -> &'h str {
        self.text
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Move the token by the given number of bytes.
    #[inline]
    pub(crate) fn with_offset(self, offset: usize) -> Self {
        Self {
            span: self.span.offset(offset),
            ..self
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?})@{}",
            self.token_type, self.text, self.span
        )
    }
}

/// A token with start and end positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionedToken<'h> {
    /// The underlying token.
    token: Token<'h>,
    /// The position of the start of the token.
    start_position: Position,
    /// The position of the end of the token.
    /// The end position is exclusive.
    end_position: Position,
}

impl<'h> PositionedToken<'h> {
    pub(crate) fn new(token: Token<'h>, start_position: Position, end_position: Position) -> Self {
        Self {
            token,
            start_position,
            end_position,
        }
    }

    /// Get the underlying token.
    #[inline]
    pub fn token(&self) -> Token<'h> {
        self.token
    }

    /// Get the token type.
    #[inline]
    pub fn token_type(&self) -> TokenType {
        self.token.token_type()
    }

    /// Get the text of the token.
    #[inline]
    pub fn text(&self) -> &'h str {
        self.token.text()
    }

    /// Get the position of the start of the token.
    #[inline]
    pub fn start_position(&self) -> Position {
        self.start_position
    }

    /// Get the position of the end of the token.
    #[inline]
    pub fn end_position(&self) -> Position {
        self.end_position
    }
}
