//! Module with the token type, the category a lexer assigns to a span of text.
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LexerError, LexerErrorKind};

/// The category of a token.
///
/// Token types form a dotted hierarchy, e.g. `Comment.Single` is a subtype of `Comment`. The
/// hierarchy is only relevant for consumers that style the tokens, the lexer treats the types as
/// opaque labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenType {
    /// The root of the hierarchy. Used for text that a rule matched but did not categorize.
    Token,
    /// Whitespace and other plain text.
    Text,
    /// A character no rule matched.
    Error,
    /// A keyword.
    Keyword,
    /// A built-in type name.
    #[cfg_attr(feature = "serde", serde(rename = "Keyword.Type"))]
    KeywordType,
    /// An identifier.
    Name,
    /// The name in a class or struct declaration.
    #[cfg_attr(feature = "serde", serde(rename = "Name.Class"))]
    NameClass,
    /// The name in a method declaration.
    #[cfg_attr(feature = "serde", serde(rename = "Name.Function"))]
    NameFunction,
    /// A namespace name.
    #[cfg_attr(feature = "serde", serde(rename = "Name.Namespace"))]
    NameNamespace,
    /// An attribute annotation.
    #[cfg_attr(feature = "serde", serde(rename = "Name.Attribute"))]
    NameAttribute,
    /// A string literal.
    String,
    /// A character literal.
    #[cfg_attr(feature = "serde", serde(rename = "String.Char"))]
    StringChar,
    /// A numeric literal.
    Number,
    /// A comment.
    Comment,
    /// A comment that ends at the end of the line.
    #[cfg_attr(feature = "serde", serde(rename = "Comment.Single"))]
    CommentSingle,
    /// A delimited comment that may span several lines.
    #[cfg_attr(feature = "serde", serde(rename = "Comment.Multiline"))]
    CommentMultiline,
    /// A preprocessor directive.
    #[cfg_attr(feature = "serde", serde(rename = "Comment.Preproc"))]
    CommentPreproc,
    /// An operator.
    Operator,
    /// Punctuation.
    Punctuation,
}

impl TokenType {
    /// All token types, parents before their subtypes.
    pub const ALL: [TokenType; 19] = [
        TokenType::Token,
        TokenType::Text,
        TokenType::Error,
        TokenType::Keyword,
        TokenType::KeywordType,
        TokenType::Name,
        TokenType::NameClass,
        TokenType::NameFunction,
        TokenType::NameNamespace,
        TokenType::NameAttribute,
        TokenType::String,
        TokenType::StringChar,
        TokenType::Number,
        TokenType::Comment,
        TokenType::CommentSingle,
        TokenType::CommentMultiline,
        TokenType::CommentPreproc,
        TokenType::Operator,
        TokenType::Punctuation,
    ];

    /// The dotted name of the token type, e.g. `Comment.Single`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Token => "Token",
            TokenType::Text => "Text",
            TokenType::Error => "Error",
            TokenType::Keyword => "Keyword",
            TokenType::KeywordType => "Keyword.Type",
            TokenType::Name => "Name",
            TokenType::NameClass => "Name.Class",
            TokenType::NameFunction => "Name.Function",
            TokenType::NameNamespace => "Name.Namespace",
            TokenType::NameAttribute => "Name.Attribute",
            TokenType::String => "String",
            TokenType::StringChar => "String.Char",
            TokenType::Number => "Number",
            TokenType::Comment => "Comment",
            TokenType::CommentSingle => "Comment.Single",
            TokenType::CommentMultiline => "Comment.Multiline",
            TokenType::CommentPreproc => "Comment.Preproc",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
        }
    }

    /// The parent in the hierarchy. `Token` has no parent.
    pub fn parent(&self) -> Option<TokenType> {
        match self {
            TokenType::Token => None,
            TokenType::KeywordType => Some(TokenType::Keyword),
            TokenType::NameClass
            | TokenType::NameFunction
            | TokenType::NameNamespace
            | TokenType::NameAttribute => Some(TokenType::Name),
            TokenType::StringChar => Some(TokenType::String),
            TokenType::CommentSingle | TokenType::CommentMultiline | TokenType::CommentPreproc => {
                Some(TokenType::Comment)
            }
            _ => Some(TokenType::Token),
        }
    }

    /// Check if this token type is `other` or one of its subtypes.
    pub fn is_subtype_of(&self, other: TokenType) -> bool {
        let mut current = Some(*self);
        while let Some(token_type) = current {
            if token_type == other {
                return true;
            }
            current = token_type.parent();
        }
        false
    }

    /// The short class name style sheets use for this token type, e.g. `c1` for
    /// `Comment.Single`. Plain text has an empty class.
    pub fn short_class(&self) -> &'static str {
        match self {
            TokenType::Token | TokenType::Text => "",
            TokenType::Error => "err",
            TokenType::Keyword => "k",
            TokenType::KeywordType => "kt",
            TokenType::Name => "n",
            TokenType::NameClass => "nc",
            TokenType::NameFunction => "nf",
            TokenType::NameNamespace => "nn",
            TokenType::NameAttribute => "na",
            TokenType::String => "s",
            TokenType::StringChar => "sc",
            TokenType::Number => "m",
            TokenType::Comment => "c",
            TokenType::CommentSingle => "c1",
            TokenType::CommentMultiline => "cm",
            TokenType::CommentPreproc => "cp",
            TokenType::Operator => "o",
            TokenType::Punctuation => "p",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = LexerError;

    /// Parses the dotted name. A leading `Token.` as in `Token.Comment.Single` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("Token.").unwrap_or(s);
        TokenType::ALL
            .iter()
            .find(|token_type| token_type.as_str() == name)
            .copied()
            .ok_or_else(|| LexerError::new(LexerErrorKind::UnknownTokenType(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for token_type in TokenType::ALL {
            assert_eq!(token_type.as_str().parse::<TokenType>().unwrap(), token_type);
        }
        assert_eq!(
            "Token.Comment.Single".parse::<TokenType>().unwrap(),
            TokenType::CommentSingle
        );
        assert!("Comment.Double".parse::<TokenType>().is_err());
    }

    #[test]
    fn test_hierarchy() {
        assert!(TokenType::CommentSingle.is_subtype_of(TokenType::Comment));
        assert!(TokenType::CommentSingle.is_subtype_of(TokenType::Token));
        assert!(TokenType::KeywordType.is_subtype_of(TokenType::Keyword));
        assert!(!TokenType::Keyword.is_subtype_of(TokenType::KeywordType));
        assert!(!TokenType::NameClass.is_subtype_of(TokenType::String));
        assert_eq!(TokenType::Token.parent(), None);
        assert_eq!(TokenType::Punctuation.parent(), Some(TokenType::Token));
    }

    #[test]
    fn test_short_class() {
        assert_eq!(TokenType::CommentSingle.short_class(), "c1");
        assert_eq!(TokenType::NameFunction.short_class(), "nf");
        assert_eq!(TokenType::Text.short_class(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        let serialized = serde_json::to_string(&TokenType::CommentPreproc).unwrap();
        assert_eq!(serialized, "\"Comment.Preproc\"");
        let deserialized: TokenType = serde_json::from_str("\"Name.Namespace\"").unwrap();
        assert_eq!(deserialized, TokenType::NameNamespace);
    }
}
