#![forbid(missing_docs)]
//! # `csharp_lexer`
//! The `csharp_lexer` crate provides a lexer for C# 6 source code that is used to highlight code
//! listings in rendered documentation.
//! It classifies every part of the input, keywords, names, literals, comments and punctuation,
//! with a [TokenType]. It does not build a syntax tree and does not report syntax errors. Text that
//! no rule accepts is returned as [TokenType::Error] and scanning continues.
//!
//! The lexer is driven by tables of regular expressions. A table is a list of lexer states, each
//! holding an ordered list of rules. At every position of the input the first rule of the current
//! state that matches is applied. A rule emits tokens for its match and may push a new state or
//! return to the enclosing one.
//! To compile the regular expressions, the crate uses the `regex-automata` crate.
//!
//! # Example
//! ```rust
//! use csharp_lexer::csharp;
//!
//! const INPUT: &str = r#"using System;
//! // Entry point
//! public static void Main(string[] args)
//! {
//!     Console.WriteLine("Hello");
//! }
//! "#;
//!
//! fn main() {
//!     let lexer = csharp::lexer().expect("C# lexer");
//!     for token in lexer.tokens(INPUT) {
//!         println!("{:?}: {:?}", token.token_type(), token.text());
//!     }
//! }
//! ```
//! The beginning of the output of the example is:
//! ```text
//! Keyword: "using"
//! Text: " "
//! NameNamespace: "System"
//! Punctuation: ";"
//! Text: "\n"
//! CommentSingle: "// Entry point\n"
//! Keyword: "public"
//! Text: " "
//! Keyword: "static"
//! Text: " "
//! Keyword: "void"
//! Text: " "
//! NameFunction: "Main"
//! Punctuation: "("
//! ```
//!
//! # Custom lexers
//! Other rule tables can be built with the [LexerBuilder], either from [LexerState] values or, with
//! the `serde` feature, from a JSON document.
//!
//! # Crate features
//! - `serde`: Enabled by default. Rule tables, token types, spans, positions and tokens implement
//!   the `serde` traits and rule tables can be read from JSON.

/// Module with the C# 6 lexer.
pub mod csharp;

/// Module with error definitions
mod errors;
pub use errors::{LexerError, LexerErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// The module with the lexer.
mod lexer;
pub use lexer::Lexer;

/// The module with the lexer builder.
mod lexer_builder;
pub use lexer_builder::LexerBuilder;

/// The module with the lexer state.
mod lexer_state;
pub use lexer_state::LexerState;

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// Module with the registration data of lexers
mod registration;
pub use registration::{LexerInfo, LexerRegistry};

/// Module that provides the rule types
mod rule;
pub use rule::{Action, GroupAction, Lookahead, Rule, Transition};

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides the Token and PositionedToken types
mod token;
pub use token::{PositionedToken, Token};

/// Module that provides the TokenType type
mod token_type;
pub use token_type::TokenType;

/// Module that provides the Tokens iterator
mod tokens;
pub use tokens::Tokens;

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::{TokenIteratorExt, WithPositions};
