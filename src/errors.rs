use thiserror::Error;

/// The result type for the `csharp_lexer` crate.
pub type Result<T> = std::result::Result<T, LexerError>;

/// The error type for the `csharp_lexer` crate.
#[derive(Error, Debug)]
pub struct LexerError {
    /// The source of the error.
    pub source: Box<LexerErrorKind>,
}

impl LexerError {
    /// Create a new `LexerError`.
    pub fn new(kind: LexerErrorKind) -> Self {
        LexerError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &LexerErrorKind {
        &self.source
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum LexerErrorKind {
    /// A rule pattern could not be compiled by the regex engine.
    #[error("'{1}' {0}")]
    RegexBuildError(regex_automata::meta::BuildError, String),

    /// A rule pattern could not be parsed while checking whether it can match the empty string.
    #[error("'{1}' {0}")]
    RegexSyntaxError(regex_syntax::Error, String),

    /// The lexer has no states.
    #[error("A lexer needs at least one state")]
    NoStates,

    /// A transition refers to a state that is not defined.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// Two states share the same name.
    #[error("Duplicate state: {0}")]
    DuplicateState(String),

    /// A rule can match the empty string but neither pushes nor pops a state, so the lexer would
    /// not make any progress.
    #[error("Rule '{pattern}' in state {state} can match the empty string without a transition")]
    EmptyMatchWithoutTransition {
        /// The name of the state that contains the rule.
        state: String,
        /// The pattern of the rule.
        pattern: String,
    },

    /// A token type name could not be parsed.
    #[error("Unknown token type: {0}")]
    UnknownTokenType(String),

    /// A lexer definition in JSON format could not be read.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    DefinitionError(#[from] serde_json::Error),
}

impl From<LexerErrorKind> for LexerError {
    fn from(kind: LexerErrorKind) -> Self {
        LexerError::new(kind)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for LexerError {
    fn from(error: serde_json::Error) -> Self {
        LexerError::new(LexerErrorKind::DefinitionError(error))
    }
}
