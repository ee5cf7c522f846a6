#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Rule;

/// A lexer state that is used to tokenize specific parts of the input.
/// The contained rules are tried in the given order at the current position of the input. The
/// first rule that matches wins, regardless of the length of the matches of later rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LexerState {
    /// The name of the lexer state. Transitions refer to states by this name.
    pub name: String,
    /// The rules of this state in priority order.
    pub rules: Vec<Rule>,
}

impl LexerState {
    /// Creates a new lexer state with the given name and rules.
    pub fn new(name: &str, rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            rules,
        }
    }
}
