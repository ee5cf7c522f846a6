use crate::{internal::LexerImpl, internal::StateID, LexerInfo, Token, Tokens};

/// A Lexer.
/// It consists of a stack machine over lexer states. Each state holds an ordered list of rules
/// that are tried at the current position of the input. The first rule that matches produces the
/// tokens for the matched text and may push a new state or pop the current one.
///
/// The lexer itself is immutable. All scan state lives in the [`Tokens`] iterator, so one lexer
/// can tokenize any number of inputs, also from several threads at once.
///
/// To create a lexer, you can use the `LexerBuilder` to add lexer states. At least one lexer
/// state must be added to the lexer. The first state is the initial state, usually named `root`.
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(crate) inner: LexerImpl,
    pub(crate) info: LexerInfo,
}

impl Lexer {
    /// Returns a lazy iterator over the tokens of the input.
    /// The texts of the tokens, concatenated in order, are equal to the input.
    pub fn tokens<'l, 'h>(&'l self, input: &'h str) -> Tokens<'l, 'h> {
        Tokens::new(&self.inner, input)
    }

    /// Tokenizes the whole input.
    pub fn tokenize<'h>(&self, input: &'h str) -> Vec<Token<'h>> {
        self.tokens(input).collect()
    }

    /// The registration data of the lexer.
    pub fn info(&self) -> &LexerInfo {
        &self.info
    }

    /// Returns the name of the state with the given index.
    pub fn state_name(&self, index: usize) -> Option<&str> {
        self.inner.state_name(StateID::new(index))
    }

    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.inner.states.len()
    }
}
