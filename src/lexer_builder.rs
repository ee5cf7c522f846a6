use log::debug;

use crate::{
    internal::LexerImpl, lexer::Lexer, lexer_state::LexerState, LexerInfo, Result,
};

/// A builder for creating a lexer.
///
/// The first state added becomes the initial state of the lexer.
#[derive(Debug, Clone, Default)]
pub struct LexerBuilder {
    states: Vec<LexerState>,
    info: LexerInfo,
}

impl LexerBuilder {
    /// Creates a new lexer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lexer state to the lexer builder.
    pub fn add_state(mut self, state: LexerState) -> Self {
        self.states.push(state);
        self
    }

    /// Adds multiple lexer states to the lexer builder.
    pub fn add_states(mut self, states: &[LexerState]) -> Self {
        self.states.extend_from_slice(states);
        self
    }

    /// Adds the lexer states of a JSON document, an array of states.
    #[cfg(feature = "serde")]
    pub fn add_states_from_json(mut self, json: &str) -> Result<Self> {
        let states: Vec<LexerState> = serde_json::from_str(json)?;
        self.states.extend(states);
        Ok(self)
    }

    /// Sets the registration data of the lexer.
    pub fn with_info(mut self, info: LexerInfo) -> Self {
        self.info = info;
        self
    }

    /// Builds the lexer from the lexer builder.
    pub fn build(self) -> Result<Lexer> {
        debug!(
            "Building lexer '{}' with {} states",
            self.info.name,
            self.states.len()
        );
        Ok(Lexer {
            inner: LexerImpl::try_from(self.states.as_slice())?,
            info: self.info,
        })
    }
}
