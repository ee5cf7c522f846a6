use rustc_hash::FxHashMap;

use crate::{LexerError, LexerErrorKind, LexerState, Result};

use super::{CompiledState, RuleMatch, StateID};

/// LexerImpl instances are always created by the LexerBuilder::build method.
/// The state with index 0 is the initial state.
#[derive(Clone, Debug)]
pub(crate) struct LexerImpl {
    pub(crate) states: Vec<CompiledState>,
}

impl LexerImpl {
    /// The initial state of every tokenization.
    pub(crate) const INITIAL_STATE: StateID = StateID::new(0);

    /// Returns the match of the first rule of the given state that matches at the given offset.
    #[inline]
    pub(crate) fn match_at(
        &self,
        state: StateID,
        haystack: &str,
        offset: usize,
    ) -> Option<RuleMatch<'_>> {
        self.states[state].match_at(haystack, offset)
    }

    pub(crate) fn state_name(&self, state: StateID) -> Option<&str> {
        self.states
            .get(state.as_usize())
            .map(|state| state.name.as_str())
    }
}

impl TryFrom<&[LexerState]> for LexerImpl {
    type Error = LexerError;
    fn try_from(states: &[LexerState]) -> Result<Self> {
        if states.is_empty() {
            return Err(LexerError::new(LexerErrorKind::NoStates));
        }
        let mut state_ids = FxHashMap::default();
        for (index, state) in states.iter().enumerate() {
            if state_ids
                .insert(state.name.as_str(), StateID::new(index))
                .is_some()
            {
                return Err(LexerError::new(LexerErrorKind::DuplicateState(
                    state.name.clone(),
                )));
            }
        }
        let resolve_state = |name: &str| state_ids.get(name).copied();
        let states = states
            .iter()
            .map(|state| CompiledState::try_from_lexer_state(state, resolve_state))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { states })
    }
}
