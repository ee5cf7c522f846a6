/// Module that provides functions and types related to compiled lexer states.
pub(crate) mod compiled_state;
pub(crate) use compiled_state::{CompiledState, CompiledTransition, RuleMatch};

/// Module for several ID types.
mod ids;
pub(crate) use ids::{RuleID, StateID};

/// Module that provides functions and types related to lexer implementations.
pub(crate) mod lexer_impl;
pub(crate) use lexer_impl::LexerImpl;
