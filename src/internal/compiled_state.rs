use regex_automata::{meta::Regex, util::syntax, Anchored, Input};

use crate::{Action, LexerError, LexerErrorKind, LexerState, Result, Rule, Span};

use super::{RuleID, StateID};

/// A resolved state transition. Push transitions refer to states by index instead of by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompiledTransition {
    Push(StateID),
    Pop,
}

/// A compiled rule of a lexer state.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) id: RuleID,
    pub(crate) pattern: String,
    rx: Regex,
    pub(crate) action: Action,
    // The boolean value indicates if the lookahead is positive.
    lookahead: Option<(bool, Regex)>,
    pub(crate) transition: Option<CompiledTransition>,
}

/// The result of a successful match of a rule at a position of the input.
#[derive(Debug)]
pub(crate) struct RuleMatch<'r> {
    pub(crate) rule: &'r CompiledRule,
    pub(crate) span: Span,
    /// The spans of the capture groups, starting with group 1. Only filled for rules that emit
    /// tokens by groups.
    pub(crate) groups: Vec<Option<Span>>,
}

fn syntax_config() -> syntax::Config {
    syntax::Config::new()
        .multi_line(true)
        .dot_matches_new_line(true)
}

fn build_regex(pattern: &str) -> Result<Regex> {
    Regex::builder()
        .syntax(syntax_config())
        .build(pattern)
        .map_err(|e| LexerError::new(LexerErrorKind::RegexBuildError(e, pattern.to_string())))
}

/// Check if the pattern can match the empty string.
fn can_match_empty(pattern: &str) -> Result<bool> {
    let hir = regex_syntax::ParserBuilder::new()
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
        .parse(pattern)
        .map_err(|e| LexerError::new(LexerErrorKind::RegexSyntaxError(e, pattern.to_string())))?;
    Ok(hir.properties().minimum_len() == Some(0))
}

impl CompiledRule {
    /// Compile a rule. Push transitions are resolved with the given function.
    pub(crate) fn try_from_rule(
        id: RuleID,
        state_name: &str,
        rule: &Rule,
        resolve_state: impl Fn(&str) -> Option<StateID>,
    ) -> Result<Self> {
        let transition = match rule.transition() {
            Some(crate::Transition::Push(name)) => Some(CompiledTransition::Push(
                resolve_state(name)
                    .ok_or_else(|| LexerError::new(LexerErrorKind::UnknownState(name.clone())))?,
            )),
            Some(crate::Transition::Pop) => Some(CompiledTransition::Pop),
            None => None,
        };
        if transition.is_none() && can_match_empty(rule.pattern())? {
            return Err(LexerError::new(
                LexerErrorKind::EmptyMatchWithoutTransition {
                    state: state_name.to_string(),
                    pattern: rule.pattern().to_string(),
                },
            ));
        }
        let lookahead = match rule.lookahead() {
            Some(lookahead) => Some((lookahead.is_positive(), build_regex(lookahead.pattern())?)),
            None => None,
        };
        Ok(Self {
            id,
            pattern: rule.pattern().to_string(),
            rx: build_regex(rule.pattern())?,
            action: rule.action().clone(),
            lookahead,
            transition,
        })
    }

    /// Match the rule anchored at the given offset of the haystack.
    /// Assertions like `^` and `\b` see the whole haystack, not only the part after the offset.
    pub(crate) fn match_at(&self, haystack: &str, offset: usize) -> Option<RuleMatch<'_>> {
        let input = Input::new(haystack)
            .range(offset..)
            .anchored(Anchored::Yes);
        let (span, groups) = match &self.action {
            Action::Token(_) => (self.rx.search(&input)?.span(), Vec::new()),
            Action::ByGroups(_) => {
                let mut caps = self.rx.create_captures();
                self.rx.search_captures(&input, &mut caps);
                let matched = caps.get_match()?;
                let groups = (1..caps.group_len())
                    .map(|index| caps.get_group(index).map(Span::from))
                    .collect();
                (matched.span(), groups)
            }
        };
        if let Some((is_positive, rx)) = &self.lookahead {
            let input = Input::new(haystack)
                .range(span.end..)
                .anchored(Anchored::Yes);
            if rx.is_match(input) != *is_positive {
                return None;
            }
        }
        Some(RuleMatch {
            rule: self,
            span: span.into(),
            groups,
        })
    }
}

/// A compiled lexer state that can be used to tokenize a string.
#[derive(Debug, Clone)]
pub(crate) struct CompiledState {
    /// The name of the lexer state.
    pub(crate) name: String,
    /// The priorities of the rules are determined by their order in the vector. Lower indices
    /// have higher priority.
    pub(crate) rules: Vec<CompiledRule>,
}

impl CompiledState {
    /// Create a new compiled lexer state.
    pub(crate) fn try_from_lexer_state(
        state: &LexerState,
        resolve_state: impl Fn(&str) -> Option<StateID>,
    ) -> Result<Self> {
        let rules = state
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                CompiledRule::try_from_rule(index.into(), &state.name, rule, &resolve_state)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: state.name.clone(),
            rules,
        })
    }

    /// Returns the match of the first rule that matches at the given offset.
    pub(crate) fn match_at(&self, haystack: &str, offset: usize) -> Option<RuleMatch<'_>> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_at(haystack, offset))
    }
}
