use std::{cell::OnceCell, collections::VecDeque, iter::FusedIterator};

use log::{debug, trace};

use crate::{
    internal::{CompiledTransition, LexerImpl, RuleMatch, StateID},
    position::LineIndex,
    Action, GroupAction, Position, PositionProvider, Span, Token, TokenType,
};

/// The maximum number of consecutive matches of the empty string at the same offset.
/// Beyond this limit the current character is consumed as an error, which guarantees progress even
/// if states keep pushing each other without consuming input.
const MAX_ZERO_WIDTH_STEPS: usize = 16;

/// An iterator over the tokens of an input.
///
/// The iterator yields [`Token`] values whose texts, concatenated in order, reproduce the input.
///
/// * `'l` represents the lifetime of the lexer.
/// * `'h` represents the lifetime of the input being tokenized.
///
/// This iterator can be created with the [`crate::Lexer::tokens`] method. Every call creates a
/// new scan that starts in the initial state at the beginning of the input.
#[derive(Debug)]
pub struct Tokens<'l, 'h> {
    lexer: &'l LexerImpl,
    input: &'h str,
    // The byte offset of the next character to scan.
    offset: usize,
    // Never empty, the initial state is at the bottom.
    state_stack: Vec<StateID>,
    // Tokens of the last match that have not been returned yet.
    pending: VecDeque<Token<'h>>,
    zero_width_steps: usize,
    line_index: OnceCell<LineIndex>,
}

impl<'l, 'h> Tokens<'l, 'h> {
    /// Creates a new `Tokens` iterator.
    pub(crate) fn new(lexer: &'l LexerImpl, input: &'h str) -> Self {
        Self {
            lexer,
            input,
            offset: 0,
            state_stack: vec![LexerImpl::INITIAL_STATE],
            pending: VecDeque::new(),
            zero_width_steps: 0,
            line_index: OnceCell::new(),
        }
    }

    /// Retrieve the byte offset up to which the input has been scanned.
    /// Tokens up to this offset may still be pending.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the name of the current lexer state.
    pub fn current_state(&self) -> &'l str {
        self.lexer
            .state_name(self.current_state_id())
            .unwrap_or_default()
    }

    /// Returns the depth of the state stack. The initial state alone has depth 1.
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.state_stack.len()
    }

    #[inline]
    fn current_state_id(&self) -> StateID {
        self.state_stack
            .last()
            .copied()
            .unwrap_or(LexerImpl::INITIAL_STATE)
    }

    /// Returns the next token of the input.
    ///
    /// If the input is exhausted, `None` is returned.
    ///
    /// The function applies rules of the current state until a token is available. If no rule
    /// matches at the current offset, one character is consumed as an error token.
    pub fn next_token(&mut self) -> Option<Token<'h>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.offset >= self.input.len() {
                return None;
            }
            self.step();
        }
    }

    // Apply the first matching rule of the current state or recover from a failed match.
    fn step(&mut self) {
        if self.zero_width_steps >= MAX_ZERO_WIDTH_STEPS {
            debug!(
                "Too many empty matches at offset {} in state {}",
                self.offset,
                self.current_state()
            );
            self.recover();
            return;
        }
        let lexer = self.lexer;
        match lexer.match_at(self.current_state_id(), self.input, self.offset) {
            Some(matched) => {
                trace!(
                    "State {}: rule {} '{}' matched {}",
                    self.current_state(),
                    matched.rule.id,
                    matched.rule.pattern.escape_default(),
                    matched.span
                );
                self.emit(&matched);
                self.execute_transition(matched.rule.transition);
                if matched.span.is_empty() {
                    self.zero_width_steps += 1;
                } else {
                    self.zero_width_steps = 0;
                }
                self.offset = matched.span.end;
            }
            None => self.recover(),
        }
    }

    // Consume one character. A newline resets the state stack and is plain text, any other
    // character is an error.
    fn recover(&mut self) {
        let Some(c) = self.input[self.offset..].chars().next() else {
            return;
        };
        let span = Span::new(self.offset, self.offset + c.len_utf8());
        if c == '\n' {
            trace!("Unmatched newline at {}, resetting state stack", self.offset);
            self.state_stack.truncate(1);
            self.push_token(TokenType::Text, span);
        } else {
            debug!(
                "No rule matched {:?} at offset {} in state {}",
                c,
                self.offset,
                self.current_state()
            );
            self.push_token(TokenType::Error, span);
        }
        self.offset = span.end;
        self.zero_width_steps = 0;
    }

    fn emit(&mut self, matched: &RuleMatch<'l>) {
        match &matched.rule.action {
            Action::Token(token_type) => self.push_token(*token_type, matched.span),
            Action::ByGroups(actions) => {
                let mut covered = matched.span.start;
                for (action, group) in actions.iter().zip(matched.groups.iter()) {
                    let Some(group) = group else {
                        continue;
                    };
                    // Empty groups and groups nested in an already emitted group are skipped.
                    if group.is_empty() || group.start < covered {
                        continue;
                    }
                    self.push_token(TokenType::Token, Span::new(covered, group.start));
                    match action {
                        GroupAction::Token(token_type) => self.push_token(*token_type, *group),
                        GroupAction::UsingThis => self.push_nested(*group),
                        GroupAction::Skip => self.push_token(TokenType::Token, *group),
                    }
                    covered = group.end;
                }
                self.push_token(TokenType::Token, Span::new(covered, matched.span.end));
            }
        }
    }

    // Tokenize the text of the span with a fresh scan of the same lexer.
    fn push_nested(&mut self, span: Span) {
        let input: &'h str = self.input;
        trace!("Tokenizing {:?} in a nested scan", &input[span.range()]);
        let nested = Tokens::new(self.lexer, &input[span.range()]);
        self.pending
            .extend(nested.map(|token| token.with_offset(span.start)));
    }

    #[inline]
    fn push_token(&mut self, token_type: TokenType, span: Span) {
        if span.is_empty() {
            return;
        }
        let input: &'h str = self.input;
        self.pending
            .push_back(Token::new(token_type, span, &input[span.range()]));
    }

    fn execute_transition(&mut self, transition: Option<CompiledTransition>) {
        match transition {
            Some(CompiledTransition::Push(state)) => {
                self.state_stack.push(state);
                trace!("Push state {}", self.current_state());
            }
            Some(CompiledTransition::Pop) => {
                if self.state_stack.len() > 1 {
                    self.state_stack.pop();
                    trace!("Pop to state {}", self.current_state());
                } else {
                    trace!("Ignoring pop of the initial state");
                }
            }
            None => (),
        }
    }
}

impl<'h> Iterator for Tokens<'_, 'h> {
    type Item = Token<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Tokens<'_, '_> {}

impl PositionProvider for Tokens<'_, '_> {
    /// Returns the line and column numbers of the given offset.
    /// If the offset is greater than the length of the input, the position of the end of the
    /// input is returned.
    fn position(&self, offset: usize) -> Position {
        self.line_index
            .get_or_init(|| LineIndex::new(self.input))
            .position(self.input, offset)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;
    use crate::{Lexer, LexerBuilder, LexerState, Lookahead, Rule, TokenIteratorExt, Transition};

    static LEXER: LazyLock<Lexer> = LazyLock::new(|| {
        LexerBuilder::new()
            .add_states(&[
                LexerState::new(
                    "root",
                    vec![
                        Rule::new(r"[ \t]+", TokenType::Text),
                        Rule::new(r"\n", TokenType::Text),
                        Rule::by_groups(
                            r"(def)(\s+)",
                            &[
                                GroupAction::Token(TokenType::Keyword),
                                GroupAction::Token(TokenType::Text),
                            ],
                        )
                        .with_transition(Transition::Push("name".to_string())),
                        Rule::by_groups(
                            r"(\w+)(=)(\w+)",
                            &[
                                GroupAction::Token(TokenType::Name),
                                GroupAction::Skip,
                                GroupAction::UsingThis,
                            ],
                        ),
                        Rule::new(r"[0-9]+", TokenType::Number),
                        Rule::new(r"def", TokenType::Keyword),
                        Rule::new(r"[a-z]+", TokenType::Name),
                    ],
                ),
                LexerState::new(
                    "name",
                    vec![
                        Rule::new("", TokenType::Text)
                            .with_lookahead(Lookahead::positive(r"\("))
                            .with_transition(Transition::Pop),
                        Rule::new(r"[a-z]+", TokenType::NameFunction)
                            .with_transition(Transition::Pop),
                    ],
                ),
            ])
            .build()
            .unwrap()
    });

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tokens(input: &str) -> Vec<(TokenType, &str)> {
        LEXER
            .tokens(input)
            .map(|t| (t.token_type(), t.text()))
            .collect()
    }

    #[test]
    fn test_push_and_pop() {
        init();
        assert_eq!(
            tokens("def foo"),
            vec![
                (TokenType::Keyword, "def"),
                (TokenType::Text, " "),
                (TokenType::NameFunction, "foo"),
            ]
        );
    }

    #[test]
    fn test_zero_width_pop() {
        init();
        assert_eq!(
            tokens("def (x"),
            vec![
                (TokenType::Keyword, "def"),
                (TokenType::Text, " "),
                (TokenType::Error, "("),
                (TokenType::Name, "x"),
            ]
        );
    }

    #[test]
    fn test_groups_and_nested_scan() {
        init();
        let tokens: Vec<Token> = LEXER.tokens("ab=12").collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Name, Span::new(0, 2), "ab"),
                Token::new(TokenType::Token, Span::new(2, 3), "="),
                Token::new(TokenType::Number, Span::new(3, 5), "12"),
            ]
        );
    }

    #[test]
    fn test_state_stack() {
        init();
        let mut iter = LEXER.tokens("def \n\nfoo");
        assert_eq!(iter.next().map(|t| t.text()), Some("def"));
        // The whitespace after the keyword includes both newlines.
        assert_eq!(iter.next().map(|t| t.text()), Some(" \n\n"));
        assert_eq!(iter.current_state(), "name");
        assert_eq!(
            iter.next().map(|t| t.token_type()),
            Some(TokenType::NameFunction)
        );
        assert_eq!(iter.current_state(), "root");
    }

    #[test]
    fn test_unmatched_newline_resets_state() {
        init();
        let mut iter = LEXER.tokens("def 1\nfoo");
        let collected: Vec<(TokenType, &str)> = iter
            .by_ref()
            .map(|t| (t.token_type(), t.text()))
            .collect();
        assert_eq!(
            collected,
            vec![
                (TokenType::Keyword, "def"),
                (TokenType::Text, " "),
                (TokenType::Error, "1"),
                (TokenType::Text, "\n"),
                (TokenType::Name, "foo"),
            ]
        );
        assert_eq!(iter.state_depth(), 1);
    }

    #[test]
    fn test_error_consumes_one_character() {
        init();
        assert_eq!(
            tokens("a€b"),
            vec![
                (TokenType::Name, "a"),
                (TokenType::Error, "€"),
                (TokenType::Name, "b"),
            ]
        );
    }

    #[test]
    fn test_zero_width_loop_terminates() {
        init();
        let lexer = LexerBuilder::new()
            .add_states(&[
                LexerState::new(
                    "a",
                    vec![Rule::default_transition(Transition::Push("b".to_string()))],
                ),
                LexerState::new(
                    "b",
                    vec![Rule::default_transition(Transition::Push("a".to_string()))],
                ),
            ])
            .build()
            .unwrap();
        let tokens: Vec<(TokenType, &str)> = lexer
            .tokens("xy")
            .map(|t| (t.token_type(), t.text()))
            .collect();
        assert_eq!(tokens, vec![(TokenType::Error, "x"), (TokenType::Error, "y")]);
    }

    #[test]
    fn test_positions() {
        init();
        let tokens: Vec<_> = LEXER.tokens("def\n  foo").with_positions().collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(), "\n  ");
        assert_eq!(tokens[1].start_position(), Position::new(1, 4));
        assert_eq!(tokens[2].text(), "foo");
        assert_eq!(tokens[2].start_position(), Position::new(2, 3));
        assert_eq!(tokens[2].end_position(), Position::new(2, 6));
    }
}
