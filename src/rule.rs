//! Module with the rule types and their methods.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TokenType;

/// A lookahead is used to restrict a match in the input.
/// The lookahead is a regular expression whose condition must be met after the pattern itself for
/// it to be considered a match.
/// The lookahead can be positive or negative.
///
/// If the lookahead is positive, it must match for the rule to be considered a match.
/// If the lookahead is negative, it must not match for the rule to be considered a match.
/// The characters read by the lookahead are not included in the match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lookahead {
    /// If the lookahead is positive.
    pub is_positive: bool,
    /// The lookahead pattern.
    pub pattern: String,
}

impl Lookahead {
    /// Create a new lookahead.
    pub fn new(is_positive: bool, pattern: &str) -> Self {
        Self {
            is_positive,
            pattern: pattern.to_string(),
        }
    }

    /// Create a positive lookahead.
    pub fn positive(pattern: &str) -> Self {
        Self::new(true, pattern)
    }

    /// Create a negative lookahead.
    pub fn negative(pattern: &str) -> Self {
        Self::new(false, pattern)
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the lookahead is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_positive
    }
}

impl std::fmt::Display for Lookahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_positive {
            write!(f, "(?={})", self.pattern.escape_default())
        } else {
            write!(f, "(?!{})", self.pattern.escape_default())
        }
    }
}

/// What a rule does with the capture group at the same position, starting with group 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupAction {
    /// Emit the text of the group with this token type.
    Token(TokenType),
    /// Tokenize the text of the group again with the whole lexer, starting in its first state.
    UsingThis,
    /// The group has no token type of its own. Its text is emitted as [TokenType::Token].
    Skip,
}

/// The tokens a rule emits for its match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Emit the whole match as one token.
    Token(TokenType),
    /// Emit one token per capture group.
    /// Text of the match that is not covered by a group is emitted as [TokenType::Token].
    ByGroups(Vec<GroupAction>),
}

/// A change of the state stack after a rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transition {
    /// Enter the state with the given name.
    Push(String),
    /// Return to the enclosing state. The first state is never popped.
    Pop,
}

/// A rule of a lexer state.
/// The rule consists of a regular expression, the action that creates the tokens for a match and
/// optionally a lookahead and a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pattern: String,
    action: Action,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    lookahead: Option<Lookahead>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    transition: Option<Transition>,
}

impl Rule {
    /// Create a rule that emits the whole match with the given token type.
    pub fn new(pattern: &str, token_type: TokenType) -> Self {
        Self {
            pattern: pattern.to_string(),
            action: Action::Token(token_type),
            lookahead: None,
            transition: None,
        }
    }

    /// Create a rule that emits one token per capture group.
    pub fn by_groups(pattern: &str, groups: &[GroupAction]) -> Self {
        Self {
            pattern: pattern.to_string(),
            action: Action::ByGroups(groups.to_vec()),
            lookahead: None,
            transition: None,
        }
    }

    /// Create a rule that matches the empty string and only changes the state stack.
    pub fn default_transition(transition: Transition) -> Self {
        Self::new("", TokenType::Text).with_transition(transition)
    }

    /// Add a lookahead to the rule.
    pub fn with_lookahead(self, lookahead: Lookahead) -> Self {
        Self {
            lookahead: Some(lookahead),
            ..self
        }
    }

    /// Add a state transition to the rule.
    pub fn with_transition(self, transition: Transition) -> Self {
        Self {
            transition: Some(transition),
            ..self
        }
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the action.
    #[inline]
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Get the lookahead.
    #[inline]
    pub fn lookahead(&self) -> Option<&Lookahead> {
        self.lookahead.as_ref()
    }

    /// Get the transition.
    #[inline]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern.escape_default())?;
        if let Some(lookahead) = &self.lookahead {
            write!(f, "{}", lookahead)?
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = Rule::new("", TokenType::Text)
            .with_lookahead(Lookahead::positive(r"\("))
            .with_transition(Transition::Pop);
        assert_eq!(format!("{}", rule), r"(?=\\()");
        assert_eq!(rule.transition(), Some(&Transition::Pop));
        let rule = Rule::new("a\n", TokenType::Name).with_lookahead(Lookahead::negative("b"));
        assert_eq!(format!("{}", rule), r"a\n(?!b)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rule_serialization() {
        let rule = Rule::by_groups(
            r"(class)(\s+)",
            &[
                GroupAction::Token(TokenType::Keyword),
                GroupAction::Token(TokenType::Text),
            ],
        )
        .with_transition(Transition::Push("class".to_string()));
        let serialized = serde_json::to_string(&rule).unwrap();
        let deserialized: Rule = serde_json::from_str(&serialized).unwrap();
        assert_eq!(rule, deserialized);

        let rule: Rule =
            serde_json::from_str(r#"{"pattern": "[0-9]+", "action": {"Token": "Number"}}"#)
                .unwrap();
        assert_eq!(rule, Rule::new("[0-9]+", TokenType::Number));
    }
}
