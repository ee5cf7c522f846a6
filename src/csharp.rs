//! The C# 6 lexer.
//!
//! The lexer has three states:
//! * `root` tokenizes source code,
//! * `class` expects the name of a class or struct after the keyword,
//! * `namespace` expects a dotted name after `namespace` or `using`. If `using` is followed by
//!   `(` it starts a resource acquisition statement, the state is left without consuming input.
//!
//! ```rust
//! use csharp_lexer::{csharp, TokenType};
//!
//! let lexer = csharp::lexer().expect("C# lexer");
//! let types: Vec<TokenType> = lexer
//!     .tokens("class Foo {")
//!     .map(|t| t.token_type())
//!     .collect();
//! assert_eq!(
//!     types,
//!     [
//!         TokenType::Keyword,
//!         TokenType::Text,
//!         TokenType::NameClass,
//!         TokenType::Text,
//!         TokenType::Punctuation
//!     ]
//! );
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    GroupAction, Lexer, LexerBuilder, LexerInfo, LexerState, Lookahead, Result, Rule, TokenType,
    Transition,
};

/// The keywords, including contextual and query keywords.
/// `class`, `struct`, `namespace` and `using` are handled by their own rules.
const KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "async",
    "await",
    "base",
    "break",
    "by",
    "case",
    "catch",
    "checked",
    "const",
    "continue",
    "default",
    "delegate",
    "do",
    "else",
    "enum",
    "event",
    "explicit",
    "extern",
    "false",
    "finally",
    "fixed",
    "for",
    "foreach",
    "goto",
    "if",
    "implicit",
    "in",
    "interface",
    "internal",
    "is",
    "let",
    "lock",
    "nameof",
    "new",
    "null",
    "on",
    "operator",
    "out",
    "override",
    "params",
    "private",
    "protected",
    "public",
    "readonly",
    "ref",
    "return",
    "sealed",
    "sizeof",
    "stackalloc",
    "static",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "unchecked",
    "unsafe",
    "virtual",
    "void",
    "when",
    "while",
    "get",
    "set",
    "partial",
    "yield",
    "add",
    "remove",
    "value",
    "alias",
    "ascending",
    "descending",
    "from",
    "group",
    "into",
    "orderby",
    "select",
    "thenby",
    "where",
    "join",
    "equals",
];

/// The built-in type names.
const TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "dynamic", "float", "int", "long", "object",
    "sbyte", "short", "string", "uint", "ulong", "ushort", "var",
];

/// The preprocessor directives.
const DIRECTIVES: &[&str] = &[
    "if",
    "endif",
    "else",
    "elif",
    "define",
    "undef",
    "line",
    "error",
    "warning",
    "region",
    "endregion",
    "pragma",
    "nullable",
];

/// The maximum number of words before the method name in a signature.
const SIGNATURE_WORDS: usize = 16;

/// Selects the characters identifiers may consist of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnicodeLevel {
    /// ASCII letters, digits and underscores only.
    None,
    /// Unicode letters without letter numbers.
    Basic,
    /// The identifier grammar of the language: letters and letter numbers, followed by letters,
    /// letter numbers, decimal digits, connectors, formatting characters and combining marks.
    #[default]
    Full,
}

impl UnicodeLevel {
    /// The identifier pattern, including an optional leading `@`.
    pub fn identifier(&self) -> &'static str {
        match self {
            UnicodeLevel::None => r"@?[_a-zA-Z][_a-zA-Z0-9]*",
            UnicodeLevel::Basic => {
                r"@?[_\p{Lu}\p{Ll}\p{Lt}\p{Lm}][\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nd}\p{Pc}\p{Cf}\p{Mn}\p{Mc}]*"
            }
            UnicodeLevel::Full => {
                r"@?[_\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nl}][\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nl}\p{Nd}\p{Pc}\p{Cf}\p{Mn}\p{Mc}]*"
            }
        }
    }

    /// The class of the characters that may continue an identifier.
    pub fn continuation(&self) -> &'static str {
        match self {
            UnicodeLevel::None => r"[_a-zA-Z0-9]",
            UnicodeLevel::Basic => r"[_\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nd}\p{Pc}\p{Cf}\p{Mn}\p{Mc}]",
            UnicodeLevel::Full => {
                r"[_\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nl}\p{Nd}\p{Pc}\p{Cf}\p{Mn}\p{Mc}]"
            }
        }
    }
}

// Longest words first. The lookahead that ends a word is checked after the match, so a shorter
// alternative must not shadow a longer word.
fn word_alternation(words: &[&str]) -> String {
    let mut words = words.to_vec();
    words.sort_by_key(|word| std::cmp::Reverse(word.len()));
    words.join("|")
}

/// The registration data of the C# 6 lexer.
pub fn info() -> LexerInfo {
    LexerInfo::new("C#6", &["csharp6", "c#6"], &["*.cs"], &["text/x-csharp6"])
}

/// The states of the C# 6 lexer for the given unicode level.
pub fn states(unicode_level: UnicodeLevel) -> Vec<LexerState> {
    let id = unicode_level.identifier();
    let word_end = Lookahead::negative(unicode_level.continuation());
    let root = vec![
        // Method signature: return type and modifiers, method name, opening parenthesis.
        Rule::by_groups(
            &format!(r"^([ \t]*(?:{id}(?:\[\])?\s+){{1,{SIGNATURE_WORDS}}}?)({id})(\s*)(\()"),
            &[
                GroupAction::UsingThis,
                GroupAction::Token(TokenType::NameFunction),
                GroupAction::Token(TokenType::Text),
                GroupAction::Token(TokenType::Punctuation),
            ],
        ),
        Rule::new(r"^\s*\[.*?\]", TokenType::NameAttribute),
        Rule::new(r"[^\S\n]+", TokenType::Text),
        Rule::new(r"\\\n", TokenType::Text),
        Rule::new(r"//[^\n]*\n?", TokenType::CommentSingle),
        Rule::new(r"/\*.*?\*/", TokenType::CommentMultiline),
        Rule::new(r"\n", TokenType::Text),
        Rule::new(r"[~!%^&*()+=|\[\]:;,.<>/?-]", TokenType::Punctuation),
        Rule::new(r"[{}]", TokenType::Punctuation),
        Rule::new(r#"(?:@\$?|\$@)"(?:""|[^"])*""#, TokenType::String),
        Rule::new(r#"\$?"(?:\\\\|\\"|[^"\n])*["\n]"#, TokenType::String),
        Rule::new(
            r"'\\(?:u[0-9a-fA-F]{4}|x[0-9a-fA-F]{1,4}|.)'|'[^\\']'",
            TokenType::StringChar,
        ),
        Rule::new(
            r"0[xX][0-9a-fA-F]+[uUlL]*|[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?[fFdDmMuUlL]?",
            TokenType::Number,
        ),
        Rule::new(
            &format!(r"#[ \t]*(?:{})\b[^\n]*\n?", DIRECTIVES.join("|")),
            TokenType::CommentPreproc,
        ),
        Rule::by_groups(
            r"(extern)(\s+)(alias)",
            &[
                GroupAction::Token(TokenType::Keyword),
                GroupAction::Token(TokenType::Text),
                GroupAction::Token(TokenType::Keyword),
            ],
        )
        .with_lookahead(word_end.clone()),
        Rule::new(
            &format!(r"(?:{})", word_alternation(KEYWORDS)),
            TokenType::Keyword,
        )
        .with_lookahead(word_end.clone()),
        Rule::by_groups(
            r"(global)(::)",
            &[
                GroupAction::Token(TokenType::Keyword),
                GroupAction::Token(TokenType::Punctuation),
            ],
        ),
        // A nullable type ends with `?`, otherwise the name must end at a word boundary.
        Rule::new(
            &format!(r"(?:{})\?", word_alternation(TYPES)),
            TokenType::KeywordType,
        ),
        Rule::new(
            &format!(r"(?:{})", word_alternation(TYPES)),
            TokenType::KeywordType,
        )
        .with_lookahead(word_end),
        Rule::by_groups(
            r"(class|struct)(\s+)",
            &[
                GroupAction::Token(TokenType::Keyword),
                GroupAction::Token(TokenType::Text),
            ],
        )
        .with_transition(Transition::Push("class".to_string())),
        Rule::by_groups(
            r"(namespace|using)(\s+)",
            &[
                GroupAction::Token(TokenType::Keyword),
                GroupAction::Token(TokenType::Text),
            ],
        )
        .with_transition(Transition::Push("namespace".to_string())),
        Rule::new(id, TokenType::Name),
    ];
    let class = vec![
        Rule::new(id, TokenType::NameClass).with_transition(Transition::Pop),
        Rule::default_transition(Transition::Pop),
    ];
    let namespace = vec![
        // `using (` starts a using statement, not a using directive.
        Rule::default_transition(Transition::Pop).with_lookahead(Lookahead::positive(r"\(")),
        Rule::new(&format!(r"(?:{id}|\.)+"), TokenType::NameNamespace)
            .with_transition(Transition::Pop),
    ];
    vec![
        LexerState::new("root", root),
        LexerState::new("class", class),
        LexerState::new("namespace", namespace),
    ]
}

/// Creates the C# 6 lexer with full unicode identifiers.
pub fn lexer() -> Result<Lexer> {
    lexer_with_unicode_level(UnicodeLevel::default())
}

/// Creates the C# 6 lexer with the given unicode level.
pub fn lexer_with_unicode_level(unicode_level: UnicodeLevel) -> Result<Lexer> {
    LexerBuilder::new()
        .add_states(&states(unicode_level))
        .with_info(info())
        .build()
}
