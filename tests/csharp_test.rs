// Properties of the C# lexer that must hold for any input.
// Run with `cargo test --test csharp_test`

use std::sync::LazyLock;

use csharp_lexer::{
    csharp, Lexer, LexerRegistry, Position, TokenIteratorExt, TokenType,
};

static LEXER: LazyLock<Lexer> = LazyLock::new(|| csharp::lexer().unwrap());

const INPUTS: &[&str] = &[
    "",
    "\n",
    "\t\t\n\n",
    "a\r\nb",
    "\"unterminated",
    "\"unterminated\nnext line",
    "/* unterminated",
    "'",
    "'ab'",
    "@\"",
    "$\"{x",
    "#",
    "#pragma",
    "class",
    "class ",
    "using",
    "using ",
    "namespace\n",
    "größe = 日本語;",
    "\u{0}\u{7f}",
    "😀 = 1;",
    "`~\\",
    "[",
    "[Attr",
    "public static",
    "public static void Main(",
    "0x 1.e5 .5",
    "a\\",
];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_tokens_cover_input() {
    init();
    for input in INPUTS {
        let tokens = LEXER.tokenize(input);
        let text: String = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(&text, input, "Tokens of {:?}: {:?}", input, tokens);
        let mut offset = 0;
        for token in &tokens {
            assert!(!token.is_empty(), "Empty token for {:?}", input);
            assert_eq!(token.start(), offset);
            offset = token.end();
        }
        // Every token consumes at least one character.
        assert!(tokens.len() <= input.chars().count());
    }
}

#[test]
fn test_tokenization_is_deterministic() {
    init();
    for input in INPUTS {
        assert_eq!(LEXER.tokenize(input), LEXER.tokenize(input));
    }
    let other = csharp::lexer().unwrap();
    for input in INPUTS {
        assert_eq!(LEXER.tokenize(input), other.tokenize(input));
    }
}

#[test]
fn test_unrecognized_characters() {
    init();
    let tokens = LEXER.tokenize("😀");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type(), TokenType::Error);
    assert_eq!(tokens[0].text(), "😀");

    let errors: Vec<&str> = LEXER
        .tokens("x ` y \u{0}")
        .filter(|t| t.token_type() == TokenType::Error)
        .map(|t| t.text())
        .collect();
    assert_eq!(errors, vec!["`", "\u{0}"]);
}

#[test]
fn test_line_endings() {
    init();
    let tokens: Vec<(TokenType, &str)> = LEXER
        .tokens("a\r\nb")
        .map(|t| (t.token_type(), t.text()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenType::Name, "a"),
            (TokenType::Text, "\r"),
            (TokenType::Text, "\n"),
            (TokenType::Name, "b"),
        ]
    );
}

#[test]
fn test_state_tracking() {
    init();
    let mut tokens = LEXER.tokens("using System;");
    assert_eq!(tokens.current_state(), "root");
    assert_eq!(tokens.state_depth(), 1);

    let token = tokens.next().unwrap();
    assert_eq!(token.text(), "using");
    assert_eq!(tokens.current_state(), "namespace");
    assert_eq!(tokens.state_depth(), 2);

    assert_eq!(tokens.next().unwrap().text(), " ");
    let token = tokens.next().unwrap();
    assert_eq!(token.token_type(), TokenType::NameNamespace);
    assert_eq!(tokens.current_state(), "root");
    assert_eq!(tokens.state_depth(), 1);

    assert_eq!(tokens.next().unwrap().text(), ";");
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
    assert_eq!(tokens.offset(), "using System;".len());
}

#[test]
fn test_using_statement_leaves_namespace_state() {
    init();
    let mut tokens = LEXER.tokens("using (x)");
    assert_eq!(tokens.next().unwrap().text(), "using");
    assert_eq!(tokens.current_state(), "namespace");
    assert_eq!(tokens.next().unwrap().text(), " ");
    let token = tokens.next().unwrap();
    assert_eq!(token.token_type(), TokenType::Punctuation);
    assert_eq!(token.text(), "(");
    assert_eq!(tokens.current_state(), "root");
}

#[test]
fn test_positions() {
    init();
    let tokens: Vec<(&str, Position, Position)> = LEXER
        .tokens("class Foo\n{\n}")
        .with_positions()
        .map(|t| (t.text(), t.start_position(), t.end_position()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            ("class", Position::new(1, 1), Position::new(1, 6)),
            (" ", Position::new(1, 6), Position::new(1, 7)),
            ("Foo", Position::new(1, 7), Position::new(1, 10)),
            ("\n", Position::new(1, 10), Position::new(2, 1)),
            ("{", Position::new(2, 1), Position::new(2, 2)),
            ("\n", Position::new(2, 2), Position::new(3, 1)),
            ("}", Position::new(3, 1), Position::new(3, 2)),
        ]
    );
}

#[test]
fn test_token_type_hierarchy() {
    init();
    let tokens = LEXER.tokenize("// c\n/* d */#if X\n");
    assert_eq!(tokens.len(), 3);
    assert!(tokens
        .iter()
        .all(|t| t.token_type().is_subtype_of(TokenType::Comment)));
    assert_eq!(tokens[0].token_type().short_class(), "c1");
    assert_eq!(tokens[1].token_type().short_class(), "cm");
    assert_eq!(tokens[2].token_type().short_class(), "cp");
}

#[test]
fn test_registry() {
    init();
    let registry = LexerRegistry::with_defaults().unwrap();
    assert_eq!(registry.len(), 1);
    for alias in ["csharp6", "c#6", "CSharp6"] {
        let lexer = registry.by_alias(alias).unwrap();
        assert_eq!(lexer.info().name, "C#6");
    }
    assert!(registry.by_alias("csharp").is_none());
    assert!(registry.for_filename("src/Program.cs").is_some());
    assert!(registry.for_filename(r"C:\src\Program.cs").is_some());
    assert!(registry.for_filename("Program.css").is_none());
    assert!(registry.for_mimetype("text/x-csharp6").is_some());
    assert!(registry.for_mimetype("text/plain").is_none());

    let lexer = registry.by_alias("c#6").unwrap();
    assert_eq!(lexer.tokenize("class A"), LEXER.tokenize("class A"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_tokens() {
    init();
    let tokens = LEXER.tokenize("int x");
    let json = serde_json::to_string(&tokens[0]).unwrap();
    assert!(json.contains(r#""Keyword.Type""#), "{}", json);
    assert!(json.contains(r#""int""#), "{}", json);
}
