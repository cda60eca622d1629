//! End-to-end scans over a source built from every token kind.

use pretty_assertions::assert_eq;
use zo_scanner::Scanner;
use zo_source::{FileSet, Position};
use zo_token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Special,
    Literal,
    Operator,
}

fn class_of(tok: Token) -> Class {
    if tok.is_literal() {
        Class::Literal
    } else if tok.is_operator() {
        Class::Operator
    } else {
        Class::Special
    }
}

const TOKENS: &[(Token, &str, Class)] = &[
    (Token::Comment, "/* a comment */", Class::Special),
    (Token::Comment, "// a comment \n", Class::Special),
    (Token::Comment, "/*\r*/", Class::Special),
    (Token::Comment, "//\r\n", Class::Special),
    (Token::Ident, "foobar", Class::Literal),
    (Token::Ident, "a۰۱۸", Class::Literal),
    (Token::Ident, "foo६४", Class::Literal),
    (Token::Ident, "bar９８７６", Class::Literal),
    (Token::Ident, "ŝ", Class::Literal),
    (Token::Ident, "ŝfoo", Class::Literal),
    (Token::Bool, "true", Class::Literal),
    (Token::Bool, "false", Class::Literal),
    (Token::Int, "0", Class::Literal),
    (Token::Int, "1", Class::Literal),
    (Token::Int, "123456789012345678890", Class::Literal),
    (Token::Int, "01234567", Class::Literal),
    (Token::Int, "0xcafebabe", Class::Literal),
    (Token::Float, "0.", Class::Literal),
    (Token::Float, ".0", Class::Literal),
    (Token::Float, "3.14159265", Class::Literal),
    (Token::Float, "1e0", Class::Literal),
    (Token::Float, "1e+100", Class::Literal),
    (Token::Float, "1e-100", Class::Literal),
    (Token::Float, "2.71828e-1000", Class::Literal),
    (Token::String, "\"\"", Class::Literal),
    (Token::String, "\"a\"", Class::Literal),
    (Token::String, "\"foobar\"", Class::Literal),
    (Token::String, "\"${v}\"", Class::Literal),
    (Token::String, "\"foo${v}bar\"", Class::Literal),
    (Token::RawString, "''", Class::Literal),
    (Token::RawString, "'a'", Class::Literal),
    (Token::RawString, "'foobar'", Class::Literal),
    (Token::RawString, "'${v}'", Class::Literal),
    (Token::RawString, "'foo${v}bar'", Class::Literal),
    (Token::Add, "+", Class::Operator),
    (Token::Sub, "-", Class::Operator),
    (Token::Mul, "*", Class::Operator),
    (Token::Quo, "/", Class::Operator),
    (Token::Rem, "%", Class::Operator),
    (Token::And, "&&", Class::Operator),
    (Token::Or, "||", Class::Operator),
    (Token::Eql, "==", Class::Operator),
    (Token::Lss, "<", Class::Operator),
    (Token::Gtr, ">", Class::Operator),
    (Token::Assign, "=", Class::Operator),
    (Token::Not, "!", Class::Operator),
    (Token::Neq, "!=", Class::Operator),
    (Token::Leq, "<=", Class::Operator),
    (Token::Geq, ">=", Class::Operator),
    (Token::LParen, "(", Class::Operator),
    (Token::LBrack, "[", Class::Operator),
    (Token::LBrace, "{", Class::Operator),
    (Token::Comma, ",", Class::Operator),
    (Token::Period, ".", Class::Operator),
    (Token::RParen, ")", Class::Operator),
    (Token::RBrack, "]", Class::Operator),
    (Token::RBrace, "}", Class::Operator),
    (Token::Colon, ":", Class::Operator),
];

const WHITESPACE: &str = "  \t  \n\n\n";

fn source() -> String {
    TOKENS
        .iter()
        .flat_map(|(_, lit, _)| [*lit, WHITESPACE])
        .collect()
}

fn newline_count(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}

/// The literal a scan should produce for a token written as `text`.
fn expected_literal(tok: Token, text: &str) -> String {
    match tok {
        Token::Comment => text.trim_end_matches('\n').to_string(),
        _ if tok.is_literal() => text.to_string(),
        _ => String::new(),
    }
}

#[test]
fn scans_every_token_kind() {
    let src = source();
    let set = FileSet::new();
    let file = set.add_file("", set.base(), src.len()).unwrap();

    let mut reported = Vec::new();
    let mut results = Vec::new();
    let error_count = {
        let mut eh = |_: &Position, msg: &str| reported.push(msg.to_string());
        let mut s = Scanner::new();
        s.init(&file, src.as_bytes(), Some(&mut eh)).unwrap();
        loop {
            let item = s.scan();
            let done = item.1 == Token::Eof;
            results.push(item);
            if done {
                break s.error_count();
            }
        }
    };
    assert_eq!(error_count, 0);
    assert!(reported.is_empty(), "unexpected errors: {reported:?}");
    assert_eq!(results.len(), TOKENS.len() + 1);

    let mut expected = Position {
        filename: String::new(),
        offset: 0,
        line: 1,
        column: 1,
    };
    for (&(tok, text, class), (pos, got_tok, got_lit)) in TOKENS.iter().zip(&results) {
        assert_eq!(set.position(*pos), expected, "position of {text:?}");
        assert_eq!(*got_tok, tok, "token for {text:?}");
        assert_eq!(class_of(*got_tok), class, "class of {text:?}");
        assert_eq!(*got_lit, expected_literal(tok, text), "literal for {text:?}");

        expected.offset += text.len() + WHITESPACE.len();
        expected.line += newline_count(text) + newline_count(WHITESPACE);
    }

    // The final newline starts no line of its own, so end of input sits in
    // column 2 of the last line.
    let (pos, tok, lit) = &results[TOKENS.len()];
    assert_eq!(*tok, Token::Eof);
    assert!(lit.is_empty());
    assert_eq!(
        set.position(*pos),
        Position {
            filename: String::new(),
            offset: src.len(),
            line: newline_count(&src),
            column: 2,
        }
    );
}

#[test]
fn positions_are_global_across_files() {
    let set = FileSet::new();
    let a_src = "alpha\nbeta";
    let b_src = "gamma";
    let a = set.add_file("a.zo", set.base(), a_src.len()).unwrap();
    let b = set.add_file("b.zo", set.base(), b_src.len()).unwrap();

    let mut s = Scanner::new();
    s.init(&a, a_src.as_bytes(), None).unwrap();
    s.scan();
    let (beta, _, _) = s.scan();

    s.init(&b, b_src.as_bytes(), None).unwrap();
    let (gamma, _, lit) = s.scan();
    assert_eq!(lit, "gamma");

    assert!(beta < gamma);
    assert_eq!(set.position(beta).to_string(), "a.zo:2:1");
    assert_eq!(set.position(gamma).to_string(), "b.zo:1:1");
    assert_eq!(set.file(gamma).map(|f| f.name().to_string()), Some("b.zo".to_string()));
}

#[test]
fn line_info_overrides_reported_positions() {
    let set = FileSet::new();
    let src = "a\nb\nc";
    let file = set.add_file("gen.zo", set.base(), src.len()).unwrap();
    file.add_line_info(2, "orig.zo", 40);

    let mut s = Scanner::new();
    s.init(&file, src.as_bytes(), None).unwrap();
    let mut positions = Vec::new();
    loop {
        let (pos, tok, _) = s.scan();
        if tok == Token::Eof {
            break;
        }
        positions.push(set.position(pos).to_string());
    }
    assert_eq!(positions, vec!["gen.zo:1:1", "orig.zo:40:1", "orig.zo:41:1"]);

    let (_, tok, _) = s.scan();
    assert_eq!(tok, Token::Eof);
    let raw: Vec<String> = (0..src.len())
        .step_by(2)
        .map(|off| file.position_for(file.pos(off), false).to_string())
        .collect();
    assert_eq!(raw, vec!["gen.zo:1:1", "gen.zo:2:1", "gen.zo:3:1"]);
}
