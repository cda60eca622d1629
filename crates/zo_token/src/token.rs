//! Token kinds for the zolang scanner.
//!
//! Defines the [`Token`] enum covering special tokens, literals, operators,
//! and delimiters. Literal values are not stored in the token; the scanner
//! returns them alongside the kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Precedence of non-operators and unary operators.
pub const LOWEST_PREC: u8 = 0;
/// Precedence of the most tightly binding binary operators.
pub const HIGHEST_PREC: u8 = 6;

/// A zolang token kind.
///
/// The declaration order groups the kinds: special tokens, then literals
/// (`Ident` through `RawString`), then operators and delimiters (`Add`
/// through `Colon`). The classification queries rely on this order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Token {
    // === Special tokens ===
    /// A malformed token; the literal is the offending character.
    Illegal,
    /// End of input.
    Eof,
    /// A `//` or `/* */` comment.
    Comment,

    // === Literals ===
    /// An identifier, e.g. `main`.
    Ident,
    /// `true` or `false`.
    Bool,
    /// An integer literal, e.g. `12345`, `0x7f`, `0755`.
    Int,
    /// A floating-point literal, e.g. `3.14`, `.5`, `1e-9`.
    Float,
    /// A double-quoted string literal, e.g. `"abc"`.
    String,
    /// A single-quoted raw string literal, e.g. `'abc'`.
    RawString,

    // === Operators and delimiters ===
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Eql,
    /// `<`
    Lss,
    /// `>`
    Gtr,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `(`
    LParen,
    /// `[`
    LBrack,
    /// `{`
    LBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `)`
    RParen,
    /// `]`
    RBrack,
    /// `}`
    RBrace,
    /// `:`
    Colon,
}

impl Token {
    /// Returns `true` for kinds whose literal text carries a value.
    pub fn is_literal(self) -> bool {
        Token::Ident <= self && self <= Token::RawString
    }

    /// Returns `true` for operator and delimiter kinds.
    pub fn is_operator(self) -> bool {
        Token::Add <= self && self <= Token::Colon
    }

    /// Returns the binary-operator precedence, or [`LOWEST_PREC`] if the
    /// token is not a binary operator.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Or => 1,
            Token::And => 2,
            Token::Eql | Token::Neq | Token::Lss | Token::Leq | Token::Gtr | Token::Geq => 3,
            Token::Add | Token::Sub => 4,
            Token::Mul | Token::Quo | Token::Rem => 5,
            _ => LOWEST_PREC,
        }
    }

    /// Returns the textual form: the operator text for operators and
    /// delimiters, an upper-case name for everything else.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Comment => "COMMENT",
            Token::Ident => "IDENT",
            Token::Bool => "BOOL",
            Token::Int => "INT",
            Token::Float => "FLOAT",
            Token::String => "STRING",
            Token::RawString => "RAWSTRING",
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::And => "&&",
            Token::Or => "||",
            Token::Eql => "==",
            Token::Lss => "<",
            Token::Gtr => ">",
            Token::Assign => "=",
            Token::Not => "!",
            Token::Neq => "!=",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::LParen => "(",
            Token::LBrack => "[",
            Token::LBrace => "{",
            Token::Comma => ",",
            Token::Period => ".",
            Token::RParen => ")",
            Token::RBrack => "]",
            Token::RBrace => "}",
            Token::Colon => ":",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a scanned identifier: `true` and `false` are [`Token::Bool`],
/// everything else is [`Token::Ident`].
pub fn lookup_ident(ident: &str) -> Token {
    match ident {
        "true" | "false" => Token::Bool,
        _ => Token::Ident,
    }
}
