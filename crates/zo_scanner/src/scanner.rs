//! The scanner state machine.

use crate::handler::ErrorHandler;
use crate::rune::{decode_rune, describe_rune, is_digit, is_letter};
use zo_common::{InternalError, ZoResult};
use zo_config::ScannerConfig;
use zo_source::{File, Pos};
use zo_token::{lookup_ident, Token};

/// Byte order mark, only permitted as the very first character of a file.
pub const BOM: char = '\u{FEFF}';

/// A scanner over the source text of one file.
///
/// A scanner is reusable: [`init`](Self::init) resets all scanning state and
/// binds it to new source text. Its configuration survives re-initialization.
///
/// Scanning is tolerant. [`scan`](Self::scan) returns a token even when the
/// text was malformed, so a client must check [`error_count`](Self::error_count)
/// (or the handler invocations) rather than look for [`Token::Illegal`].
pub struct Scanner<'a> {
    pub(crate) file: Option<File>,
    pub(crate) src: &'a [u8],
    err: Option<&'a mut dyn ErrorHandler>,
    config: ScannerConfig,

    /// Current character; `None` at end of input.
    pub(crate) ch: Option<char>,
    /// Byte offset of `ch`.
    pub(crate) offset: usize,
    /// Byte offset just past `ch`.
    rd_offset: usize,

    error_count: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    ///
    /// It produces only [`Token::Eof`] until [`init`](Self::init) is called.
    pub fn new() -> Self {
        Self::with_config(&ScannerConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(config: &ScannerConfig) -> Self {
        Self {
            file: None,
            src: &[],
            err: None,
            config: config.clone(),
            ch: None,
            offset: 0,
            rd_offset: 0,
            error_count: 0,
        }
    }

    /// Prepares the scanner to tokenize `src`, the content of `file`.
    ///
    /// Line starts are recorded in `file` as newlines are scanned; starts
    /// that are already present are ignored, so the same file may be scanned
    /// again. A byte order mark at the start of `src` is skipped. Errors in
    /// the first character are reported during this call.
    ///
    /// Fails, leaving the scanner untouched, if `src` is not exactly
    /// `file.size()` bytes long.
    pub fn init(
        &mut self,
        file: &File,
        src: &'a [u8],
        err: Option<&'a mut dyn ErrorHandler>,
    ) -> ZoResult<()> {
        if file.size() != src.len() {
            return Err(InternalError::new(format!(
                "file size ({}) does not match src len ({})",
                file.size(),
                src.len()
            )));
        }
        tracing::debug!(file = %file.name(), size = src.len(), "scanner initialized");
        self.file = Some(file.clone());
        self.src = src;
        self.err = err;

        self.ch = Some(' ');
        self.offset = 0;
        self.rd_offset = 0;
        self.error_count = 0;

        self.next();
        if self.ch == Some(BOM) {
            self.next();
        }
        Ok(())
    }

    /// Returns the number of errors found since the last [`init`](Self::init).
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Reads the next character into `ch`.
    pub(crate) fn next(&mut self) {
        if self.rd_offset >= self.src.len() {
            self.offset = self.src.len();
            if self.ch == Some('\n') {
                self.add_line(self.offset);
            }
            self.ch = None;
            return;
        }

        self.offset = self.rd_offset;
        if self.ch == Some('\n') {
            self.add_line(self.offset);
        }
        let b = self.src[self.rd_offset];
        let (ch, width) = if b == 0 {
            self.error(self.offset, "illegal character NUL");
            ('\0', 1)
        } else if b.is_ascii() {
            (char::from(b), 1)
        } else {
            match decode_rune(&self.src[self.rd_offset..]) {
                Some((ch, width)) => {
                    if ch == BOM && self.offset > 0 {
                        self.error(self.offset, "illegal byte order mark");
                    }
                    (ch, width)
                }
                None => {
                    self.error(self.offset, "illegal UTF-8 encoding");
                    (char::REPLACEMENT_CHARACTER, 1)
                }
            }
        };
        self.rd_offset += width;
        self.ch = Some(ch);
    }

    fn add_line(&self, offset: usize) {
        if let Some(file) = &self.file {
            file.add_line(offset);
        }
    }

    fn pos_at(&self, offset: usize) -> Pos {
        self.file.as_ref().map_or(Pos::NONE, |file| file.pos(offset))
    }

    /// Reports an error at a byte offset and counts it.
    pub(crate) fn error(&mut self, offset: usize, msg: &str) {
        tracing::trace!(offset, msg, "lexical error");
        if let (Some(err), Some(file)) = (self.err.as_deref_mut(), &self.file) {
            err.report(&file.position(file.pos(offset)), msg);
        }
        self.error_count += 1;
    }

    /// Source text between `start` and the current offset.
    pub(crate) fn text_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.src[start..self.offset]).into_owned()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.next();
        }
    }

    fn scan_comment(&mut self, start: usize) -> String {
        // The opening '/' is consumed; ch is '/' or '*'.
        if self.ch == Some('/') {
            self.next();
            while !matches!(self.ch, Some('\n') | None) {
                self.next();
            }
        } else {
            self.next();
            while let Some(ch) = self.ch {
                self.next();
                if ch == '*' && self.ch == Some('/') {
                    self.next();
                    break;
                }
            }
        }
        self.text_from(start)
    }

    fn scan_identifier(&mut self) -> String {
        let start = self.offset;
        while self.ch.is_some_and(|ch| is_letter(ch) || is_digit(ch)) {
            self.next();
        }
        self.text_from(start)
    }

    /// Returns `if_eq` and consumes the `=` if it comes next, else `single`.
    fn switch_eq(&mut self, single: Token, if_eq: Token) -> Token {
        if self.ch == Some('=') {
            self.next();
            if_eq
        } else {
            single
        }
    }

    /// Scans the second half of `&&` or `||`.
    fn scan_doubled(&mut self, start: usize, ch: char, tok: Token) -> (Token, String) {
        if self.ch == Some(ch) {
            self.next();
            (tok, String::new())
        } else {
            self.illegal(start, ch)
        }
    }

    fn illegal(&mut self, start: usize, ch: char) -> (Token, String) {
        self.error(start, &format!("illegal character {}", describe_rune(ch)));
        (Token::Illegal, ch.to_string())
    }

    /// Scans the next token and returns its position, kind, and literal.
    ///
    /// Literal kinds and comments carry their exact source text;
    /// [`Token::Illegal`] carries the offending character; all other kinds
    /// carry an empty literal. At end of input [`Token::Eof`] is returned,
    /// again on every further call.
    pub fn scan(&mut self) -> (Pos, Token, String) {
        loop {
            let (pos, tok, lit) = self.scan_token();
            if tok == Token::Comment && self.config.skip_comments {
                continue;
            }
            return (pos, tok, lit);
        }
    }

    fn scan_token(&mut self) -> (Pos, Token, String) {
        self.skip_whitespace();

        let start = self.offset;
        let pos = self.pos_at(start);

        let Some(ch) = self.ch else {
            return (pos, Token::Eof, String::new());
        };

        if is_letter(ch) {
            let lit = self.scan_identifier();
            return (pos, lookup_ident(&lit), lit);
        }
        if ch.is_ascii_digit() {
            let (tok, lit) = self.scan_number(start, false);
            return (pos, tok, lit);
        }

        // Every remaining path consumes at least this character.
        self.next();
        let (tok, lit) = match ch {
            '"' => (Token::String, self.scan_string(start, '"')),
            '\'' => (Token::RawString, self.scan_string(start, '\'')),
            '.' if self.ch.is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start, true),
            '/' if matches!(self.ch, Some('/' | '*')) => (Token::Comment, self.scan_comment(start)),
            '&' => self.scan_doubled(start, '&', Token::And),
            '|' => self.scan_doubled(start, '|', Token::Or),
            '<' => (self.switch_eq(Token::Lss, Token::Leq), String::new()),
            '>' => (self.switch_eq(Token::Gtr, Token::Geq), String::new()),
            '=' => (self.switch_eq(Token::Assign, Token::Eql), String::new()),
            '!' => (self.switch_eq(Token::Not, Token::Neq), String::new()),
            _ => match single_char_token(ch) {
                Some(tok) => (tok, String::new()),
                // A misplaced BOM was already reported by `next`.
                None if ch == BOM => (Token::Illegal, ch.to_string()),
                None => self.illegal(start, ch),
            },
        };
        (pos, tok, lit)
    }
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn single_char_token(ch: char) -> Option<Token> {
    let tok = match ch {
        ':' => Token::Colon,
        '.' => Token::Period,
        ',' => Token::Comma,
        '(' => Token::LParen,
        ')' => Token::RParen,
        '[' => Token::LBrack,
        ']' => Token::RBrack,
        '{' => Token::LBrace,
        '}' => Token::RBrace,
        '+' => Token::Add,
        '-' => Token::Sub,
        '*' => Token::Mul,
        '/' => Token::Quo,
        '%' => Token::Rem,
        _ => return None,
    };
    Some(tok)
}
