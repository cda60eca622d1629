//! Quoted literals and their escape sequences.

use crate::rune::{describe_rune, digit_val};
use crate::scanner::Scanner;

impl Scanner<'_> {
    /// Scans a string literal whose opening `quote` at `start` has been
    /// consumed. Returns the literal including both quotes.
    pub(crate) fn scan_string(&mut self, start: usize, quote: char) -> String {
        loop {
            let ch = match self.ch {
                None | Some('\n') => {
                    self.error(start, "string literal not terminated");
                    break;
                }
                Some(ch) => ch,
            };
            self.next();
            if ch == quote {
                break;
            }
            if ch == '\\' {
                self.scan_escape(quote);
            }
        }
        self.text_from(start)
    }

    /// Validates one escape sequence following a consumed `\`.
    ///
    /// `quote` is the only quote character that may be escaped. On a malformed
    /// sequence the offending character is left unconsumed and `false` is
    /// returned.
    pub(crate) fn scan_escape(&mut self, quote: char) -> bool {
        let start = self.offset;

        let (mut digits, base, max) = match self.ch {
            Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\') => {
                self.next();
                return true;
            }
            Some(ch) if ch == quote => {
                self.next();
                return true;
            }
            Some('0'..='7') => (3, 8, 255),
            Some('x') => {
                self.next();
                (2, 16, 255)
            }
            Some('u') => {
                self.next();
                (4, 16, char::MAX as u32)
            }
            Some('U') => {
                self.next();
                (8, 16, char::MAX as u32)
            }
            Some(_) => {
                self.error(start, "unknown escape sequence");
                return false;
            }
            None => {
                self.error(start, "escape sequence not terminated");
                return false;
            }
        };

        let mut value: u32 = 0;
        while digits > 0 {
            let d = digit_val(self.ch);
            if d >= base {
                let msg = match self.ch {
                    Some(ch) => format!("illegal character {} in escape sequence", describe_rune(ch)),
                    None => "escape sequence not terminated".to_string(),
                };
                self.error(self.offset, &msg);
                return false;
            }
            // At most eight hex digits, so this cannot overflow.
            value = value * base + d;
            self.next();
            digits -= 1;
        }

        if value > max || (0xD800..0xE000).contains(&value) {
            self.error(start, "escape sequence is invalid Unicode code point");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::Scanner;
    use zo_source::{FileSet, Position};
    use zo_token::Token;

    /// Scans the first token of `src`, returning it and every reported
    /// `(column, message)`.
    fn scan_first(src: &str) -> (Token, String, Vec<(usize, String)>) {
        let set = FileSet::new();
        let file = set.add_file("str.zo", set.base(), src.len()).unwrap();
        let mut errors = Vec::new();
        let (tok, lit) = {
            let mut eh = |pos: &Position, msg: &str| errors.push((pos.column, msg.to_string()));
            let mut s = Scanner::new();
            s.init(&file, src.as_bytes(), Some(&mut eh)).unwrap();
            let (_, tok, lit) = s.scan();
            (tok, lit)
        };
        (tok, lit, errors)
    }

    #[test]
    fn valid_escapes() {
        for src in [
            r#""\a\b\f\n\r\t\v\\\"""#,
            r#""\000\377""#,
            r#""\x00\xff""#,
            r#""\u0000\ud7ff\ue000""#,
            r#""\U00000000\U0010ffff""#,
        ] {
            let (tok, lit, errors) = scan_first(src);
            assert_eq!((tok, lit.as_str()), (Token::String, src), "{src}");
            assert!(errors.is_empty(), "{src}: {errors:?}");
        }
    }

    #[test]
    fn raw_string_escapes_single_quote() {
        let src = r"'it\'s \u0000'";
        let (tok, lit, errors) = scan_first(src);
        assert_eq!((tok, lit.as_str()), (Token::RawString, src));
        assert!(errors.is_empty());
    }

    #[test]
    fn wrong_quote_escape_is_unknown() {
        let (_, _, errors) = scan_first(r#""\'""#);
        assert_eq!(errors, vec![(3, "unknown escape sequence".to_string())]);
    }

    #[test]
    fn bad_escape_digit() {
        let (tok, lit, errors) = scan_first(r#""\x4g""#);
        assert_eq!((tok, lit.as_str()), (Token::String, r#""\x4g""#));
        assert_eq!(
            errors,
            vec![(5, "illegal character U+0067 'g' in escape sequence".to_string())]
        );
    }

    #[test]
    fn escape_out_of_range() {
        let (_, _, errors) = scan_first(r#""\400""#);
        assert_eq!(
            errors,
            vec![(3, "escape sequence is invalid Unicode code point".to_string())]
        );
        let (_, _, errors) = scan_first(r#""\ud800""#);
        assert_eq!(
            errors,
            vec![(3, "escape sequence is invalid Unicode code point".to_string())]
        );
        let (_, _, errors) = scan_first(r#""\U00110000""#);
        assert_eq!(
            errors,
            vec![(3, "escape sequence is invalid Unicode code point".to_string())]
        );
    }

    #[test]
    fn unterminated_at_newline() {
        let (tok, lit, errors) = scan_first("\"abc\nx");
        assert_eq!((tok, lit.as_str()), (Token::String, "\"abc"));
        assert_eq!(errors, vec![(1, "string literal not terminated".to_string())]);
    }

    #[test]
    fn unterminated_at_eof() {
        let (tok, lit, errors) = scan_first("'abc");
        assert_eq!((tok, lit.as_str()), (Token::RawString, "'abc"));
        assert_eq!(errors, vec![(1, "string literal not terminated".to_string())]);
    }

    #[test]
    fn escape_cut_by_eof() {
        let (_, _, errors) = scan_first("\"\\");
        assert_eq!(
            errors,
            vec![
                (3, "escape sequence not terminated".to_string()),
                (1, "string literal not terminated".to_string()),
            ]
        );
        let (_, _, errors) = scan_first("\"\\u12");
        assert_eq!(
            errors,
            vec![
                (6, "escape sequence not terminated".to_string()),
                (1, "string literal not terminated".to_string()),
            ]
        );
    }

    #[test]
    fn escape_cut_by_newline() {
        let (_, _, errors) = scan_first("\"\\x\n\"");
        assert_eq!(
            errors,
            vec![
                (4, "illegal character U+000A in escape sequence".to_string()),
                (1, "string literal not terminated".to_string()),
            ]
        );
    }
}
