//! Integer and floating-point literals.

use crate::rune::digit_val;
use crate::scanner::Scanner;
use zo_token::Token;

/// Where the decimal scanner resumes after the integer part.
enum NumberPhase {
    /// An optional `.` and fractional digits, then an optional exponent.
    Fraction,
    /// An optional exponent only.
    Exponent,
    /// The literal is complete.
    Done,
}

impl Scanner<'_> {
    fn scan_mantissa(&mut self, base: u32) {
        while digit_val(self.ch) < base {
            self.next();
        }
    }

    /// Scans a number starting at `start`.
    ///
    /// On entry `ch` is a decimal digit. With `seen_decimal_point` the `.` at
    /// `start` has already been consumed.
    pub(crate) fn scan_number(&mut self, start: usize, seen_decimal_point: bool) -> (Token, String) {
        let mut tok = Token::Int;

        let mut phase = if seen_decimal_point {
            tok = Token::Float;
            self.scan_mantissa(10);
            NumberPhase::Exponent
        } else if self.ch == Some('0') {
            self.scan_zero_prefixed(start)
        } else {
            self.scan_mantissa(10);
            NumberPhase::Fraction
        };

        loop {
            phase = match phase {
                NumberPhase::Fraction => {
                    if self.ch == Some('.') {
                        tok = Token::Float;
                        self.next();
                        self.scan_mantissa(10);
                    }
                    NumberPhase::Exponent
                }
                NumberPhase::Exponent => {
                    if matches!(self.ch, Some('e' | 'E')) {
                        tok = Token::Float;
                        self.next();
                        if matches!(self.ch, Some('-' | '+')) {
                            self.next();
                        }
                        self.scan_mantissa(10);
                    }
                    NumberPhase::Done
                }
                NumberPhase::Done => break,
            };
        }

        (tok, self.text_from(start))
    }

    /// Hexadecimal and octal integers, or a decimal float with a leading zero.
    fn scan_zero_prefixed(&mut self, start: usize) -> NumberPhase {
        self.next();
        if matches!(self.ch, Some('x' | 'X')) {
            self.next();
            self.scan_mantissa(16);
            if self.offset - start <= 2 {
                self.error(start, "illegal hexadecimal number");
            }
            return NumberPhase::Done;
        }

        self.scan_mantissa(8);
        let mut decimal_digits = false;
        if matches!(self.ch, Some('8' | '9')) {
            decimal_digits = true;
            self.scan_mantissa(10);
        }
        if matches!(self.ch, Some('.' | 'e' | 'E')) {
            return NumberPhase::Fraction;
        }
        if decimal_digits {
            self.error(start, "illegal octal number");
        }
        NumberPhase::Done
    }
}
