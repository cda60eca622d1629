//! Character classification and decoding helpers.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Decodes the first UTF-8 encoded character of `bytes`.
///
/// Returns `None` for an invalid or truncated encoding.
pub(crate) fn decode_rune(bytes: &[u8]) -> Option<(char, usize)> {
    let chunk = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(chunk) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&chunk[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next().map(|ch| (ch, ch.len_utf8()))
}

/// `_` or any character in a letter category (Lu, Ll, Lt, Lm, Lo).
pub(crate) fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '_';
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Any decimal digit (Nd); other numeric categories are not digits.
pub(crate) fn is_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

/// Value of a hexadecimal digit; 16 for anything else, including end of input.
pub(crate) fn digit_val(ch: Option<char>) -> u32 {
    match ch {
        Some(c @ '0'..='9') => c as u32 - '0' as u32,
        Some(c @ 'a'..='f') => c as u32 - 'a' as u32 + 10,
        Some(c @ 'A'..='F') => c as u32 - 'A' as u32 + 10,
        _ => 16,
    }
}

/// Letters, marks, numbers, punctuation, symbols, and the ASCII space.
fn is_printable(ch: char) -> bool {
    ch == ' '
        || !matches!(
            get_general_category(ch),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}

/// Formats a character as `U+XXXX 'c'`, omitting the quoted form for
/// characters that do not print.
pub(crate) fn describe_rune(ch: char) -> String {
    if is_printable(ch) {
        format!("U+{:04X} '{ch}'", ch as u32)
    } else {
        format!("U+{:04X}", ch as u32)
    }
}
