//! Character classes of the JSON grammar

/// Space, line feed, carriage return and horizontal tab. No other Unicode
/// whitespace.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

#[inline]
pub const fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

#[inline]
pub const fn is_minus(c: char) -> bool {
    c == '-'
}

#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub const fn is_one_to_nine(c: char) -> bool {
    matches!(c, '1'..='9')
}

#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Control characters that must be escaped inside a string (U+0000..=U+001F)
#[inline]
pub const fn is_control(c: char) -> bool {
    c <= '\u{001F}'
}

/// Any code point allowed unescaped in a string body
#[inline]
pub const fn is_string_char(c: char) -> bool {
    c != '"' && c != '\\' && !is_control(c)
}

/// Characters allowed after a backslash, `u` excluded
#[inline]
pub const fn is_escapable(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

#[inline]
pub const fn is_fraction_marker(c: char) -> bool {
    c == '.'
}

#[inline]
pub const fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// First letters of `null`, `true` and `false`
#[inline]
pub const fn is_keyword_start(c: char) -> bool {
    matches!(c, 'n' | 't' | 'f')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_json_only() {
        for c in [' ', '\n', '\r', '\t'] {
            assert!(is_whitespace(c));
        }
        // NBSP, vertical tab, form feed
        for c in ['\u{00A0}', '\u{000B}', '\u{000C}', 'a'] {
            assert!(!is_whitespace(c));
        }
    }

    #[test]
    fn test_digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣')); // Arabic-Indic three

        assert!(!is_one_to_nine('0'));
        assert!(is_one_to_nine('1'));
        assert!(is_one_to_nine('9'));
    }

    #[test]
    fn test_hex_digits() {
        for c in "0123456789abcdefABCDEF".chars() {
            assert!(is_hex_digit(c), "{c} should be hex");
        }
        for c in "gG-x ".chars() {
            assert!(!is_hex_digit(c), "{c} should not be hex");
        }
    }

    #[test]
    fn test_signs_and_markers() {
        assert!(is_sign('+'));
        assert!(is_sign('-'));
        assert!(!is_sign('.'));
        assert!(is_minus('-'));
        assert!(!is_minus('+'));
        assert!(is_fraction_marker('.'));
        assert!(is_exponent_marker('e'));
        assert!(is_exponent_marker('E'));
        assert!(!is_exponent_marker('x'));
    }

    #[test]
    fn test_string_chars() {
        assert!(is_string_char('a'));
        assert!(is_string_char(' '));
        assert!(is_string_char('ŧ'));
        assert!(is_string_char('\u{007F}'));
        assert!(!is_string_char('"'));
        assert!(!is_string_char('\\'));
        assert!(!is_string_char('\n'));
        assert!(!is_string_char('\u{0000}'));
        assert!(!is_string_char('\u{001F}'));
        assert!(is_string_char('\u{0020}'));
    }

    #[test]
    fn test_escapable() {
        for c in "\"\\/bfnrt".chars() {
            assert!(is_escapable(c));
        }
        assert!(!is_escapable('u'));
        assert!(!is_escapable('i'));
        assert!(!is_escapable('0'));
    }

    #[test]
    fn test_keyword_start() {
        assert!(is_keyword_start('n'));
        assert!(is_keyword_start('t'));
        assert!(is_keyword_start('f'));
        assert!(!is_keyword_start('N'));
        assert!(!is_keyword_start('u'));
    }
}
