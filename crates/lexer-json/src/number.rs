//! JSON number scanning.

use lexer_core::Cursor;

/// Advance `cursor` over a JSON number: `-`? (`0` | digits) fraction? exponent?.
///
/// Parsing stops at the first character that does not fit the grammar, so `-` alone or `1.`
/// still consume what they can.
pub fn scan_number(cursor: &mut Cursor<'_>) {
    if cursor.current() == Some('-') {
        cursor.bump(1);
    }

    match cursor.current() {
        Some('0') => cursor.bump(1),
        Some('1'..='9') => cursor.eat_while(|c| c.is_ascii_digit()),
        _ => return,
    }

    if cursor.current() == Some('.') {
        cursor.bump(1);
        cursor.eat_while(|c| c.is_ascii_digit());
    }

    if matches!(cursor.current(), Some('e' | 'E')) {
        cursor.bump(1);
        if matches!(cursor.current(), Some('-' | '+')) {
            cursor.bump(1);
        }
        cursor.eat_while(|c| c.is_ascii_digit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut cursor = Cursor::new(&chars);
        scan_number(&mut cursor);
        cursor.slice_from(0).iter().collect()
    }

    #[test]
    fn test_json_numbers() {
        assert_eq!(scanned("0,"), "0");
        assert_eq!(scanned("-12]"), "-12");
        assert_eq!(scanned("3.25}"), "3.25");
        assert_eq!(scanned("-1.5e3,"), "-1.5e3");
        assert_eq!(scanned("6E+2 "), "6E+2");
        assert_eq!(scanned("7e-1"), "7e-1");
    }

    #[test]
    fn test_stops_where_grammar_ends() {
        // A leading zero is a complete integer part.
        assert_eq!(scanned("012"), "0");
        assert_eq!(scanned("-x"), "-");
        assert_eq!(scanned("1."), "1.");
        assert_eq!(scanned("1ULL"), "1");
    }
}
