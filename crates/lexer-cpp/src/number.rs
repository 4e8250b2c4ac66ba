//! C++ numeric literal scanning.

use lexer_core::Cursor;

/// Advance `cursor` over a numeric literal starting at a decimal digit.
///
/// Accepts `0x`/`0X` hex, `0b`/`0B` binary, or decimal with optional fraction and exponent,
/// then a type suffix: `f F l L` after a floating value, one of `ULL LLU LL UL LU U L` (any
/// case) after an integer. Stops at the first character that cannot extend the literal; a
/// malformed literal is never rejected, just not consumed any further.
pub fn scan_number(cursor: &mut Cursor<'_>) {
    let mut float = false;

    if cursor.current() == Some('0') && matches!(cursor.peek(1), Some('x' | 'X')) {
        cursor.bump(2);
        cursor.eat_while(|c| c.is_ascii_hexdigit());
    } else if cursor.current() == Some('0') && matches!(cursor.peek(1), Some('b' | 'B')) {
        cursor.bump(2);
        cursor.eat_while(|c| c == '0' || c == '1');
    } else {
        cursor.bump(1);
        cursor.eat_while(|c| c.is_ascii_digit());

        if cursor.current() == Some('.') {
            cursor.bump(1);
            cursor.eat_while(|c| c.is_ascii_digit());
            float = true;
        }

        if matches!(cursor.current(), Some('e' | 'E')) {
            cursor.bump(1);
            if matches!(cursor.current(), Some('-' | '+')) {
                cursor.bump(1);
            }
            cursor.eat_while(|c| c.is_ascii_digit());
            float = true;
        }
    }

    if float {
        if matches!(cursor.current(), Some('f' | 'F' | 'l' | 'L')) {
            cursor.bump(1);
        }
    } else {
        cursor.bump(integer_suffix_len(cursor));
    }
}

fn integer_suffix_len(cursor: &Cursor<'_>) -> usize {
    let is_u = |n| matches!(cursor.peek(n), Some('u' | 'U'));
    let is_l = |n| matches!(cursor.peek(n), Some('l' | 'L'));

    if (is_u(0) && is_l(1) && is_l(2)) || (is_l(0) && is_l(1) && is_u(2)) {
        3
    } else if (is_l(0) && is_l(1)) || (is_u(0) && is_l(1)) || (is_l(0) && is_u(1)) {
        2
    } else if is_u(0) || is_l(0) {
        1
    } else {
        0
    }
}
