//! Character cursor over one line of text.
//!
//! Positions are character indices, which are also the columns reported in
//! [`ColorSpan`](crate::ColorSpan)s. Reads past the end return `None`, so grammars can probe
//! ahead without bounds checks of their own.

/// Cursor over the characters of a single line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at column 0.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    /// Current column.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the line is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Character at the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Character `n` positions after the cursor (`peek(0)` is [`Cursor::current`]).
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Advance by `n` characters (clamped to the end of the line).
    #[inline]
    pub fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// Returns `true` if the text at the cursor starts with `pattern`.
    pub fn at(&self, pattern: &str) -> bool {
        let mut i = self.pos;
        for expected in pattern.chars() {
            if self.chars.get(i) != Some(&expected) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns `true` if the cursor is at any of `patterns`.
    pub fn at_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.at(p))
    }

    /// Advance while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip spaces and tabs.
    pub fn skip_blanks(&mut self) {
        self.eat_while(is_blank);
    }

    /// The characters in `start..self.pos()`.
    pub fn slice_from(&self, start: usize) -> &'a [char] {
        &self.chars[start.min(self.pos)..self.pos]
    }
}

/// Space or tab.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns `true` if the line ends with a backslash line continuation.
///
/// The host may or may not hand over the line terminator; one trailing `\n`, `\r\n` or `\r`
/// is ignored before looking for the backslash.
pub fn ends_with_continuation(chars: &[char]) -> bool {
    let body = match chars {
        [rest @ .., '\r', '\n'] => rest,
        [rest @ .., '\n'] | [rest @ .., '\r'] => rest,
        _ => chars,
    };
    body.last() == Some(&'\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_cursor_navigation() {
        let text = chars("  <<= x");
        let mut cursor = Cursor::new(&text);
        cursor.skip_blanks();
        assert_eq!(cursor.pos(), 2);
        assert!(cursor.at("<<="));
        assert!(!cursor.at("<<=="));
        assert_eq!(cursor.peek(3), Some(' '));
        cursor.bump(3);
        cursor.skip_blanks();
        assert_eq!(cursor.current(), Some('x'));
        cursor.bump(10);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_slice_from() {
        let text = chars("ident+1");
        let mut cursor = Cursor::new(&text);
        cursor.eat_while(char::is_alphabetic);
        assert_eq!(cursor.slice_from(0), &text[..5]);
    }

    #[test]
    fn test_continuation_detection() {
        assert!(ends_with_continuation(&chars("#define X \\\n")));
        assert!(ends_with_continuation(&chars("#define X \\\r\n")));
        assert!(ends_with_continuation(&chars("#define X \\")));
        assert!(!ends_with_continuation(&chars("#define X\n")));
        assert!(!ends_with_continuation(&chars("\\ x")));
        assert!(!ends_with_continuation(&chars("")));
    }
}
