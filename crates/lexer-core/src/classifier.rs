//! The line classifier interface and the host cookie boundary.

use crate::fold::FoldLevel;
use crate::keywords::KeywordSet;
use crate::lang::GrammarInfo;
use crate::span::ColorSpan;
use std::fmt::Debug;

/// State carried from the end of one line to the start of the next.
///
/// The zero state (`Default`) is the state before the first line of a file.
pub trait LineState: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// Fold level at the end of the line that produced this state.
    fn fold_level(&self) -> FoldLevel;

    /// Pack into the host's 16-bit cookie: flag bits in the low byte, fold level in the high
    /// byte.
    fn to_cookie(&self) -> u16;

    /// Unpack a host cookie. Unknown flag bits are ignored.
    fn from_cookie(cookie: u16) -> Self;
}

/// Build a cookie from flag bits and a fold level.
#[inline]
pub fn pack_cookie(flags: u8, level: FoldLevel) -> u16 {
    u16::from(flags) | (u16::from(level.get()) << 8)
}

/// Split a cookie into flag bits and fold level.
#[inline]
pub fn unpack_cookie(cookie: u16) -> (u8, FoldLevel) {
    ((cookie & 0x00ff) as u8, FoldLevel::new((cookie >> 8) as u8))
}

/// Output of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<S> {
    /// Color-change points, strictly increasing by column, no two neighbours alike.
    pub spans: Vec<ColorSpan>,
    /// State for the next line.
    pub state: S,
}

/// A per-grammar incremental line classifier.
///
/// Implementations are pure: the output depends only on the prior state and the line text,
/// so a classifier can be shared freely between documents and threads.
pub trait LineClassifier {
    /// The grammar's carry-over state.
    type State: LineState;

    /// Static description of the grammar.
    fn info(&self) -> &GrammarInfo;

    /// The grammar's keyword table.
    fn keywords(&self) -> &KeywordSet;

    /// Classify one line given as characters. Columns are character indices.
    fn classify_chars(&self, state: Self::State, line: &[char]) -> ClassifiedLine<Self::State>;

    /// Classify one line. Columns are character indices.
    fn classify(&self, state: Self::State, line: &str) -> ClassifiedLine<Self::State> {
        let chars: Vec<char> = line.chars().collect();
        self.classify_chars(state, &chars)
    }

    /// Host entry point: classify a UTF-16 line with a packed cookie.
    ///
    /// Returned columns are UTF-16 code unit offsets. Unpaired surrogates are classified as
    /// U+FFFD and keep their one-unit width.
    fn classify_utf16(&self, cookie: u16, line: &[u16]) -> (Vec<ColorSpan>, u16) {
        let mut chars = Vec::with_capacity(line.len());
        let mut offsets = Vec::with_capacity(line.len() + 1);
        let mut unit = 0usize;
        for decoded in char::decode_utf16(line.iter().copied()) {
            let (c, width) = match decoded {
                Ok(c) => (c, c.len_utf16()),
                Err(_) => (char::REPLACEMENT_CHARACTER, 1),
            };
            chars.push(c);
            offsets.push(unit);
            unit += width;
        }
        offsets.push(unit);

        let out = self.classify_chars(Self::State::from_cookie(cookie), &chars);
        let spans = out
            .spans
            .into_iter()
            .map(|span| ColorSpan::new(offsets[span.column.min(chars.len())], span.category))
            .collect();
        (spans, out.state.to_cookie())
    }

    /// Returns `true` if `word` is a keyword of this grammar (used for F1-style keyword help).
    fn is_keyword(&self, word: &str) -> bool {
        self.keywords().contains(word)
    }
}

/// Classify consecutive lines from the zero state, returning each line's output.
pub fn classify_lines<'a, C, I>(classifier: &C, lines: I) -> Vec<ClassifiedLine<C::State>>
where
    C: LineClassifier + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut state = C::State::default();
    lines
        .into_iter()
        .map(|line| {
            let out = classifier.classify(state, line);
            state = out.state;
            out
        })
        .collect()
}
