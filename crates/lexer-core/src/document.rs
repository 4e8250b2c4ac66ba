//! Whole-document highlighting on top of a [`LineClassifier`].
//!
//! [`DocumentHighlighter`] caches each line's spans and end state. After an edit it re-lexes
//! from the first edited line and stops as soon as a line past the edit ends in the same
//! state as before, which is what makes per-line cookies worth having.

use crate::classifier::{LineClassifier, LineState};
use crate::fold::{FoldLevel, FoldRegion, fold_regions};
use crate::span::ColorSpan;

#[derive(Debug, Clone)]
struct LineEntry<S> {
    text: String,
    spans: Vec<ColorSpan>,
    end: S,
}

/// Work done by one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelexStats {
    /// First line that was re-lexed.
    pub first_line: usize,
    /// Number of lines re-lexed.
    pub relexed: usize,
}

/// Cached, incrementally updated highlighting for a whole document.
#[derive(Debug, Clone)]
pub struct DocumentHighlighter<C: LineClassifier> {
    classifier: C,
    lines: Vec<LineEntry<C::State>>,
}

impl<C: LineClassifier> DocumentHighlighter<C> {
    /// Create a highlighter for an empty document.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            lines: Vec::new(),
        }
    }

    /// Create a highlighter and classify `text`.
    pub fn with_text(classifier: C, text: &str) -> Self {
        let mut highlighter = Self::new(classifier);
        highlighter.set_text(text);
        highlighter
    }

    /// The underlying classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replace the whole document.
    pub fn set_text(&mut self, text: &str) -> RelexStats {
        let removed = self.lines.len();
        let lines = split_lines(text);
        self.replace_lines(0, removed, &lines)
    }

    /// Replace `removed` lines starting at `start` with `inserted`, then re-lex.
    ///
    /// `start` and `removed` are clamped to the document.
    pub fn replace_lines(&mut self, start: usize, removed: usize, inserted: &[&str]) -> RelexStats {
        let start = start.min(self.lines.len());
        let removed = removed.min(self.lines.len() - start);
        let fresh = inserted.iter().map(|text| LineEntry {
            text: (*text).to_string(),
            spans: Vec::new(),
            end: C::State::default(),
        });
        self.lines.splice(start..start + removed, fresh);

        let edited_end = start + inserted.len();
        let mut state = self.state_before(start);
        let mut relexed = 0usize;
        for line in start..self.lines.len() {
            let entry = &mut self.lines[line];
            let out = self.classifier.classify(state, &entry.text);
            let converged = line >= edited_end && out.state == entry.end;
            entry.spans = out.spans;
            entry.end = out.state;
            state = out.state;
            relexed += 1;
            if converged {
                break;
            }
        }

        tracing::trace!(
            grammar = self.classifier.info().name,
            first_line = start,
            relexed,
            "relexed document lines"
        );
        RelexStats {
            first_line: start,
            relexed,
        }
    }

    /// Spans of `line`.
    pub fn spans(&self, line: usize) -> Option<&[ColorSpan]> {
        self.lines.get(line).map(|entry| entry.spans.as_slice())
    }

    /// Text of `line` (without terminator).
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|entry| entry.text.as_str())
    }

    /// State at the start of `line` (the zero state for line 0 and past the end).
    pub fn state_before(&self, line: usize) -> C::State {
        match line.checked_sub(1).and_then(|prev| self.lines.get(prev)) {
            Some(entry) => entry.end,
            None => C::State::default(),
        }
    }

    /// State at the end of `line`.
    pub fn state_after(&self, line: usize) -> Option<C::State> {
        self.lines.get(line).map(|entry| entry.end)
    }

    /// Fold level at the end of each line.
    pub fn fold_levels(&self) -> Vec<FoldLevel> {
        self.lines.iter().map(|entry| entry.end.fold_level()).collect()
    }

    /// Fold regions derived from the fold levels.
    pub fn fold_regions(&self) -> Vec<FoldRegion> {
        fold_regions(&self.fold_levels())
    }
}

/// Split text into lines on `\n`, `\r\n` or `\r`, without terminators.
///
/// A trailing terminator yields a final empty line, the way an editor shows it.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\r\n\r\n"), vec!["", "", ""]);
    }
}
