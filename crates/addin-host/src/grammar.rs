//! Host-facing dispatch over the built-in grammars.

use lexer_core::{
    ColorSpan, DocumentHighlighter, FoldRegion, GrammarInfo, LineClassifier, LineState,
    split_lines,
};
use lexer_cpp::CppClassifier;
use lexer_json::JsonClassifier;
use serde::Serialize;

/// One of the built-in grammars.
#[derive(Debug, Clone, Copy)]
pub enum Grammar {
    /// C++ sources.
    Cpp(CppClassifier),
    /// JSON documents.
    Json(JsonClassifier),
}

/// Classification of one line, as reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedLine {
    /// Zero-based line number.
    pub line: usize,
    /// Color changes, columns in characters.
    pub spans: Vec<ColorSpan>,
    /// Cookie at the end of the line.
    pub cookie: u16,
}

fn highlight_with<C: LineClassifier>(classifier: C, text: &str) -> Vec<HighlightedLine> {
    let mut state = C::State::default();
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(line, content)| {
            let out = classifier.classify(state, content);
            state = out.state;
            HighlightedLine {
                line,
                spans: out.spans,
                cookie: state.to_cookie(),
            }
        })
        .collect()
}

impl Grammar {
    /// Static description of the grammar.
    pub fn info(&self) -> &GrammarInfo {
        match self {
            Grammar::Cpp(c) => c.info(),
            Grammar::Json(c) => c.info(),
        }
    }

    /// Whether `word` is one of the grammar's keywords.
    pub fn is_keyword(&self, word: &str) -> bool {
        match self {
            Grammar::Cpp(c) => c.is_keyword(word),
            Grammar::Json(c) => c.is_keyword(word),
        }
    }

    /// The grammar's keyword table.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Grammar::Cpp(c) => c.keywords().words(),
            Grammar::Json(c) => c.keywords().words(),
        }
    }

    /// Classify one UTF-16 line given the previous line's cookie.
    ///
    /// Span columns are UTF-16 code unit offsets.
    pub fn classify_cookie(&self, cookie: u16, line: &[u16]) -> (Vec<ColorSpan>, u16) {
        match self {
            Grammar::Cpp(c) => c.classify_utf16(cookie, line),
            Grammar::Json(c) => c.classify_utf16(cookie, line),
        }
    }

    /// Classify every line of `text`, starting from the zero state.
    pub fn highlight(&self, text: &str) -> Vec<HighlightedLine> {
        match *self {
            Grammar::Cpp(c) => highlight_with(c, text),
            Grammar::Json(c) => highlight_with(c, text),
        }
    }

    /// Fold regions of `text`.
    pub fn fold_regions(&self, text: &str) -> Vec<FoldRegion> {
        match *self {
            Grammar::Cpp(c) => DocumentHighlighter::with_text(c, text).fold_regions(),
            Grammar::Json(c) => DocumentHighlighter::with_text(c, text).fold_regions(),
        }
    }
}
