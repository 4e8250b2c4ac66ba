#![warn(missing_docs)]
//! `lexer-json` - incremental JSON line lexer for `lexer-core`.
//!
//! Highlights strings, numbers, `true`/`false`/`null` and structural punctuation, and folds on
//! objects and arrays. JSON has no comments or preprocessor, so the only construct that can be
//! open at a line break is a string.

mod number;

pub use number::scan_number;

use lexer_core::{
    Category, ClassifiedLine, CommentConfig, Cursor, FoldLevel, GrammarInfo, KeywordSet,
    LineClassifier, LineState, SpanSink, pack_cookie, unpack_cookie,
};

/// JSON keywords, ordinally sorted.
pub static JSON_KEYWORDS: &[&str] = &["false", "null", "true"];

/// Description of the JSON grammar.
pub const JSON_GRAMMAR: GrammarInfo = GrammarInfo {
    name: "json",
    description: "JSON file",
    extensions: &["json"],
    comments: CommentConfig::NONE,
};

const FLAG_STRING: u8 = 0x01;

/// The construct a JSON line starts inside of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JsonMode {
    /// Between tokens.
    #[default]
    Value,
    /// Inside `"..."`.
    String,
}

/// State at a JSON line boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonState {
    /// Open construct.
    pub mode: JsonMode,
    /// Object/array nesting level.
    pub fold: FoldLevel,
}

impl LineState for JsonState {
    fn fold_level(&self) -> FoldLevel {
        self.fold
    }

    fn to_cookie(&self) -> u16 {
        let flags = match self.mode {
            JsonMode::Value => 0,
            JsonMode::String => FLAG_STRING,
        };
        pack_cookie(flags, self.fold)
    }

    fn from_cookie(cookie: u16) -> Self {
        let (flags, fold) = unpack_cookie(cookie);
        let mode = if flags & FLAG_STRING != 0 {
            JsonMode::String
        } else {
            JsonMode::Value
        };
        Self { mode, fold }
    }
}

/// Incremental JSON line lexer.
#[derive(Debug, Clone, Copy)]
pub struct JsonClassifier {
    keywords: KeywordSet,
}

impl Default for JsonClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonClassifier {
    /// Create a JSON classifier.
    pub const fn new() -> Self {
        Self {
            keywords: KeywordSet::from_sorted(JSON_KEYWORDS),
        }
    }
}

impl LineClassifier for JsonClassifier {
    type State = JsonState;

    fn info(&self) -> &GrammarInfo {
        &JSON_GRAMMAR
    }

    fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    fn classify_chars(&self, state: JsonState, line: &[char]) -> ClassifiedLine<JsonState> {
        let mut state = state;
        let mut cursor = Cursor::new(line);
        let mut sink = SpanSink::with_capacity(line.len());

        if cursor.is_empty() {
            // nothing to do
        } else if state.mode == JsonMode::String {
            sink.mark(0, Category::String);
        } else {
            cursor.skip_blanks();
        }

        while let Some(c) = cursor.current() {
            if state.mode == JsonMode::String {
                if c == '\\' {
                    cursor.bump(2);
                    continue;
                }
                if c == '"' {
                    state.mode = JsonMode::Value;
                }
                cursor.bump(1);
                continue;
            }

            if c == '"' {
                sink.mark(cursor.pos(), Category::String);
                state.mode = JsonMode::String;
                cursor.bump(1);
                continue;
            }

            match c {
                '[' | '{' => state.fold.open(),
                ']' | '}' => state.fold.close(),
                _ => {}
            }

            match c {
                // begin-array, end-array, begin-object, end-object, name and value separators
                '[' | ']' | '{' | '}' | ':' | ',' => {
                    sink.mark(cursor.pos(), Category::Operator);
                    cursor.bump(1);
                }
                '-' | '0'..='9' => {
                    sink.mark(cursor.pos(), Category::Number);
                    scan_number(&mut cursor);
                }
                c if c.is_alphabetic() => {
                    let start = cursor.pos();
                    cursor.eat_while(char::is_alphabetic);
                    let word: String = cursor.slice_from(start).iter().collect();
                    let category = if self.keywords.contains(&word) {
                        Category::Keyword
                    } else {
                        Category::Text
                    };
                    sink.mark(start, category);
                }
                _ => {
                    sink.mark(cursor.pos(), Category::Text);
                    cursor.bump(1);
                    cursor.skip_blanks();
                }
            }
        }

        ClassifiedLine {
            spans: sink.into_spans(),
            state,
        }
    }
}
