//! The C++ line lexer.
//!
//! Comment tokens come from [`CPP_GRAMMAR`]; everything else is fixed C++ syntax.

use crate::keywords::cpp_keywords;
use crate::number::scan_number;
use crate::state::{CppMode, CppState};
use lexer_core::{
    Category, ClassifiedLine, CommentConfig, Cursor, GrammarInfo, KeywordSet, LineClassifier,
    SpanSink, ends_with_continuation,
};

/// Description of the C++ grammar.
pub const CPP_GRAMMAR: GrammarInfo = GrammarInfo {
    name: "cpp",
    description: "C++ file",
    extensions: &["cpp"],
    comments: CommentConfig::line_and_block("//", "/*", "*/"),
};

const OPERATORS_3: [&str; 5] = ["<<=", ">>=", "...", "->*", "<=>"];

const OPERATORS_2: [&str; 21] = [
    "++", "--", "->", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "*=", "/=", "%=", "+=", "-=",
    "&=", "^=", "|=", ".*", "::",
];

const OPERATORS_1: &str = ",*(){}[]=&!+-.<>/%^|?:~";

/// Incremental C++ line lexer.
#[derive(Debug, Clone, Copy)]
pub struct CppClassifier {
    keywords: KeywordSet,
}

impl Default for CppClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CppClassifier {
    /// Create a classifier with the built-in keyword table.
    pub const fn new() -> Self {
        Self {
            keywords: cpp_keywords(),
        }
    }

    /// Create a classifier with a custom keyword table (e.g. a dialect with extra keywords).
    pub const fn with_keywords(keywords: KeywordSet) -> Self {
        Self { keywords }
    }
}

impl LineClassifier for CppClassifier {
    type State = CppState;

    fn info(&self) -> &GrammarInfo {
        &CPP_GRAMMAR
    }

    fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    fn classify_chars(&self, state: CppState, line: &[char]) -> ClassifiedLine<CppState> {
        if line.is_empty() {
            return ClassifiedLine {
                spans: Vec::new(),
                state,
            };
        }

        let mut lexer = LineLexer {
            keywords: &self.keywords,
            comments: &self.info().comments,
            cursor: Cursor::new(line),
            sink: SpanSink::with_capacity(line.len()),
            state,
        };
        lexer.resume();
        lexer.run();

        let state = if ends_with_continuation(line) {
            lexer.state
        } else {
            lexer.state.at_line_break()
        };
        ClassifiedLine {
            spans: lexer.sink.into_spans(),
            state,
        }
    }
}

struct LineLexer<'k, 'a> {
    keywords: &'k KeywordSet,
    comments: &'k CommentConfig,
    cursor: Cursor<'a>,
    sink: SpanSink,
    state: CppState,
}

impl LineLexer<'_, '_> {
    fn mark(&mut self, category: Category) {
        self.sink.mark(self.cursor.pos(), category);
    }

    /// Length in characters of `token` if the cursor is at it.
    fn at_token(&self, token: Option<&str>) -> Option<usize> {
        token
            .filter(|t| !t.is_empty() && self.cursor.at(t))
            .map(|t| t.chars().count())
    }

    /// Open the line in the category the previous line left off in.
    fn resume(&mut self) {
        match self.state.mode {
            CppMode::LineComment | CppMode::BlockComment => self.mark(Category::Comment),
            CppMode::String | CppMode::Char => self.mark(Category::String),
            CppMode::Code if self.state.preprocessor => self.mark(Category::Preprocessor),
            CppMode::Code => {
                self.cursor.skip_blanks();
                if self.cursor.current() == Some('#') {
                    self.directive();
                }
            }
        }
    }

    /// `#` at the start of a fresh line.
    fn directive(&mut self) {
        self.mark(Category::Preprocessor);
        self.state.preprocessor = true;
        self.cursor.bump(1);
        self.cursor.skip_blanks();

        // `if`, `ifdef`, `ifndef`
        if self.cursor.at("if") {
            self.state.fold.open();
        } else if self.cursor.at("endif") {
            self.state.fold.close();
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.cursor.current() {
            match self.state.mode {
                CppMode::String => self.quoted(c, '"'),
                CppMode::Char => self.quoted(c, '\''),
                CppMode::LineComment => break,
                CppMode::BlockComment => self.block_comment(),
                CppMode::Code if self.state.preprocessor => self.directive_body(c),
                CppMode::Code => {
                    if !self.code(c) {
                        break;
                    }
                }
            }
        }
    }

    fn quoted(&mut self, c: char, close: char) {
        if c == '\\' {
            self.cursor.bump(2);
            return;
        }
        if c == close {
            self.state.mode = CppMode::Code;
        }
        self.cursor.bump(1);
    }

    fn block_comment(&mut self) {
        if let Some(len) = self.at_token(self.comments.block_end) {
            self.state.mode = CppMode::Code;
            self.state.fold.close();
            self.cursor.bump(len);
        } else {
            self.cursor.bump(1);
        }
    }

    /// Inside a directive, literals keep the directive color; only comments stand out.
    /// A literal continued onto the next line resumes as a string.
    fn directive_body(&mut self, c: char) {
        if c == '"' {
            self.state.mode = CppMode::String;
            self.cursor.bump(1);
        } else if c == '\'' {
            self.state.mode = CppMode::Char;
            self.cursor.bump(1);
        } else if let Some(len) = self.at_token(self.comments.line) {
            self.mark(Category::Comment);
            self.state.mode = CppMode::LineComment;
            self.cursor.bump(len);
        } else if let Some(len) = self.at_token(self.comments.block_start) {
            self.mark(Category::Comment);
            self.state.mode = CppMode::BlockComment;
            self.state.fold.open();
            self.cursor.bump(len);
        } else {
            self.mark(Category::Preprocessor);
            self.cursor.bump(1);
        }
    }

    /// Returns `false` once the rest of the line is a line comment.
    fn code(&mut self, c: char) -> bool {
        match c {
            '{' => self.state.fold.open(),
            '}' => self.state.fold.close(),
            _ => {}
        }

        if self.at_token(self.comments.line).is_some() {
            self.mark(Category::Comment);
            self.state.mode = CppMode::LineComment;
            return false;
        }
        if let Some(len) = self.at_token(self.comments.block_start) {
            self.mark(Category::Comment);
            self.state.mode = CppMode::BlockComment;
            self.state.fold.open();
            self.cursor.bump(len);
            return true;
        }

        if c == '"' || c == '\'' {
            self.mark(Category::String);
            self.state.mode = if c == '"' {
                CppMode::String
            } else {
                CppMode::Char
            };
            self.cursor.bump(1);
            return true;
        }

        if self.cursor.at_any(&OPERATORS_3) {
            self.mark(Category::Operator);
            self.cursor.bump(3);
        } else if self.cursor.at_any(&OPERATORS_2) {
            self.mark(Category::Operator);
            self.cursor.bump(2);
        } else if OPERATORS_1.contains(c) {
            self.mark(Category::Operator);
            self.cursor.bump(1);
        } else if c.is_ascii_digit() {
            self.mark(Category::Number);
            scan_number(&mut self.cursor);
        } else if c == '_' || c.is_alphabetic() {
            self.identifier();
        } else {
            self.mark(Category::Text);
            self.cursor.bump(1);
            self.cursor.skip_blanks();
        }
        true
    }

    fn identifier(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c == '_' || c.is_alphanumeric());
        let ident: String = self.cursor.slice_from(start).iter().collect();
        let category = if self.keywords.contains(&ident) {
            Category::Keyword
        } else {
            Category::Text
        };
        self.sink.mark(start, category);
    }
}
