//! Carry-over state of the C++ lexer.

use lexer_core::{FoldLevel, LineState, pack_cookie, unpack_cookie};

// Cookie flag bits, as understood by the host.
const FLAG_COMMENT: u8 = 0x01;
const FLAG_PREPROCESSOR: u8 = 0x02;
const FLAG_EXT_COMMENT: u8 = 0x04;
const FLAG_STRING: u8 = 0x08;
const FLAG_CHAR: u8 = 0x10;

/// The lexical construct a line starts (or ends) inside of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CppMode {
    /// Plain code.
    #[default]
    Code,
    /// `// ...`, only carried over by a line continuation.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `"..."`
    String,
    /// `'...'`
    Char,
}

/// State at a line boundary: the open construct, whether it sits inside a preprocessor
/// directive, and the fold level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CppState {
    /// Open construct.
    pub mode: CppMode,
    /// Inside a (continued) preprocessor directive.
    pub preprocessor: bool,
    /// Fold level.
    pub fold: FoldLevel,
}

impl CppState {
    /// A state in `mode` at fold level 0, outside any directive.
    pub fn new(mode: CppMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Same state with a different fold level.
    pub fn with_fold(mut self, fold: FoldLevel) -> Self {
        self.fold = fold;
        self
    }

    /// Same state inside a preprocessor directive.
    pub fn in_preprocessor(mut self) -> Self {
        self.preprocessor = true;
        self
    }

    /// State handed to the next line when this line has no `\` continuation.
    ///
    /// Line comments and directives end with the physical line. Open block comments and
    /// unterminated literals carry over.
    pub(crate) fn at_line_break(self) -> Self {
        let mode = match self.mode {
            CppMode::LineComment => CppMode::Code,
            mode => mode,
        };
        Self {
            mode,
            preprocessor: false,
            fold: self.fold,
        }
    }
}

impl LineState for CppState {
    fn fold_level(&self) -> FoldLevel {
        self.fold
    }

    fn to_cookie(&self) -> u16 {
        let mut flags = match self.mode {
            CppMode::Code => 0,
            CppMode::LineComment => FLAG_COMMENT,
            CppMode::BlockComment => FLAG_EXT_COMMENT,
            CppMode::String => FLAG_STRING,
            CppMode::Char => FLAG_CHAR,
        };
        if self.preprocessor {
            flags |= FLAG_PREPROCESSOR;
        }
        pack_cookie(flags, self.fold)
    }

    fn from_cookie(cookie: u16) -> Self {
        let (flags, fold) = unpack_cookie(cookie);
        let mode = if flags & FLAG_STRING != 0 {
            CppMode::String
        } else if flags & FLAG_CHAR != 0 {
            CppMode::Char
        } else if flags & FLAG_COMMENT != 0 {
            CppMode::LineComment
        } else if flags & FLAG_EXT_COMMENT != 0 {
            CppMode::BlockComment
        } else {
            CppMode::Code
        };
        Self {
            mode,
            preprocessor: flags & FLAG_PREPROCESSOR != 0,
            fold,
        }
    }
}
