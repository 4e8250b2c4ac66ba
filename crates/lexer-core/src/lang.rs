//! Data-driven grammar descriptions.
//!
//! Hosts use these to register file types and to offer language-aware features (comment
//! toggling, keyword help) without knowing anything about a particular lexer.

/// Comment tokens/config for a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<&'static str>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<&'static str>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<&'static str>,
}

impl CommentConfig {
    /// A language without comments (e.g. JSON).
    pub const NONE: CommentConfig = CommentConfig {
        line: None,
        block_start: None,
        block_end: None,
    };

    /// Create a config that supports both line and block comments.
    pub const fn line_and_block(
        line: &'static str,
        block_start: &'static str,
        block_end: &'static str,
    ) -> Self {
        Self {
            line: Some(line),
            block_start: Some(block_start),
            block_end: Some(block_end),
        }
    }
}

/// Static description of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarInfo {
    /// Short identifier (`"cpp"`, `"json"`).
    pub name: &'static str,
    /// Human-readable file type description (`"C++ file"`).
    pub description: &'static str,
    /// File extensions handled by this grammar, without the leading dot.
    pub extensions: &'static [&'static str],
    /// Comment tokens.
    pub comments: CommentConfig,
}

impl GrammarInfo {
    /// Returns `true` if `extension` (without dot, case-sensitive) belongs to this grammar.
    pub fn handles_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension)
    }
}
