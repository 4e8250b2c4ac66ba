#![warn(missing_docs)]
//! `lexer-core` - shared building blocks for incremental line lexers.
//!
//! A grammar implements [`LineClassifier`]: given the state left by the previous line and the
//! text of the current line, it returns color-change points ([`ColorSpan`]) and the state for
//! the next line. The state carries multi-line constructs (open comments, strings, ...) and a
//! saturating [`FoldLevel`] that drives code folding.
//!
//! ```text
//! line n-1 ──state──▶ classify(line n) ──state──▶ classify(line n+1) ──▶ ...
//!                          │
//!                          └──▶ [ColorSpan { column, category }, ...]
//! ```
//!
//! # Module Description
//!
//! - [`span`] - categories, color spans and the coalescing [`SpanSink`]
//! - [`fold`] - fold levels and fold regions
//! - [`keywords`] - sorted keyword tables
//! - [`cursor`] - character cursor used by grammars
//! - [`classifier`] - the [`LineClassifier`] / [`LineState`] traits and the cookie boundary
//! - [`document`] - cached whole-document highlighting with incremental re-lexing
//! - [`lang`] - static grammar descriptions

pub mod classifier;
pub mod cursor;
pub mod document;
pub mod fold;
pub mod keywords;
pub mod lang;
pub mod span;

pub use classifier::{
    ClassifiedLine, LineClassifier, LineState, classify_lines, pack_cookie, unpack_cookie,
};
pub use cursor::{Cursor, ends_with_continuation, is_blank};
pub use document::{DocumentHighlighter, RelexStats, split_lines};
pub use fold::{FoldLevel, FoldRegion, fold_regions};
pub use keywords::{KeywordSet, KeywordSetError};
pub use lang::{CommentConfig, GrammarInfo};
pub use span::{Category, ColorSpan, SpanSink, span_runs};
