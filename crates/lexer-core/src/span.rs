//! Color categories and color-change points.

use serde::{Deserialize, Serialize};

/// Highlighting category of a run of text.
///
/// These are only identifiers. The host (or a theme layer) maps them to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plain text (identifiers that are not keywords, punctuation without a category, ...).
    Text,
    /// A reserved word of the grammar.
    Keyword,
    /// Line or block comment.
    Comment,
    /// String or character literal.
    String,
    /// Numeric literal.
    Number,
    /// Operator or structural punctuation.
    Operator,
    /// Preprocessor directive.
    Preprocessor,
}

impl Category {
    /// Short lowercase name (used by the CLI and in logs).
    pub fn name(self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Keyword => "keyword",
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Operator => "operator",
            Category::Preprocessor => "preprocessor",
        }
    }
}

/// A color-change point: text from `column` up to the next span (or end of line) is `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSpan {
    /// Start column (character index within the line).
    pub column: usize,
    /// Category of the run starting at `column`.
    pub category: Category,
}

impl ColorSpan {
    /// Create a color-change point.
    pub fn new(column: usize, category: Category) -> Self {
        Self { column, category }
    }
}

/// Collects [`ColorSpan`]s for one line, coalescing adjacent runs of the same category.
///
/// Guarantees for the produced list:
/// - columns are strictly increasing
/// - two consecutive spans never share a category
#[derive(Debug, Default, Clone)]
pub struct SpanSink {
    spans: Vec<ColorSpan>,
}

impl SpanSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink sized for a line of `len` characters.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            spans: Vec::with_capacity(len.min(64)),
        }
    }

    /// Mark `column` as the start of a `category` run.
    ///
    /// Suppressed when the previous run already has this category. A second mark at the
    /// same column replaces the earlier one (the earlier run would be empty).
    pub fn mark(&mut self, column: usize, category: Category) {
        if let Some(last) = self.spans.last_mut() {
            if last.category == category {
                return;
            }
            if last.column >= column {
                self.spans.pop();
                if self.spans.last().is_some_and(|prev| prev.category == category) {
                    return;
                }
            }
        }
        self.spans.push(ColorSpan::new(column, category));
    }

    /// Consume the sink.
    pub fn into_spans(self) -> Vec<ColorSpan> {
        self.spans
    }
}

/// Expand a span list into `(start, end, category)` runs for a line of `line_len` columns.
///
/// Text before the first span has no run (the host paints it with its default color).
pub fn span_runs(spans: &[ColorSpan], line_len: usize) -> Vec<(usize, usize, Category)> {
    let mut runs = Vec::with_capacity(spans.len());
    for (i, span) in spans.iter().enumerate() {
        let end = spans
            .get(i + 1)
            .map(|next| next.column)
            .unwrap_or(line_len)
            .max(span.column);
        runs.push((span.column, end, span.category));
    }
    runs
}
