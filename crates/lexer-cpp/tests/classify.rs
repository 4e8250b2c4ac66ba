use lexer_core::{
    Category, ColorSpan, DocumentHighlighter, FoldLevel, FoldRegion, LineClassifier, LineState,
    classify_lines,
};
use lexer_cpp::{CPP_KEYWORDS, CppClassifier, CppMode, CppState};
use pretty_assertions::assert_eq;

fn cpp() -> CppClassifier {
    CppClassifier::new()
}

fn categories(state: CppState, line: &str) -> Vec<(usize, Category)> {
    cpp()
        .classify(state, line)
        .spans
        .into_iter()
        .map(|s| (s.column, s.category))
        .collect()
}

#[test]
fn test_string_literal_is_one_span() {
    assert_eq!(
        categories(CppState::default(), r#"s = "abc def";"#),
        vec![
            (0, Category::Text),
            (2, Category::Operator),
            (3, Category::Text),
            (4, Category::String),
            (13, Category::Text),
        ]
    );
}

#[test]
fn test_string_carries_over_and_closes_on_next_line() {
    let first = cpp().classify(CppState::default(), r#"x = "unterminated"#);
    assert_eq!(first.state.mode, CppMode::String);
    assert_eq!(first.state.to_cookie() & 0x08, 0x08);

    let second = cpp().classify(first.state, r#"still going";"#);
    assert_eq!(
        second.spans,
        vec![
            ColorSpan::new(0, Category::String),
            ColorSpan::new(12, Category::Text),
        ]
    );
    assert_eq!(second.state, CppState::default());
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    let out = cpp().classify(CppState::default(), r#""a\"b" + 1"#);
    assert_eq!(out.state.mode, CppMode::Code);
    assert_eq!(
        out.spans,
        vec![
            ColorSpan::new(0, Category::String),
            ColorSpan::new(6, Category::Text),
            ColorSpan::new(7, Category::Operator),
            ColorSpan::new(8, Category::Text),
            ColorSpan::new(9, Category::Number),
        ]
    );
}

#[test]
fn test_numbers_are_single_spans() {
    for literal in ["0x1A", "0b101", "3.14f", "42ULL", "5e-10"] {
        let line = format!("{literal};");
        assert_eq!(
            categories(CppState::default(), &line),
            vec![(0, Category::Number), (literal.len(), Category::Text)],
            "{literal}"
        );
    }
}

#[test]
fn test_operators_longest_match_first() {
    assert_eq!(
        categories(CppState::default(), "a<<=b"),
        vec![(0, Category::Text), (1, Category::Operator), (4, Category::Text)]
    );
    assert_eq!(
        categories(CppState::default(), "p->*m"),
        vec![(0, Category::Text), (1, Category::Operator), (4, Category::Text)]
    );
    assert_eq!(
        categories(CppState::default(), "std::vector"),
        vec![(0, Category::Text), (3, Category::Operator), (5, Category::Text)]
    );
    // `;` and `#` outside a directive are plain text.
    assert_eq!(
        categories(CppState::default(), "x; #"),
        vec![(0, Category::Text)]
    );
}

#[test]
fn test_every_keyword_is_highlighted() {
    for word in CPP_KEYWORDS {
        assert_eq!(
            categories(CppState::default(), word),
            vec![(0, Category::Keyword)],
            "{word}"
        );
    }
    assert_eq!(categories(CppState::default(), "intx"), vec![(0, Category::Text)]);
    assert_eq!(categories(CppState::default(), "in"), vec![(0, Category::Text)]);
}

#[test]
fn test_line_comment_ends_at_line_break() {
    let out = cpp().classify(CppState::default(), "x++; // trailing");
    assert_eq!(
        out.spans,
        vec![
            ColorSpan::new(0, Category::Text),
            ColorSpan::new(1, Category::Operator),
            ColorSpan::new(3, Category::Text),
            ColorSpan::new(5, Category::Comment),
        ]
    );
    assert_eq!(out.state, CppState::default());
}

#[test]
fn test_line_comment_continues_with_backslash() {
    let out = cpp().classify(CppState::default(), "// comment \\\n");
    assert_eq!(out.state.mode, CppMode::LineComment);

    let next = cpp().classify(out.state, "int still_comment;");
    assert_eq!(next.spans, vec![ColorSpan::new(0, Category::Comment)]);
    assert_eq!(next.state, CppState::default());
}

#[test]
fn test_preprocessor_directive() {
    let out = cpp().classify(CppState::default(), r#"  #include "a.h" // why"#);
    assert_eq!(
        out.spans,
        vec![
            ColorSpan::new(2, Category::Preprocessor),
            ColorSpan::new(17, Category::Comment),
        ]
    );
    assert_eq!(out.state, CppState::default());
}

#[test]
fn test_preprocessor_block_comment_inside_directive() {
    let out = cpp().classify(CppState::default(), "#define A /* x */ 1");
    assert_eq!(
        out.spans,
        vec![
            ColorSpan::new(0, Category::Preprocessor),
            ColorSpan::new(10, Category::Comment),
            ColorSpan::new(17, Category::Preprocessor),
        ]
    );
    assert_eq!(out.state.fold, FoldLevel::MIN);
}

#[test]
fn test_continued_directive() {
    let first = cpp().classify(CppState::default(), "#define MAX(a, b) \\");
    assert_eq!(first.state, CppState::default().in_preprocessor());

    let second = cpp().classify(first.state, "    ((a) > (b) ? (a) : (b))");
    assert_eq!(second.spans, vec![ColorSpan::new(0, Category::Preprocessor)]);
    assert_eq!(second.state, CppState::default());
}

#[test]
fn test_continued_directive_string_resumes_as_string() {
    let first = cpp().classify(CppState::default(), "#define S \"abc \\");
    assert_eq!(first.spans, vec![ColorSpan::new(0, Category::Preprocessor)]);
    assert_eq!(first.state, CppState::new(CppMode::String).in_preprocessor());

    let second = cpp().classify(first.state, "def\" x");
    assert_eq!(
        second.spans,
        vec![
            ColorSpan::new(0, Category::String),
            ColorSpan::new(4, Category::Preprocessor),
        ]
    );
    assert_eq!(second.state, CppState::default());
}

#[test]
fn test_directive_only_at_line_start() {
    let out = cpp().classify(CppState::default(), "x # if");
    assert_eq!(out.state.fold, FoldLevel::MIN);
    assert!(!out.spans.iter().any(|s| s.category == Category::Preprocessor));
}

#[test]
fn test_conditional_directives_fold() {
    let lines = ["#ifdef DEBUG", "# ifndef X", "#endif", "#  endif", "#endif"];
    let folds: Vec<u8> = classify_lines(&cpp(), lines)
        .iter()
        .map(|out| out.state.fold.get())
        .collect();
    assert_eq!(folds, vec![1, 2, 1, 0, 0]);
}

#[test]
fn test_fold_level_saturates() {
    let open = "{".repeat(300);
    let out = cpp().classify(CppState::default(), &open);
    assert_eq!(out.state.fold, FoldLevel::MAX);
    assert_eq!(out.spans, vec![ColorSpan::new(0, Category::Operator)]);

    let close = "}".repeat(10);
    let out = cpp().classify(CppState::default(), &close);
    assert_eq!(out.state.fold, FoldLevel::MIN);
}

#[test]
fn test_reclassification_is_idempotent() {
    let state = CppState::new(CppMode::BlockComment).with_fold(FoldLevel::new(4));
    let line = "end */ if (a <=> b) { return 0x1Fu; } // done";
    assert_eq!(cpp().classify(state, line), cpp().classify(state, line));
}

#[test]
fn test_utf16_columns() {
    // U+1F600 takes two UTF-16 code units.
    let line = "\u{1F600} x = 1;";
    let units: Vec<u16> = line.encode_utf16().collect();
    let (spans, cookie) = cpp().classify_utf16(0, &units);
    assert_eq!(
        spans,
        vec![
            ColorSpan::new(0, Category::Text),
            ColorSpan::new(5, Category::Operator),
            ColorSpan::new(6, Category::Text),
            ColorSpan::new(7, Category::Number),
            ColorSpan::new(8, Category::Text),
        ]
    );
    assert_eq!(cookie, 0);
}

#[test]
fn test_document_folds_and_incremental_update() {
    let text = "int main() {\n    /* multi\n       line */\n    return 0;\n}\n";
    let mut doc = DocumentHighlighter::with_text(cpp(), text);
    assert_eq!(doc.line_count(), 6);
    assert_eq!(
        doc.fold_regions(),
        vec![FoldRegion::new(0, 4, 1), FoldRegion::new(1, 2, 2)]
    );

    // Editing inside the function body does not change any end state: only that line relexes.
    let stats = doc.replace_lines(3, 1, &["    return 1;"]);
    assert_eq!(stats.first_line, 3);
    assert_eq!(stats.relexed, 2);
    assert_eq!(doc.line_text(3), Some("    return 1;"));

    // Commenting out the opening line shifts every end state until the closing brace, where
    // the fold level is back at 0 either way.
    let stats = doc.replace_lines(0, 1, &["/* int main() {"]);
    assert_eq!(stats.relexed, 5);
    assert_eq!(
        doc.state_after(0).map(|s| s.mode),
        Some(CppMode::BlockComment)
    );
    assert_eq!(doc.spans(1), Some(&[ColorSpan::new(0, Category::Comment)][..]));
    assert_eq!(doc.fold_regions(), vec![FoldRegion::new(0, 2, 1)]);
}
