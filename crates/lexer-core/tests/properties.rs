use lexer_core::{Category, FoldLevel, SpanSink, fold_regions};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Text),
        Just(Category::Keyword),
        Just(Category::Comment),
        Just(Category::String),
        Just(Category::Number),
        Just(Category::Operator),
        Just(Category::Preprocessor),
    ]
}

/// Marks at non-decreasing columns, as a lexer walking a line emits them.
fn marks() -> impl Strategy<Value = Vec<(usize, Category)>> {
    prop::collection::vec((0usize..4, category()), 0..32).prop_map(|steps| {
        let mut column = 0;
        steps
            .into_iter()
            .map(|(advance, category)| {
                column += advance;
                (column, category)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sink_output_is_ordered_and_coalesced(marks in marks()) {
        let mut sink = SpanSink::new();
        for &(column, category) in &marks {
            sink.mark(column, category);
        }
        let spans = sink.into_spans();

        for pair in spans.windows(2) {
            prop_assert!(pair[0].column < pair[1].column);
            prop_assert_ne!(pair[0].category, pair[1].category);
        }
        for span in &spans {
            prop_assert!(marks.iter().any(|&(column, _)| column == span.column));
        }
        prop_assert_eq!(spans.last().map(|s| s.category), marks.last().map(|m| m.1));
    }

    #[test]
    fn fold_regions_stay_inside_the_document(levels in prop::collection::vec(0u8..6, 0..40)) {
        let levels: Vec<FoldLevel> = levels.into_iter().map(FoldLevel::new).collect();
        let deepest = levels.iter().map(|l| l.get()).max().unwrap_or(0);
        let last_line = levels.len().saturating_sub(1);

        for region in fold_regions(&levels) {
            prop_assert!(region.start_line < region.end_line);
            prop_assert!(region.end_line <= last_line);
            prop_assert!(region.depth >= 1);
            prop_assert!(region.depth <= deepest);
        }
    }

    #[test]
    fn constant_levels_fold_once_per_level(level in 0u8..6, len in 0usize..20) {
        let levels = vec![FoldLevel::new(level); len];
        let regions = fold_regions(&levels);
        // A document that starts nested has one region per level spanning all of it.
        if level == 0 || len < 2 {
            prop_assert!(regions.is_empty());
        } else {
            prop_assert_eq!(regions.len(), level as usize);
        }
    }
}
