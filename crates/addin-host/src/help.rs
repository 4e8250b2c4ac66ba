//! Keyword help (F1 on a word in a source document).

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::registry::Registry;

/// Longest keyword echoed back in help text.
const MAX_TOPIC_CHARS: usize = 128;

/// A keyword the host asked for help on, claimed by one of the grammars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpTopic {
    /// Grammar that owns the keyword.
    pub grammar: &'static str,
    /// Description of the owning file type.
    pub description: &'static str,
    /// The keyword.
    pub keyword: String,
}

impl fmt::Display for HelpTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = self.keyword.chars().take(MAX_TOPIC_CHARS).collect();
        write!(f, "{}: '{}' is a keyword", self.description, shown)
    }
}

/// Handle a help request for `word` typed in `document`.
///
/// The request is claimed only when `document` belongs to a registered file type and `word`
/// is one of that grammar's keywords; otherwise `None` lets the host fall back to its own
/// help.
pub fn keyword_help(registry: &Registry, word: &str, document: &Path) -> Option<HelpTopic> {
    let file_type = registry.for_file(document).ok()?;
    if !file_type.grammar.is_keyword(word) {
        return None;
    }
    let info = file_type.grammar.info();
    Some(HelpTopic {
        grammar: info.name,
        description: info.description,
        keyword: word.to_owned(),
    })
}
