//! Extraction of `#include "name"` directives, line by line.

/// Per-file directive extractor. Tracks `/* ... */` comments across lines.
#[derive(Debug, Default, Clone)]
pub struct DirectiveScanner {
    in_comment: bool,
}

fn skip_blanks(s: &str) -> &str {
    s.trim_start_matches([' ', '\t'])
}

impl DirectiveScanner {
    /// Create a scanner positioned at the start of a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous line left a block comment open.
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Examine one line and return the quoted name of a local include, if the line is one.
    ///
    /// Leading block comments are skipped. Only `#include "name"` forms are returned;
    /// `#include <name>`, other directives and commented-out text yield `None`.
    pub fn scan_line<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        let mut rest = line;
        loop {
            if self.in_comment {
                let end = rest.find("*/")?;
                rest = &rest[end + 2..];
                self.in_comment = false;
            }
            rest = skip_blanks(rest);
            match rest.strip_prefix("/*") {
                Some(after) => {
                    rest = after;
                    self.in_comment = true;
                }
                None => break,
            }
        }

        let Some(directive) = rest.strip_prefix('#') else {
            self.track_comments(rest);
            return None;
        };
        match include_name(directive) {
            Some((name, after)) => {
                self.track_comments(after);
                Some(name)
            }
            None => {
                self.track_comments(directive);
                None
            }
        }
    }

    /// Look for a block comment left open at the end of `text`.
    fn track_comments(&mut self, text: &str) {
        let mut chars = text.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' | '\'' => {
                    let mut escaped = false;
                    for (_, q) in chars.by_ref() {
                        if escaped {
                            escaped = false;
                        } else if q == '\\' {
                            escaped = true;
                        } else if q == c {
                            break;
                        }
                    }
                }
                '/' if text[i + 1..].starts_with('/') => return,
                '/' if text[i + 1..].starts_with('*') => match text[i + 2..].find("*/") {
                    Some(end) => {
                        let resume = i + 2 + end + 2;
                        while chars.next_if(|&(j, _)| j < resume).is_some() {}
                    }
                    None => {
                        self.in_comment = true;
                        return;
                    }
                },
                _ => {}
            }
        }
    }
}

/// Parse the text after `#`: blanks, `include`, blanks, then a `"`-quoted name.
///
/// Returns the name and the text following its closing quote.
fn include_name(directive: &str) -> Option<(&str, &str)> {
    let rest = skip_blanks(directive).strip_prefix("include")?;
    let quoted = skip_blanks(rest).strip_prefix('"')?;
    let end = quoted.find('"')?;
    Some((&quoted[..end], &quoted[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(lines: &[&str]) -> Vec<String> {
        let mut scanner = DirectiveScanner::new();
        lines
            .iter()
            .filter_map(|line| scanner.scan_line(line).map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_include_forms() {
        assert_eq!(
            scan(&[
                r#"#include "a.h""#,
                r#"  #  include   "sub/b.h"  // note"#,
                "\t#include\t\"c.h\"",
                "#include <vector>",
                r#"#define X "d.h""#,
                r#"#include "unterminated"#,
                r#"int x; #include "e.h""#,
                "#include",
            ]),
            vec!["a.h", "sub/b.h", "c.h"]
        );
    }

    #[test]
    fn test_block_comments_hide_includes() {
        assert_eq!(
            scan(&[
                "/*",
                r#"#include "hidden.h""#,
                r#"*/ #include "after.h""#,
                r#"/* one */ /* two */ #include "twice.h""#,
                r#"/* open #include "no.h""#,
                "still inside */",
                r#"#include "yes.h""#,
            ]),
            vec!["after.h", "twice.h", "yes.h"]
        );
    }

    #[test]
    fn test_comment_opened_after_code() {
        let mut scanner = DirectiveScanner::new();
        assert_eq!(scanner.scan_line("int x; /* starts here"), None);
        assert!(scanner.in_comment());
        assert_eq!(scanner.scan_line(r#"#include "commented.h""#), None);
        assert_eq!(scanner.scan_line(r#"*/"#), None);
        assert!(!scanner.in_comment());

        assert_eq!(scanner.scan_line(r#"#include "a.h" /* trailing"#), Some("a.h"));
        assert!(scanner.in_comment());
        assert_eq!(scanner.scan_line("*/"), None);

        // Comment markers inside literals and line comments do not count.
        assert_eq!(scanner.scan_line(r#"s = "/*"; c = '/'; // /*"#), None);
        assert!(!scanner.in_comment());
        assert_eq!(scanner.scan_line("a /* x */ b"), None);
        assert!(!scanner.in_comment());
    }
}
