#![warn(missing_docs)]
//! `lexer-cpp` - incremental C++ line lexer for `lexer-core`.
//!
//! [`CppClassifier`] colors one line at a time and carries open block comments, string and
//! character literals, preprocessor directives continued with `\`, and a fold level driven by
//! braces, `#if`/`#endif` and block comments.
//!
//! ```
//! use lexer_core::{Category, LineClassifier};
//! use lexer_cpp::{CppClassifier, CppMode, CppState};
//!
//! let cpp = CppClassifier::new();
//! let first = cpp.classify(CppState::default(), r#"x = "unterminated"#);
//! assert_eq!(first.state.mode, CppMode::String);
//!
//! let second = cpp.classify(first.state, r#"still going";"#);
//! assert_eq!(second.spans[0].category, Category::String);
//! assert_eq!(second.state.mode, CppMode::Code);
//! ```

mod classifier;
mod keywords;
mod number;
mod state;

pub use classifier::{CPP_GRAMMAR, CppClassifier};
pub use keywords::{CPP_KEYWORDS, cpp_keywords};
pub use number::scan_number;
pub use state::{CppMode, CppState};

/// Returns `true` if `file_name` has the `.cpp` extension (case-sensitive).
pub fn is_cpp_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, extension)| CPP_GRAMMAR.handles_extension(extension))
}
