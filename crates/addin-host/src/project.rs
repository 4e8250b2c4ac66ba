//! Default project symbols for projects that contain C++ sources.

use std::collections::HashMap;

use lexer_cpp::is_cpp_file;
use tracing::info;

/// Default C++ compiler.
pub const DEFAULT_CPP: &str = "cl.exe";

/// Default C++ compiler flags.
pub const DEFAULT_CPPFLAGS: &str = concat!(
    r#"/c /nologo /O2 /X"#,
    r#" /I"C:\Program Files\Microsoft Visual Studio\ATL\Include""#,
    r#" /I"C:\Program Files\Microsoft Visual Studio\Include""#,
    r#" /I"C:\Program Files\Microsoft Visual Studio\MFC\Include""#,
);

/// Project symbol storage (the `$(NAME)` macros used by build commands).
pub trait ProjectSymbols {
    /// Current value of `name`, if set.
    fn symbol(&self, name: &str) -> Option<&str>;
    /// Set `name` to `value`.
    fn set_symbol(&mut self, name: &str, value: &str);
}

impl ProjectSymbols for HashMap<String, String> {
    fn symbol(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn set_symbol(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

/// Fill in `CPP` and `CPPFLAGS` when the project has a `.cpp` file and `CPP` is unset or empty.
///
/// Returns `true` when defaults were applied. Existing non-empty settings are never touched.
pub fn apply_default_symbols<'a>(
    files: impl IntoIterator<Item = &'a str>,
    symbols: &mut impl ProjectSymbols,
) -> bool {
    if !files.into_iter().any(is_cpp_file) {
        return false;
    }
    if symbols.symbol("CPP").is_some_and(|value| !value.is_empty()) {
        return false;
    }
    info!("applying default C++ project symbols");
    symbols.set_symbol("CPP", DEFAULT_CPP);
    symbols.set_symbol("CPPFLAGS", DEFAULT_CPPFLAGS);
    true
}
