//! File types the add-ins register with the host.

use std::path::Path;

use include_scanner::{IncludeScanner, ScanSummary};
use lexer_cpp::CppClassifier;
use lexer_json::JsonClassifier;
use serde::Serialize;
use tracing::debug;

use crate::error::HostError;
use crate::grammar::Grammar;

/// Dependency scanner attached to a file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScannerKind {
    /// Local `#include "..."` directives.
    Includes,
}

/// A file type: how its sources are colored, built and scanned.
#[derive(Debug, Clone)]
pub struct FileType {
    /// Syntax color parser.
    pub grammar: Grammar,
    /// Build commands, in order. `$!` is the source file, `$@` the target, `$(NAME)` a
    /// project symbol.
    pub shells: &'static [&'static str],
    /// Dependency scanner, if the type has one.
    pub scanner: Option<ScannerKind>,
}

/// Serializable summary of a [`FileType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeInfo {
    /// Grammar name.
    pub name: &'static str,
    /// Description shown by the host.
    pub description: &'static str,
    /// Handled extensions, without the dot.
    pub extensions: &'static [&'static str],
    /// Build commands.
    pub shells: &'static [&'static str],
    /// Dependency scanner.
    pub scanner: Option<ScannerKind>,
}

/// Build command for C++ sources.
pub const CPP_SHELLS: &[&str] = &[r#"$(CPP) $(CPPFLAGS) "$!" -Fo"$@""#];

impl FileType {
    /// The C++ file type.
    pub fn cpp() -> Self {
        Self {
            grammar: Grammar::Cpp(CppClassifier::new()),
            shells: CPP_SHELLS,
            scanner: Some(ScannerKind::Includes),
        }
    }

    /// The JSON file type. JSON files are not built and have no dependencies.
    pub fn json() -> Self {
        Self {
            grammar: Grammar::Json(JsonClassifier::new()),
            shells: &[],
            scanner: None,
        }
    }

    /// Grammar name.
    pub fn name(&self) -> &'static str {
        self.grammar.info().name
    }

    /// Serializable summary.
    pub fn info(&self) -> FileTypeInfo {
        let info = self.grammar.info();
        FileTypeInfo {
            name: info.name,
            description: info.description,
            extensions: info.extensions,
            shells: self.shells,
            scanner: self.scanner,
        }
    }

    /// Scan `path` for dependencies with `scanner`.
    pub fn scan(
        &self,
        scanner: &IncludeScanner,
        path: &Path,
        add_dependency: impl FnMut(&Path) -> bool,
    ) -> Result<ScanSummary, HostError> {
        let mut add_dependency = add_dependency;
        match self.scanner {
            Some(ScannerKind::Includes) => Ok(scanner.scan(path, &mut add_dependency)?),
            None => Err(HostError::NoScanner(self.grammar.info().description)),
        }
    }
}

/// Registered file types, looked up by extension or grammar name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: Vec<FileType>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the C++ and JSON file types.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FileType::cpp());
        registry.register(FileType::json());
        registry
    }

    /// Add a file type. A later registration for the same grammar name replaces the earlier one.
    pub fn register(&mut self, file_type: FileType) {
        let name = file_type.name();
        debug!(name, "registering file type");
        match self.types.iter_mut().find(|t| t.name() == name) {
            Some(existing) => *existing = file_type,
            None => self.types.push(file_type),
        }
    }

    /// All registered file types, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FileType> {
        self.types.iter()
    }

    /// File type by grammar name.
    pub fn by_name(&self, name: &str) -> Result<&FileType, HostError> {
        self.types
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| HostError::UnknownGrammar(name.to_owned()))
    }

    /// File type handling `path`, by its extension (case-sensitive).
    pub fn for_file(&self, path: &Path) -> Result<&FileType, HostError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| {
                self.types
                    .iter()
                    .find(|t| t.grammar.info().handles_extension(ext))
            })
            .ok_or_else(|| HostError::UnknownFileType(path.to_path_buf()))
    }
}
