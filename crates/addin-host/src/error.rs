use std::path::PathBuf;

use include_scanner::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the host layer.
pub enum HostError {
    #[error("unknown grammar '{0}'")]
    /// No registered file type has this grammar name.
    UnknownGrammar(String),

    #[error("no file type registered for '{}'", .0.display())]
    /// The file's extension is not handled by any registered file type.
    UnknownFileType(PathBuf),

    #[error("{0} files have no dependency scanner")]
    /// The file type cannot scan for dependencies.
    NoScanner(&'static str),

    #[error(transparent)]
    /// The dependency scan failed.
    Scan(#[from] ScanError),
}
