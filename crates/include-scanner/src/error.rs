use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors that abort a dependency scan.
pub enum ScanError {
    #[error("cannot open '{}': {source}", path.display())]
    /// A source file (the top-level file or a resolved dependency) could not be opened.
    Open {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    /// Reading a line failed part way through a file.
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    #[error("dependency '{}' was rejected", path.display())]
    /// The dependency sink refused a dependency.
    Rejected {
        /// Dependency that was refused.
        path: PathBuf,
    },
}

impl ScanError {
    /// File the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Open { path, .. }
            | ScanError::Read { path, .. }
            | ScanError::Rejected { path } => path,
        }
    }
}
