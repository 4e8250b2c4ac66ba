#![warn(missing_docs)]
//! `include-scanner` - dependency discovery for C/C++ sources.
//!
//! Starting from one source file, [`IncludeScanner`] reads it line by line (decoding UTF-8,
//! UTF-16LE or 8-bit text according to its byte-order mark), picks up local
//! `#include "name"` directives outside block comments, resolves each name against the
//! including file's directory and reports the resulting path to a [`DependencySink`]. Every
//! reported file is then scanned the same way before the includer continues.
//!
//! System includes (`#include <name>`) and names that do not resolve to an existing file are
//! skipped.
//!
//! ```no_run
//! use include_scanner::{IncludeScanner, ScanOptions, RevisitPolicy};
//! use std::path::{Path, PathBuf};
//!
//! let mut deps: Vec<PathBuf> = Vec::new();
//! let scanner = IncludeScanner::with_options(ScanOptions::new().revisit(RevisitPolicy::Once));
//! let summary = scanner.scan("src/main.cpp", &mut |p: &Path| {
//!     deps.push(p.to_path_buf());
//!     true
//! })?;
//! println!("{} dependencies", summary.dependencies);
//! # Ok::<(), include_scanner::ScanError>(())
//! ```

pub mod directive;
pub mod encoding;
mod error;
pub mod lines;
pub mod resolve;
mod scanner;

pub use directive::DirectiveScanner;
pub use encoding::Encoding;
pub use error::ScanError;
pub use lines::TextLines;
pub use resolve::resolve_include;
pub use scanner::{DependencySink, IncludeScanner, RevisitPolicy, ScanOptions, ScanSummary, scan};
