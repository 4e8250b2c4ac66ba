#![warn(missing_docs)]
//! `addin-host` - the host-facing side of the C++ and JSON add-ins.
//!
//! A [`Registry`] holds the [`FileType`]s an IDE learns about at startup: each pairs a
//! grammar (used through the cookie-based [`Grammar::classify_cookie`] entry point) with
//! optional build commands and an optional dependency scanner. The crate also answers
//! keyword-help requests and fills in default project symbols for C++ projects.
//!
//! # Module Description
//!
//! - [`grammar`] - dispatch over the built-in lexers
//! - [`registry`] - file types and lookup
//! - [`help`] - keyword help
//! - [`project`] - default project symbols

mod error;
pub mod grammar;
pub mod help;
pub mod project;
pub mod registry;

pub use error::HostError;
pub use grammar::{Grammar, HighlightedLine};
pub use help::{HelpTopic, keyword_help};
pub use project::{DEFAULT_CPP, DEFAULT_CPPFLAGS, ProjectSymbols, apply_default_symbols};
pub use registry::{CPP_SHELLS, FileType, FileTypeInfo, Registry, ScannerKind};
