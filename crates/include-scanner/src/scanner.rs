//! Depth-first include walker.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::directive::DirectiveScanner;
use crate::error::ScanError;
use crate::lines::TextLines;
use crate::resolve::{normalize, resolve_include};

/// Receiver of resolved dependencies.
///
/// Returning `false` rejects the dependency and aborts the scan.
pub trait DependencySink {
    /// Record `path` as a dependency of the file being scanned.
    fn add_dependency(&mut self, path: &Path) -> bool;
}

impl<F> DependencySink for F
where
    F: FnMut(&Path) -> bool,
{
    fn add_dependency(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// How often the same file may be reported and descended into during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevisitPolicy {
    /// Report a file every time it is included, but never descend into a file that is already
    /// on the current include chain. Acyclic graphs are walked exactly like a plain recursive
    /// walk would.
    #[default]
    PerPath,
    /// Report and descend into each file at most once per scan.
    Once,
}

/// Scanner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    revisit: RevisitPolicy,
    max_depth: Option<usize>,
}

impl ScanOptions {
    /// Default options: [`RevisitPolicy::PerPath`], unbounded depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the revisit policy.
    pub fn revisit(mut self, policy: RevisitPolicy) -> Self {
        self.revisit = policy;
        self
    }

    /// Bound the include chain length. Dependencies found deeper than `depth` are still
    /// reported but not scanned. `0` reports only the direct includes of the top-level file.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Configured revisit policy.
    pub fn revisit_policy(&self) -> RevisitPolicy {
        self.revisit
    }

    /// Configured depth bound, if any.
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Counters describing a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files opened and read, including the top-level file.
    pub files_scanned: usize,
    /// Dependencies handed to the sink.
    pub dependencies: usize,
    /// `#include "..."` names that did not resolve to a file.
    pub unresolved: usize,
    /// Dependencies not descended into because they were already on the include chain.
    pub cycles_cut: usize,
}

struct Frame {
    path: PathBuf,
    lines: TextLines<File>,
    directives: DirectiveScanner,
}

impl Frame {
    fn open(path: PathBuf) -> Result<Self, ScanError> {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(ScanError::Open { path, source }),
        };
        let lines = match TextLines::new(file) {
            Ok(lines) => lines,
            Err(source) => return Err(ScanError::Read { path, source }),
        };
        trace!(path = %path.display(), encoding = ?lines.encoding(), "opened");
        Ok(Self {
            path,
            lines,
            directives: DirectiveScanner::new(),
        })
    }

    /// Next local include name in this file, `None` at end of file.
    fn next_include(&mut self) -> Result<Option<String>, ScanError> {
        for line in self.lines.by_ref() {
            let line = line.map_err(|source| ScanError::Read {
                path: self.path.clone(),
                source,
            })?;
            if let Some(name) = self.directives.scan_line(&line) {
                return Ok(Some(name.to_owned()));
            }
        }
        Ok(None)
    }
}

/// Walks `#include "..."` directives depth-first, reporting each resolved file.
///
/// Each dependency is reported before it is scanned, and a dependency's own includes are all
/// reported before the including file continues. The walk keeps an explicit stack of open
/// files, so include depth does not consume native stack. No state survives between calls.
#[derive(Debug, Clone, Default)]
pub struct IncludeScanner {
    options: ScanOptions,
}

impl IncludeScanner {
    /// Scanner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with the given options.
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Active options.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `path` and its local includes, reporting dependencies to `sink`.
    ///
    /// Fails when a file cannot be opened or read, or when `sink` rejects a dependency.
    /// Dependencies reported before a failure stay reported.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn scan(
        &self,
        path: impl AsRef<Path>,
        sink: &mut impl DependencySink,
    ) -> Result<ScanSummary, ScanError> {
        let root = std::path::absolute(path.as_ref())
            .map(|p| normalize(&p))
            .map_err(|source| ScanError::Open {
                path: path.as_ref().to_path_buf(),
                source,
            })?;

        let mut summary = ScanSummary::default();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        visited.insert(root.clone());
        let mut stack = vec![Frame::open(root)?];
        summary.files_scanned += 1;

        while let Some(frame) = stack.last_mut() {
            let Some(name) = frame.next_include()? else {
                stack.pop();
                continue;
            };

            let Some(dependency) = resolve_include(&name, &frame.path) else {
                trace!(name = %name, from = %frame.path.display(), "unresolved include skipped");
                summary.unresolved += 1;
                continue;
            };

            if self.options.revisit == RevisitPolicy::Once && visited.contains(&dependency) {
                trace!(path = %dependency.display(), "already reported");
                continue;
            }

            debug!(path = %dependency.display(), depth = stack.len(), "dependency");
            if !sink.add_dependency(&dependency) {
                return Err(ScanError::Rejected { path: dependency });
            }
            summary.dependencies += 1;
            visited.insert(dependency.clone());

            if stack.iter().any(|f| f.path == dependency) {
                warn!(path = %dependency.display(), "include cycle, not descending");
                summary.cycles_cut += 1;
                continue;
            }
            if self.options.max_depth.is_some_and(|max| stack.len() > max) {
                debug!(path = %dependency.display(), "depth limit reached, not descending");
                continue;
            }

            stack.push(Frame::open(dependency)?);
            summary.files_scanned += 1;
        }

        Ok(summary)
    }
}

/// Scan `path` with default options and report success as a flag.
///
/// Errors are logged; the caller only learns whether the scan completed.
pub fn scan(path: impl AsRef<Path>, mut add_dependency: impl FnMut(&Path) -> bool) -> bool {
    match IncludeScanner::new().scan(path, &mut add_dependency) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "scan failed");
            false
        }
    }
}
