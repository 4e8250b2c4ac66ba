//! Fold levels and fold regions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A saturating nesting counter in `0..=255`, used to drive the folding margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoldLevel(u8);

impl FoldLevel {
    /// Outermost level.
    pub const MIN: FoldLevel = FoldLevel(0);
    /// Innermost level; opening another block stays here.
    pub const MAX: FoldLevel = FoldLevel(u8::MAX);

    /// Create a fold level.
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Raw level value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Enter a block (saturates at [`FoldLevel::MAX`]).
    pub fn open(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Leave a block (saturates at [`FoldLevel::MIN`]).
    pub fn close(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

impl fmt::Display for FoldLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A foldable line range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldRegion {
    /// Start line number
    pub start_line: usize,
    /// End line number (inclusive)
    pub end_line: usize,
    /// Nesting depth of the region (1 = outermost).
    pub depth: u8,
}

impl FoldRegion {
    /// Create a folding region for an inclusive line range.
    pub fn new(start_line: usize, end_line: usize, depth: u8) -> Self {
        Self {
            start_line,
            end_line,
            depth,
        }
    }
}

/// Derive fold regions from per-line fold levels.
///
/// `levels[i]` is the fold level at the *end* of line `i`; the level before line 0 is
/// [`FoldLevel::MIN`]. Each level step up opens a region on that line, each step down
/// closes the innermost open region on that line. Regions still open at the end are closed
/// on the last line. Single-line regions are dropped.
///
/// Regions are returned outermost first: by start line, then longest first.
pub fn fold_regions(levels: &[FoldLevel]) -> Vec<FoldRegion> {
    let mut regions = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut before = FoldLevel::MIN;

    for (line, &after) in levels.iter().enumerate() {
        if after > before {
            for _ in before.get()..after.get() {
                open.push(line);
            }
        } else {
            for _ in after.get()..before.get() {
                let depth = open.len() as u8;
                if let Some(start) = open.pop()
                    && line > start
                {
                    regions.push(FoldRegion::new(start, line, depth));
                }
            }
        }
        before = after;
    }

    let last_line = levels.len().saturating_sub(1);
    while let Some(start) = open.pop() {
        let depth = (open.len() + 1) as u8;
        if last_line > start {
            regions.push(FoldRegion::new(start, last_line, depth));
        }
    }

    regions.sort_by_key(|r| (r.start_line, std::cmp::Reverse(r.end_line), r.depth));
    regions
}
