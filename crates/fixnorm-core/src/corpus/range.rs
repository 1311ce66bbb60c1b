// crates/fixnorm-core/src/corpus/range.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pattern::{expand_index, glob_entries, EntryKind};
use super::{LocateMode, Resolve, TestCase};

/// Contiguous index range `[lo, hi]` expanded through a directory glob.
///
/// Every directory matched for every index becomes its own test case, so a
/// pattern that matches the same directory for two indices yields it twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeGlob {
    pub lo: u32,
    pub hi: u32,
    pub pattern: String,
}

impl RangeGlob {
    pub fn new(lo: u32, hi: u32, pattern: impl Into<String>) -> Self {
        Self {
            lo,
            hi,
            pattern: pattern.into(),
        }
    }
}

impl Resolve for RangeGlob {
    fn resolve(&self, root: &Path) -> Vec<TestCase> {
        let mut cases = Vec::new();
        for i in self.lo..=self.hi {
            let pat = expand_index(&self.pattern, i);
            let dirs = glob_entries(root, &pat, EntryKind::Dir);
            debug!(index = i, pattern = %pat, matches = dirs.len(), "range index expanded");
            cases.extend(dirs.into_iter().map(|d| TestCase::from_dir(d, Some(i))));
        }
        cases
    }

    fn default_locate(&self) -> LocateMode {
        LocateMode::ByExtension
    }
}
