// crates/fixnorm-core/src/corpus/named.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LocateMode, Resolve, TestCase};

/// Explicit, ordered list of corpus directory names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedList {
    pub names: Vec<String>,
}

impl NamedList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a names file: one name per line, `#` starts a comment, blanks ignored.
    pub fn parse_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|l| l.split('#').next().unwrap_or("").trim())
                .filter(|l| !l.is_empty()),
        )
    }
}

impl Resolve for NamedList {
    fn resolve(&self, root: &Path) -> Vec<TestCase> {
        self.names
            .iter()
            .map(|name| TestCase::from_name(root, name))
            .collect()
    }

    fn default_locate(&self) -> LocateMode {
        LocateMode::ByName
    }
}
