// crates/fixnorm-core/src/corpus/mod.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fixture::{self, FixtureFile};

pub mod defaults;
pub mod named;
pub mod pattern;
pub mod range;

pub use named::NamedList;
pub use range::RangeGlob;

/// Separator between a test case's numeric prefix and its short name ("051_result").
pub const NAME_DELIMITER: char = '_';

/// One corpus entry: a fixture directory plus the short name used to derive file names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub id: String,
    pub directory: PathBuf,
    pub base_name: String,
    /// Range index that produced this case (range mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl TestCase {
    /// Build from a literal corpus name; the directory need not exist yet.
    pub fn from_name(root: &Path, name: &str) -> Self {
        Self {
            id: name.to_string(),
            directory: root.join(name),
            base_name: base_name_of(name).to_string(),
            index: None,
        }
    }

    /// Build from a directory discovered on disk.
    pub fn from_dir(directory: PathBuf, index: Option<u32>) -> Self {
        let id = directory
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_name = base_name_of(&id).to_string();
        Self {
            id,
            directory,
            base_name,
            index,
        }
    }
}

/// Remainder after the first delimiter; names without one are their own base name.
pub fn base_name_of(name: &str) -> &str {
    name.split_once(NAME_DELIMITER)
        .map(|(_, rest)| rest)
        .unwrap_or(name)
}

/// A corpus resolution strategy: produce the ordered test cases under `root`.
pub trait Resolve {
    fn resolve(&self, root: &Path) -> Vec<TestCase>;

    /// Locator mode that fits this strategy when the corpus spec names none.
    fn default_locate(&self) -> LocateMode;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    Range(RangeGlob),
    Names(NamedList),
}

impl ResolveMode {
    pub fn label(&self) -> &'static str {
        match self {
            ResolveMode::Range(_) => "range",
            ResolveMode::Names(_) => "names",
        }
    }
}

impl Resolve for ResolveMode {
    fn resolve(&self, root: &Path) -> Vec<TestCase> {
        match self {
            ResolveMode::Range(r) => r.resolve(root),
            ResolveMode::Names(n) => n.resolve(root),
        }
    }

    fn default_locate(&self) -> LocateMode {
        match self {
            ResolveMode::Range(r) => r.default_locate(),
            ResolveMode::Names(n) => n.default_locate(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateMode {
    /// Every file in the case directory carrying one of the extensions.
    ByExtension,
    /// Exactly `<base_name>.<infix>.<ext>` per extension.
    ByName,
}

/// Full description of one normalization run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSpec {
    pub root: PathBuf,
    pub resolve: ResolveMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locate: Option<LocateMode>,
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "defaults::default_infix")]
    pub infix: String,
}

impl CorpusSpec {
    pub fn locate_mode(&self) -> LocateMode {
        self.locate.unwrap_or_else(|| self.resolve.default_locate())
    }

    pub fn test_cases(&self) -> Vec<TestCase> {
        self.resolve.resolve(&self.root)
    }

    pub fn fixtures(&self, case: &TestCase) -> Vec<FixtureFile> {
        fixture::locate(case, self.locate_mode(), &self.extensions, &self.infix)
    }

    pub fn validate(&self) -> Result<()> {
        crate::validate::validate_spec(self)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let spec: CorpusSpec = serde_json::from_slice(bytes)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
