// crates/fixnorm-core/src/fixture.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::corpus::pattern::{glob_entries, EntryKind};
use crate::corpus::{LocateMode, TestCase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionClass {
    PrimarySource,
    Header,
}

impl ExtensionClass {
    pub fn of(ext: &str) -> Self {
        match ext {
            "h" | "hh" | "hpp" | "hxx" => ExtensionClass::Header,
            _ => ExtensionClass::PrimarySource,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixtureFile {
    pub path: PathBuf,
    pub extension_class: ExtensionClass,
    pub case_id: String,
}

/// `<dir>/<base>.<infix>.<ext>`
pub fn expected_path(dir: &Path, base_name: &str, infix: &str, ext: &str) -> PathBuf {
    dir.join(format!("{base_name}.{infix}.{ext}"))
}

pub fn locate(case: &TestCase, mode: LocateMode, extensions: &[String], infix: &str) -> Vec<FixtureFile> {
    match mode {
        LocateMode::ByExtension => locate_by_extension(case, extensions),
        LocateMode::ByName => locate_by_name(case, extensions, infix),
    }
}

/// Every regular file in the case directory ending in `.<ext>`, extension by extension.
pub fn locate_by_extension(case: &TestCase, extensions: &[String]) -> Vec<FixtureFile> {
    let mut out = Vec::new();
    for ext in extensions {
        for path in glob_entries(&case.directory, &format!("*.{ext}"), EntryKind::File) {
            push_owned(&mut out, case, path, ext);
        }
    }
    out
}

/// One candidate per extension; existence is left to the normalizer.
pub fn locate_by_name(case: &TestCase, extensions: &[String], infix: &str) -> Vec<FixtureFile> {
    let mut out = Vec::new();
    for ext in extensions {
        let path = expected_path(&case.directory, &case.base_name, infix, ext);
        push_owned(&mut out, case, path, ext);
    }
    out
}

// Drops anything that would resolve outside the case directory.
fn push_owned(out: &mut Vec<FixtureFile>, case: &TestCase, path: PathBuf, ext: &str) {
    if path.parent() != Some(case.directory.as_path()) {
        warn!(case = %case.id, path = %path.display(), "candidate escapes test case directory; skipped");
        return;
    }
    out.push(FixtureFile {
        path,
        extension_class: ExtensionClass::of(ext),
        case_id: case.id.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_path_joins_infix_and_extension() {
        let p = expected_path(Path::new("a2c/051_result"), "result", "expected", "c");
        assert_eq!(p, PathBuf::from("a2c/051_result/result.expected.c"));
    }

    #[test]
    fn header_class_detected() {
        assert_eq!(ExtensionClass::of("h"), ExtensionClass::Header);
        assert_eq!(ExtensionClass::of("c"), ExtensionClass::PrimarySource);
        assert_eq!(ExtensionClass::of("rs"), ExtensionClass::PrimarySource);
    }

    #[test]
    fn base_name_with_separator_is_rejected() {
        let case = TestCase {
            id: "x".into(),
            directory: PathBuf::from("root/x"),
            base_name: "../escape".into(),
            index: None,
        };
        let got = locate_by_name(&case, &["c".to_string()], "expected");
        assert!(got.is_empty());
    }
}
