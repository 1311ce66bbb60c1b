// crates/fixnorm-core/src/normalize.rs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::repr::text_norm;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Normalized,
    NotFound,
    ReadError,
    WriteError,
}

/// Result of normalizing one fixture file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub path: PathBuf,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub bytes_before: usize,
    pub bytes_after: usize,
    /// Terminators differed from canonical form.
    pub changed: bool,
    /// New bytes were persisted.
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl Outcome {
    fn bare(path: &Path, status: Status, detail: Option<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            status,
            detail,
            bytes_before: 0,
            bytes_after: 0,
            changed: false,
            written: false,
            digest: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, Status::ReadError | Status::WriteError)
    }

    /// Would change on a real run but was left alone (check mode).
    pub fn is_pending(&self) -> bool {
        self.status == Status::Normalized && self.changed && !self.written
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizeOptions {
    /// Report what would change without writing.
    pub dry_run: bool,
    /// Re-read every written file and compare against what was intended.
    pub verify: bool,
}

/// Rewrite `path` with LF terminators.
///
/// Never fails: every fault becomes an `Outcome`. The second element holds the
/// bytes that were written, if any.
pub fn normalize_file(path: &Path, opts: &NormalizeOptions) -> (Outcome, Option<Vec<u8>>) {
    let before = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "fixture not found");
            return (Outcome::bare(path, Status::NotFound, None), None);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "fixture read failed");
            return (Outcome::bare(path, Status::ReadError, Some(e.to_string())), None);
        }
    };

    if let Err(e) = std::str::from_utf8(&before) {
        warn!(path = %path.display(), error = %e, "fixture is not valid UTF-8");
        return (
            Outcome::bare(path, Status::ReadError, Some(format!("not valid UTF-8: {e}"))),
            None,
        );
    }

    let digest = text_norm::content_digest(&before);
    let after = text_norm::normalize_newlines(&before);
    let changed = after != before;

    let mut outcome = Outcome {
        path: path.to_path_buf(),
        status: Status::Normalized,
        detail: None,
        bytes_before: before.len(),
        bytes_after: after.len(),
        changed,
        written: false,
        digest: Some(text_norm::digest_hex(&digest)),
    };

    if !changed || opts.dry_run {
        debug!(path = %path.display(), changed, dry_run = opts.dry_run, "fixture not rewritten");
        return (outcome, None);
    }

    if let Err(e) = replace_contents(path, &after) {
        warn!(path = %path.display(), error = %e, "fixture write failed; original left in place");
        outcome.status = Status::WriteError;
        outcome.detail = Some(e.to_string());
        return (outcome, None);
    }
    outcome.written = true;

    if opts.verify {
        if let Some(problem) = verify_written(path, &after, &digest) {
            warn!(path = %path.display(), problem = %problem, "verification failed");
            outcome.status = Status::WriteError;
            outcome.detail = Some(problem);
            return (outcome, Some(after));
        }
    }

    debug!(
        path = %path.display(),
        bytes_before = outcome.bytes_before,
        bytes_after = outcome.bytes_after,
        "fixture normalized"
    );
    (outcome, Some(after))
}

/// Sibling file the new contents are staged in before the rename.
/// Hidden so extension scans never pick it up.
pub fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.fixnorm-tmp"))
}

// Stage next to the target, then rename over it: a failed write never
// leaves a truncated fixture behind.
fn replace_contents(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let staged = staging_path(path);
    let perms = std::fs::metadata(path)?.permissions();

    let staged_ok = std::fs::write(&staged, bytes)
        .and_then(|_| std::fs::set_permissions(&staged, perms))
        .and_then(|_| std::fs::rename(&staged, path));
    if staged_ok.is_err() {
        // no-op when the staging path is not a regular file we created
        let _ = std::fs::remove_file(&staged);
    }
    staged_ok
}

fn verify_written(path: &Path, intended: &[u8], digest_before: &[u8; 8]) -> Option<String> {
    let reread = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => return Some(format!("verify re-read failed: {e}")),
    };
    if reread != intended {
        return Some(format!(
            "verify mismatch: wrote {} bytes, read back {}",
            intended.len(),
            reread.len()
        ));
    }
    if !text_norm::is_canonical(&reread) {
        return Some("verify: carriage returns remain".into());
    }
    if &text_norm::content_digest(&reread) != digest_before {
        return Some("verify: logical content digest changed".into());
    }
    None
}
