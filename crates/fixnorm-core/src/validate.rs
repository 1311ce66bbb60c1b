use std::path::{Component, Path};

use tracing::warn;

use crate::corpus::pattern::{has_placeholder, has_wildcard};
use crate::corpus::{CorpusSpec, ResolveMode};
use crate::error::{FixnormError, Result};

pub fn validate_spec(s: &CorpusSpec) -> Result<()> {
    match &s.resolve {
        ResolveMode::Range(r) => {
            if r.lo > r.hi {
                return Err(FixnormError::Validation(format!(
                    "range lo ({}) must be <= hi ({})",
                    r.lo, r.hi
                )));
            }
            if r.pattern.is_empty() {
                return Err(FixnormError::Validation("range pattern must not be empty".into()));
            }
            if !has_placeholder(&r.pattern) {
                warn!(pattern = %r.pattern, "range pattern has no index placeholder; every index matches the same entries");
            }
            let pattern = Path::new(&r.pattern);
            if pattern.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(FixnormError::Validation(format!(
                    "range pattern must not contain '..': {}",
                    r.pattern
                )));
            }
            // Wildcards are only honored in the final component.
            if let Some(parent) = pattern.parent() {
                if has_wildcard(&parent.to_string_lossy()) {
                    return Err(FixnormError::Validation(format!(
                        "wildcards are only allowed in the last pattern component: {}",
                        r.pattern
                    )));
                }
            }
        }
        ResolveMode::Names(n) => {
            if n.names.is_empty() {
                return Err(FixnormError::Validation("name list must not be empty".into()));
            }
            for name in &n.names {
                check_segment("test case name", name)?;
            }
        }
    }

    if s.extensions.is_empty() {
        return Err(FixnormError::Validation("at least one extension is required".into()));
    }
    for ext in &s.extensions {
        check_segment("extension", ext)?;
        if ext.starts_with('.') {
            return Err(FixnormError::Validation(format!(
                "extension must be given without a leading dot: {ext}"
            )));
        }
    }
    check_segment("infix", &s.infix)?;

    Ok(())
}

// A single path segment: non-empty, no separators, not "." or "..".
fn check_segment(what: &str, s: &str) -> Result<()> {
    if s.is_empty() || s == "." || s == ".." || s.contains('/') || s.contains('\\') {
        return Err(FixnormError::Validation(format!("invalid {what}: {s:?}")));
    }
    Ok(())
}
