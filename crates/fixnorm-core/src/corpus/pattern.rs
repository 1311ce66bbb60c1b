// crates/fixnorm-core/src/corpus/pattern.rs
//
// Index templating and single-component wildcard matching for corpus globs.
//
// Template placeholders:
//   {}      -> decimal index
//   {:0N}   -> index zero-padded to width N
// Wildcards (last path component only):
//   *       -> any run of characters, including none
//   ?       -> exactly one character

use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// Substitute every index placeholder in `template`.
/// Unrecognized `{...}` sequences are copied through untouched.
pub fn expand_index(template: &str, index: u32) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        match parse_placeholder(&after[..close]) {
            Some(0) => out.push_str(&index.to_string()),
            Some(width) => out.push_str(&format!("{index:0width$}")),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

pub fn has_placeholder(template: &str) -> bool {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return false;
        };
        if parse_placeholder(&after[..close]).is_some() {
            return true;
        }
        rest = &after[close + 1..];
    }
    false
}

/// Widest zero padding accepted; u32::MAX has ten digits.
pub const MAX_PAD_WIDTH: usize = 10;

// "" -> width 0 (no padding), ":0N" -> width N (N <= MAX_PAD_WIDTH)
fn parse_placeholder(inner: &str) -> Option<usize> {
    if inner.is_empty() {
        return Some(0);
    }
    let digits = inner.strip_prefix(":0")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&w| w <= MAX_PAD_WIDTH)
}

pub fn has_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();

    let mut dp = vec![vec![false; t.len() + 1]; p.len() + 1];
    dp[0][0] = true;

    for i in 1..=p.len() {
        if p[i - 1] == '*' {
            dp[i][0] = dp[i - 1][0];
        }
    }

    for i in 1..=p.len() {
        for j in 1..=t.len() {
            dp[i][j] = match p[i - 1] {
                '*' => dp[i - 1][j] || dp[i][j - 1],
                '?' => dp[i - 1][j - 1],
                c => c == t[j - 1] && dp[i - 1][j - 1],
            };
        }
    }

    dp[p.len()][t.len()]
}

/// Expand `pattern` (relative to `base`) into the sorted list of existing entries.
///
/// Only the final component may carry wildcards. Hidden entries are skipped
/// unless the pattern's final component itself starts with a dot. A base that
/// cannot be listed yields no matches.
pub fn glob_entries(base: &Path, pattern: &str, kind: EntryKind) -> Vec<PathBuf> {
    let full = base.join(pattern);
    let Some(leaf) = full.file_name().and_then(|s| s.to_str()).map(str::to_owned) else {
        return Vec::new();
    };
    let parent = full.parent().map(Path::to_path_buf).unwrap_or_default();

    if !has_wildcard(&leaf) {
        return if kind_matches(&full, kind) { vec![full] } else { Vec::new() };
    }

    let entries = match std::fs::read_dir(if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent.as_path()
    }) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!(dir = %parent.display(), error = %e, "glob base not listable");
            return Vec::new();
        }
    };

    let allow_hidden = leaf.starts_with('.');
    let mut out: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_owned();
            if name.starts_with('.') && !allow_hidden {
                return None;
            }
            if !wildcard_match(&leaf, &name) {
                return None;
            }
            let path = parent.join(&name);
            kind_matches(&path, kind).then_some(path)
        })
        .collect();
    out.sort();
    out
}

fn kind_matches(path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::Dir => path.is_dir(),
        EntryKind::File => path.is_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_plain_and_padded() {
        assert_eq!(expand_index("{}_*", 46), "46_*");
        assert_eq!(expand_index("{:03}_*", 7), "007_*");
        assert_eq!(expand_index("a/{}/b{}", 5), "a/5/b5");
    }

    #[test]
    fn expand_leaves_unknown_braces() {
        assert_eq!(expand_index("{x}_{}", 1), "{x}_1");
        assert_eq!(expand_index("open{", 1), "open{");
    }

    #[test]
    fn oversized_padding_is_left_literal() {
        assert_eq!(expand_index("{:010}", 7), "0000000007");
        assert_eq!(expand_index("{:09999999999}_*", 7), "{:09999999999}_*");
        assert_eq!(expand_index("{:011}", 7), "{:011}");
        assert!(!has_placeholder("{:011}_*"));
    }

    #[test]
    fn placeholder_detection() {
        assert!(has_placeholder("{}_*"));
        assert!(has_placeholder("dir_{:04}"));
        assert!(!has_placeholder("{name}_*"));
        assert!(!has_placeholder("plain"));
    }

    #[test]
    fn wildcard_star_and_question() {
        assert!(wildcard_match("46_*", "46_binary"));
        assert!(wildcard_match("46_*", "46_"));
        assert!(!wildcard_match("46_*", "460_x"));
        assert!(wildcard_match("*.c", "enum.expected.c"));
        assert!(!wildcard_match("*.c", "enum.expected.h"));
        assert!(wildcard_match("0?_x", "07_x"));
        assert!(!wildcard_match("0?_x", "0_x"));
    }
}
