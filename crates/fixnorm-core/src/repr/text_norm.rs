// crates/fixnorm-core/src/repr/text_norm.rs
//
// Line-terminator canonicalization (byte-level).
// Goal: make expected fixtures match the LF-only output of the C generator.
//
// Rules:
// - Convert CRLF and lone CR to LF.
// - Leave all other bytes unchanged (no trailing newline is added).

/// Canonical terminator emitted by the code generator.
pub const CANONICAL_TERMINATOR: u8 = b'\n';

pub fn normalize_newlines(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;
    while i < input.len() {
        let b = input[i];
        if b == b'\r' {
            out.push(CANONICAL_TERMINATOR);
            // CRLF collapses to a single LF
            if i + 1 < input.len() && input[i + 1] == b'\n' {
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        out.push(b);
        i += 1;
    }
    out
}

/// True when `input` already uses LF only.
pub fn is_canonical(input: &[u8]) -> bool {
    !input.contains(&b'\r')
}

/// Split into logical lines, dropping whatever terminator ended each one.
/// A trailing terminator does not produce an empty final line.
pub fn logical_lines(input: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < input.len() {
        match input[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += if input.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < input.len() {
        lines.push(&input[start..]);
    }
    lines
}

/// Terminator-independent digest of the logical content (first 8 bytes of BLAKE3).
///
/// Two inputs that differ only in how their lines are terminated hash equal;
/// whether the text ends with a terminator still counts.
pub fn content_digest(input: &[u8]) -> [u8; 8] {
    let mut hasher = blake3::Hasher::new();
    for line in logical_lines(input) {
        hasher.update(&(line.len() as u64).to_le_bytes());
        hasher.update(line);
    }
    let trailing = matches!(input.last(), Some(b'\n') | Some(b'\r'));
    hasher.update(&[trailing as u8]);
    let h = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&h.as_bytes()[0..8]);
    out
}

pub fn digest_hex(d: &[u8; 8]) -> String {
    d.iter().map(|b| format!("{b:02x}")).collect()
}

