// crates/fixnorm-cli/src/io/manifest.rs

use std::path::Path;

use anyhow::{Context, Result};
use fixnorm_core::corpus::NamedList;
use fixnorm_core::CorpusSpec;

/// Load and validate a JSON corpus manifest.
pub fn load_manifest(path: &Path) -> Result<CorpusSpec> {
    let bytes = std::fs::read(path).with_context(|| format!("read manifest {}", path.display()))?;
    let spec = CorpusSpec::from_json(&bytes).with_context(|| format!("decode manifest {}", path.display()))?;
    Ok(spec)
}

/// Load a names file (one test case directory per line).
pub fn load_names_file(path: &Path) -> Result<NamedList> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read names file {}", path.display()))?;
    Ok(NamedList::parse_lines(&text))
}
