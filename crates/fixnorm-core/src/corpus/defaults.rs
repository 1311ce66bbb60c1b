// crates/fixnorm-core/src/corpus/defaults.rs
//
// Built-in corpus: the a2c enum fixtures 046..=070.
// The range form came first; the named form replaced it once directories
// started holding generated output next to the expected files.

use std::path::PathBuf;

use super::{CorpusSpec, LocateMode, NamedList, RangeGlob, ResolveMode};

pub const A2C_ROOT: &str = "crates/auto-lang/test/a2c";

pub const A2C_RANGE_LO: u32 = 46;
pub const A2C_RANGE_HI: u32 = 70;
/// Directories carry three-digit prefixes ("046_binary").
pub const A2C_RANGE_PATTERN: &str = "{:03}_*";

pub const A2C_NAMES: [&str; 25] = [
    "046_binary",
    "047_tristate",
    "048_direction",
    "049_status",
    "050_mode",
    "051_result",
    "052_phase",
    "053_level",
    "054_state",
    "055_type",
    "056_side",
    "057_flow",
    "058_gate",
    "059_path",
    "060_color",
    "061_size",
    "062_speed",
    "063_power",
    "064_signal",
    "065_zone",
    "066_mode2",
    "067_link",
    "068_source",
    "069_target",
    "070_format",
];

/// Primary source first, then header.
pub const EXTENSIONS: [&str; 2] = ["c", "h"];

pub const EXPECTED_INFIX: &str = "expected";

pub fn default_extensions() -> Vec<String> {
    EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

pub fn default_infix() -> String {
    EXPECTED_INFIX.to_string()
}

pub fn range_corpus() -> CorpusSpec {
    CorpusSpec {
        root: PathBuf::from(A2C_ROOT),
        resolve: ResolveMode::Range(RangeGlob::new(A2C_RANGE_LO, A2C_RANGE_HI, A2C_RANGE_PATTERN)),
        locate: Some(LocateMode::ByExtension),
        extensions: default_extensions(),
        infix: default_infix(),
    }
}

pub fn names_corpus() -> CorpusSpec {
    CorpusSpec {
        root: PathBuf::from(A2C_ROOT),
        resolve: ResolveMode::Names(NamedList::new(A2C_NAMES)),
        locate: Some(LocateMode::ByName),
        extensions: default_extensions(),
        infix: default_infix(),
    }
}

/// The corpus a bare `run` processes.
pub fn default_corpus() -> CorpusSpec {
    names_corpus()
}
