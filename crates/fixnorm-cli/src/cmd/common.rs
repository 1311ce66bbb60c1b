// crates/fixnorm-cli/src/cmd/common.rs

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use fixnorm_core::corpus::defaults;
use fixnorm_core::pipeline::run_corpus;
use fixnorm_core::{CorpusSpec, LocateMode, NormalizeOptions, Tally};

use crate::io::report::OutcomePrinter;

/// Flags shared by every command that touches files.
#[derive(Args, Debug, Clone, Default)]
pub struct RunFlags {
    /// Report files that would change, write nothing, exit non-zero if any would
    #[arg(long)]
    pub check: bool,

    /// Re-read each written file and confirm bytes and logical content
    #[arg(long)]
    pub verify: bool,

    /// Emit one JSON object per outcome (JSONL) plus a summary object
    #[arg(long)]
    pub json: bool,
}

impl RunFlags {
    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions {
            dry_run: self.check,
            verify: self.verify,
        }
    }
}

/// Locator and file-name knobs shared by `range` and `list`.
#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    /// Corpus root directory
    #[arg(long, default_value = defaults::A2C_ROOT)]
    pub root: PathBuf,

    /// Fixture extension without the dot (repeatable, order kept)
    #[arg(long = "ext", default_values_t = defaults::default_extensions())]
    pub extensions: Vec<String>,

    /// How fixtures are found inside each test case directory
    #[arg(long, value_enum)]
    pub locate: Option<LocateArg>,

    /// Marker between base name and extension for name-derived fixtures
    #[arg(long, default_value = defaults::EXPECTED_INFIX)]
    pub infix: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LocateArg {
    Extension,
    Name,
}

impl From<LocateArg> for LocateMode {
    fn from(a: LocateArg) -> Self {
        match a {
            LocateArg::Extension => LocateMode::ByExtension,
            LocateArg::Name => LocateMode::ByName,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Builtin {
    Range,
    Names,
}

impl Builtin {
    pub fn spec(self) -> CorpusSpec {
        match self {
            Builtin::Range => defaults::range_corpus(),
            Builtin::Names => defaults::names_corpus(),
        }
    }
}

/// Built-in corpus by name, or the crate default when none is picked.
pub fn builtin_spec(builtin: Option<Builtin>) -> CorpusSpec {
    builtin.map_or_else(defaults::default_corpus, Builtin::spec)
}

/// Validate, run, print, and gate on `--check`.
pub fn execute(spec: &CorpusSpec, flags: &RunFlags) -> anyhow::Result<()> {
    spec.validate()?;

    let mut printer = OutcomePrinter::new(flags.json);
    let tally = run_corpus(spec, &flags.options(), Tally::new(), |case, o| {
        printer.outcome(Some(case.id.as_str()), o)
    });
    printer.finish_corpus(&tally)?;

    finish(&tally, flags)
}

pub fn finish(tally: &Tally, flags: &RunFlags) -> anyhow::Result<()> {
    if flags.check && tally.pending > 0 {
        anyhow::bail!("{} fixture file(s) need line-ending normalization", tally.pending);
    }
    Ok(())
}
