// crates/fixnorm-cli/src/cmd/run.rs

use std::path::PathBuf;

use clap::Args;

use super::common::{builtin_spec, execute, Builtin, RunFlags};
use crate::io::manifest;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Which built-in corpus to process (default: the named list)
    #[arg(long, value_enum)]
    pub builtin: Option<Builtin>,

    /// JSON corpus manifest; replaces the built-in corpus
    #[arg(long, conflicts_with = "builtin")]
    pub manifest: Option<PathBuf>,

    /// Override the corpus root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub flags: RunFlags,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut spec = match args.manifest.as_deref() {
        Some(p) => manifest::load_manifest(p)?,
        None => builtin_spec(args.builtin),
    };
    if let Some(root) = args.root {
        spec.root = root;
    }
    execute(&spec, &args.flags)
}
