// crates/fixnorm-cli/src/cmd/list.rs

use std::path::PathBuf;

use clap::Args;
use fixnorm_core::corpus::NamedList;
use fixnorm_core::{CorpusSpec, ResolveMode};

use super::common::{execute, LocateArgs, RunFlags};
use crate::io::manifest;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Test case directory names, e.g. 051_result
    pub names: Vec<String>,

    /// File with one name per line (`#` comments allowed); appended after NAMES
    #[arg(long)]
    pub names_file: Option<PathBuf>,

    #[command(flatten)]
    pub locate: LocateArgs,

    #[command(flatten)]
    pub flags: RunFlags,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let mut names = args.names;
    if let Some(p) = args.names_file.as_deref() {
        names.extend(manifest::load_names_file(p)?.names);
    }
    if names.is_empty() {
        anyhow::bail!("list needs at least one NAME or --names-file");
    }

    let spec = CorpusSpec {
        root: args.locate.root,
        resolve: ResolveMode::Names(NamedList::new(names)),
        locate: args.locate.locate.map(Into::into),
        extensions: args.locate.extensions,
        infix: args.locate.infix,
    };
    execute(&spec, &args.flags)
}
