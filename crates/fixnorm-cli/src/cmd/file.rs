// crates/fixnorm-cli/src/cmd/file.rs

use std::path::PathBuf;

use clap::Args;
use fixnorm_core::pipeline::run_files;
use fixnorm_core::Tally;

use super::common::{finish, RunFlags};
use crate::io::report::OutcomePrinter;

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Files to normalize in place
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub flags: RunFlags,
}

pub fn run(args: FileArgs) -> anyhow::Result<()> {
    let mut printer = OutcomePrinter::new(args.flags.json);
    let tally = run_files(&args.paths, &args.flags.options(), Tally::new(), |o| {
        printer.outcome(None, o)
    });
    printer.finish_files(&tally)?;
    finish(&tally, &args.flags)
}
