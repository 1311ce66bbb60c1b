// crates/fixnorm-cli/src/cmd/range.rs

use clap::Args;
use fixnorm_core::corpus::{defaults, RangeGlob};
use fixnorm_core::{CorpusSpec, ResolveMode};

use super::common::{execute, LocateArgs, RunFlags};

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// First index (inclusive)
    #[arg(long, default_value_t = defaults::A2C_RANGE_LO)]
    pub lo: u32,

    /// Last index (inclusive)
    #[arg(long, default_value_t = defaults::A2C_RANGE_HI)]
    pub hi: u32,

    /// Directory glob relative to --root; `{}` or `{:0N}` is replaced by the index
    #[arg(long, default_value = defaults::A2C_RANGE_PATTERN)]
    pub pattern: String,

    #[command(flatten)]
    pub locate: LocateArgs,

    #[command(flatten)]
    pub flags: RunFlags,
}

pub fn run(args: RangeArgs) -> anyhow::Result<()> {
    let spec = CorpusSpec {
        root: args.locate.root,
        resolve: ResolveMode::Range(RangeGlob::new(args.lo, args.hi, args.pattern)),
        locate: args.locate.locate.map(Into::into),
        extensions: args.locate.extensions,
        infix: args.locate.infix,
    };
    execute(&spec, &args.flags)
}
