// crates/fixnorm-cli/src/cmd/show.rs

use std::path::PathBuf;

use clap::Args;

use super::common::{builtin_spec, Builtin};
use crate::io::manifest;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Which built-in corpus to show (default: the named list)
    #[arg(long, value_enum)]
    pub builtin: Option<Builtin>,

    /// JSON corpus manifest to show instead of a built-in corpus
    #[arg(long, conflicts_with = "builtin")]
    pub manifest: Option<PathBuf>,

    /// Override the corpus root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Also list the fixture candidates of every test case
    #[arg(long)]
    pub fixtures: bool,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let mut spec = match args.manifest.as_deref() {
        Some(p) => manifest::load_manifest(p)?,
        None => builtin_spec(args.builtin),
    };
    if let Some(root) = args.root {
        spec.root = root;
    }
    spec.validate()?;

    println!("{}", spec.to_json_pretty()?);
    println!();
    println!("locate_mode = {:?}", spec.locate_mode());

    let cases = spec.test_cases();
    println!("test_cases  = {}", cases.len());
    for case in &cases {
        println!(
            "case id={} base={} dir={}",
            case.id,
            case.base_name,
            case.directory.display()
        );
        if args.fixtures {
            for f in spec.fixtures(case) {
                let mark = if f.path.exists() { "" } else { " (missing)" };
                println!("  {:?} {}{}", f.extension_class, f.path.display(), mark);
            }
        }
    }
    Ok(())
}
