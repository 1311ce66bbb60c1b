// crates/fixnorm-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "fixnorm-cli")]
#[command(about = "Normalize expected-output fixtures to LF line endings", long_about = None)]
pub struct Cli {
    /// Debug-level tracing on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize the built-in corpus (or a --manifest corpus). Default command.
    Run(cmd::run::RunArgs),

    /// Normalize directories matched by an index range + glob pattern
    Range(cmd::range::RangeArgs),

    /// Normalize an explicit list of test case directories
    List(cmd::list::ListArgs),

    /// Normalize individual files
    File(cmd::file::FileArgs),

    /// Print a corpus spec and the test cases it resolves to
    Show(cmd::show::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    io::log::init_tracing(cli.verbose);

    match cli.cmd {
        Some(Commands::Run(args)) => cmd::run::run(args),
        Some(Commands::Range(args)) => cmd::range::run(args),
        Some(Commands::List(args)) => cmd::list::run(args),
        Some(Commands::File(args)) => cmd::file::run(args),
        Some(Commands::Show(args)) => cmd::show::run(args),
        None => cmd::run::run(cmd::run::RunArgs::default()),
    }
}
